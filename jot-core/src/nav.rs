//! Navigation over the flat token array.
//!
//! Tokens only store parent links, but children always come after their
//! parent in discovery order, so child iteration is a bounded forward
//! scan counted against the parent's `size`. Handles are `Copy` and
//! borrow the arena's token slice; nothing here allocates.
//!
//! # Example
//!
//! ```
//! use jot_core::{tokenize, ByteView, TokenArena};
//!
//! let view = ByteView::new(br#"{"a":1,"b":[true,false]}"#);
//! let mut arena = TokenArena::with_capacity(8);
//! tokenize(view, &mut arena).unwrap();
//!
//! let root = arena.root().unwrap();
//! let b = root.field(&view, b"b").unwrap();
//! assert_eq!(b.children().count(), 2);
//! ```

use crate::token::{Token, TokenId, TokenKind};
use crate::view::ByteView;

/// A handle for walking tokens by parent index.
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tokens: &'t [Token],
    id: TokenId,
}

impl<'t> Node<'t> {
    #[inline]
    pub(crate) fn new(tokens: &'t [Token], id: TokenId) -> Self {
        Self { tokens, id }
    }

    /// Get the node's id.
    #[inline]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The underlying token record.
    #[inline]
    pub fn token(&self) -> &'t Token {
        &self.tokens[self.id.index()]
    }

    /// Syntactic kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token().kind
    }

    /// Enclosing node, if any.
    pub fn parent(&self) -> Option<Node<'t>> {
        self.token().parent.map(|id| Node { tokens: self.tokens, id })
    }

    /// Iterate over direct children in document order.
    ///
    /// For an object the children are its keys, each of which carries its
    /// value as its own child; for an array they are the elements.
    pub fn children(&self) -> Children<'t> {
        Children {
            tokens: self.tokens,
            parent: self.id,
            next: self.id.index() + 1,
            remaining: self.token().size,
        }
    }

    /// The value attached to a key token.
    pub fn value(&self) -> Option<Node<'t>> {
        self.children().next()
    }

    /// Look up the value for `name` in an object.
    ///
    /// Keys are compared byte-for-byte against the raw (still escaped)
    /// string content; `view` must hold the buffer the tokens were
    /// parsed from.
    pub fn field(&self, view: &ByteView<'_>, name: &[u8]) -> Option<Node<'t>> {
        if self.kind() != TokenKind::Object {
            return None;
        }
        for key in self.children() {
            let content = match view.content(key.token()) {
                Ok(content) => content,
                Err(_) => continue,
            };
            if content.as_bytes() == name {
                return key.value();
            }
        }
        None
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("token", self.token())
            .finish()
    }
}

/// Iterator over a node's direct children.
///
/// Walks forward from the parent and stops once `size` children have been
/// yielded; subtrees never interleave, so the scan stays within the
/// parent's own region of the array.
pub struct Children<'t> {
    tokens: &'t [Token],
    parent: TokenId,
    next: usize,
    remaining: u32,
}

impl<'t> Iterator for Children<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Node<'t>> {
        while self.remaining > 0 && self.next < self.tokens.len() {
            let index = self.next;
            self.next += 1;
            if self.tokens[index].parent == Some(self.parent) {
                self.remaining -= 1;
                return Some(Node { tokens: self.tokens, id: TokenId::new(index) });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining as usize))
    }
}
