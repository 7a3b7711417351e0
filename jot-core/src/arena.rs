//! Fixed-capacity arena the scanner writes into.
//!
//! The caller sizes the arena once; a parse either fits or fails with
//! `CapacityExceeded`. Tokens are appended in discovery order and
//! addressed by `TokenId`. There is no per-token deallocation: `reset`
//! rewinds the cursor and the next parse overwrites from slot 0, so one
//! arena can serve any number of sequential parses without reallocating.

use crate::nav::Node;
use crate::token::{Token, TokenId};

/// Caller-owned token storage with a high-water-mark cursor.
#[derive(Debug)]
pub struct TokenArena {
    /// Populated prefix; never grows past `capacity`.
    tokens: Vec<Token>,
    /// Slot count fixed at construction.
    capacity: usize,
}

impl TokenArena {
    /// Create an arena with room for exactly `capacity` tokens.
    /// Storage is allocated once, up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Fixed slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tokens written by the current parse.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens have been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rewind the cursor to slot 0. Keeps the allocation.
    pub fn reset(&mut self) {
        self.tokens.clear();
    }

    /// Append a token, returning its id, or `None` when every slot is
    /// taken.
    #[inline]
    pub(crate) fn alloc(&mut self, token: Token) -> Option<TokenId> {
        if self.tokens.len() == self.capacity {
            return None;
        }
        let id = TokenId::new(self.tokens.len());
        self.tokens.push(token);
        Some(id)
    }

    /// Get a token by id.
    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    /// Id of the most recently written token.
    #[inline]
    pub(crate) fn last_id(&self) -> Option<TokenId> {
        self.tokens.len().checked_sub(1).map(TokenId::new)
    }

    /// The populated tokens, in discovery order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Navigation handle on the first token: the document root when the
    /// input held a single top-level value.
    pub fn root(&self) -> Option<Node<'_>> {
        self.node(TokenId::new(0))
    }

    /// Navigation handle on an arbitrary token.
    pub fn node(&self, id: TokenId) -> Option<Node<'_>> {
        if id.index() < self.tokens.len() {
            Some(Node::new(&self.tokens, id))
        } else {
            None
        }
    }
}
