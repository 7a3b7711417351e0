//! Token records produced by the scanner.
//!
//! A parsed document is a flat array of tokens in discovery order. Each
//! token carries its byte span, its kind, the arena index of its
//! structural parent, and the number of direct children attributed to it.
//! The parent indices are the only tree structure there is; nothing owns
//! anything.

use std::ops::Range;

/// End offset of a container whose closing bracket has not been seen yet.
/// Only observable mid-parse; a successful parse closes every token.
pub(crate) const OPEN_END: u32 = u32::MAX;

/// Index into the token arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(u32);

impl TokenId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        TokenId(index as u32)
    }

    /// Position of the token in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Syntactic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    /// `{...}`; the span includes both braces.
    Object = 0,
    /// `[...]`; the span includes both brackets.
    Array,
    /// Quoted string; the span covers the content between the quotes.
    String,
    /// Unquoted literal (number, `true`, `false`, `null`, or anything
    /// else the grammar lets through); the span covers it exactly.
    Primitive,
}

impl TokenKind {
    /// Check if tokens of this kind can enclose other tokens.
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, TokenKind::Object | TokenKind::Array)
    }
}

/// One structural element of the document.
///
/// 24 bytes: kind (u8) + start/end/size (u32 each) + optional parent index.
/// Offsets are u32, which caps input buffers below 4 GiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Syntactic class.
    pub kind: TokenKind,
    /// Byte offset where the span starts (inclusive).
    pub start: u32,
    /// Byte offset where the span ends (exclusive).
    pub end: u32,
    /// Direct child units attributed during the parse: keys for an
    /// object, elements for an array, values for a key.
    pub size: u32,
    /// Enclosing token, or `None` at root level.
    pub parent: Option<TokenId>,
}

impl Token {
    #[inline]
    pub(crate) fn new(kind: TokenKind, start: u32, end: u32, parent: Option<TokenId>) -> Self {
        Token { kind, start, end, size: 0, parent }
    }

    /// Byte range of the token within the source buffer.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length of the span in bytes. Meaningful once the token is closed.
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Whether the token's end offset has been written. Containers stay
    /// open until their closing bracket; everything else closes at birth.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.end != OPEN_END
    }
}
