//! Zero-copy access to the bytes behind tokens.
//!
//! `ByteView` is a non-owning window over the caller's buffer. The
//! scanner reads through it and callers use it to pull token contents
//! back out without copying. Slicing is checked twice over: offsets must
//! stay inside the window, and a non-empty slice must not start or end in
//! the middle of a multi-byte UTF-8 codepoint.
//!
//! # Example
//!
//! ```
//! use jot_core::ByteView;
//!
//! let view = ByteView::new("héllo".as_bytes());
//! assert_eq!(view.slice(0, 1).unwrap().as_bytes(), b"h");
//! // Offset 2 is the middle of 'é'.
//! assert!(view.slice(2, 2).is_err());
//! ```

use crate::token::{Token, TokenKind};

// ============================================================================
// Errors
// ============================================================================

/// Why a slice or content request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ViewError {
    /// Requested range extends past the end of the view.
    OutOfRange = 0,
    /// Requested range starts or ends inside a multi-byte codepoint.
    InvalidBoundary,
    /// Content was requested for a token kind that has none (containers).
    WrongTokenKind,
}

impl ViewError {
    /// Get a human-readable message for this error.
    pub fn message(self) -> &'static str {
        match self {
            Self::OutOfRange => "range out of bounds",
            Self::InvalidBoundary => "range splits a codepoint",
            Self::WrongTokenKind => "token kind has no content",
        }
    }
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ViewError {}

/// UTF-8 continuation byte: top two bits are `10`.
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

// ============================================================================
// ByteView
// ============================================================================

/// A non-owning window over a byte buffer.
///
/// Copying the view copies a reference, never the bytes. Token offsets
/// are u32, so buffers must stay under 4 GiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Wrap a buffer.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        debug_assert!(
            bytes.len() < u32::MAX as usize,
            "buffers are limited to 4 GiB"
        );
        Self { bytes }
    }

    /// Length of the window in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw byte at `offset`. Panics when out of bounds, like slice
    /// indexing.
    #[inline]
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// The whole window as a plain slice.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// A sub-window of `len` bytes starting at `start`.
    ///
    /// Fails with `OutOfRange` when the range leaves the window. A
    /// non-empty range fails with `InvalidBoundary` when its first byte
    /// is a UTF-8 continuation byte, or when the byte just past its end
    /// is one (the range would cut the final codepoint short).
    pub fn slice(&self, start: usize, len: usize) -> Result<ByteView<'a>, ViewError> {
        let end = start.checked_add(len).ok_or(ViewError::OutOfRange)?;
        if end > self.bytes.len() {
            return Err(ViewError::OutOfRange);
        }
        if len > 0 {
            if is_continuation(self.bytes[start]) {
                return Err(ViewError::InvalidBoundary);
            }
            if end < self.bytes.len() && is_continuation(self.bytes[end]) {
                return Err(ViewError::InvalidBoundary);
            }
        }
        Ok(ByteView { bytes: &self.bytes[start..end] })
    }

    /// The bytes behind a String or Primitive token.
    ///
    /// String tokens yield the content between the quotes, primitives the
    /// literal itself. Containers have no contiguous content of their own
    /// and are refused with `WrongTokenKind`. The token must come from a
    /// parse of this same buffer.
    pub fn content(&self, token: &Token) -> Result<ByteView<'a>, ViewError> {
        match token.kind {
            TokenKind::String | TokenKind::Primitive => {
                self.slice(token.start as usize, token.byte_len())
            }
            TokenKind::Object | TokenKind::Array => Err(ViewError::WrongTokenKind),
        }
    }
}
