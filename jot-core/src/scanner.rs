//! Single-pass JSON scanner.
//!
//! One forward pass, no recursion, no stack. Container nesting is
//! tracked through the parent indices already written into the arena:
//! the open containers always form a parent-linked chain reachable from
//! the most recently written token, so a closing bracket walks that
//! chain instead of popping anything.
//!
//! # Example
//!
//! ```
//! use jot_core::{tokenize, ByteView, TokenArena, TokenKind};
//!
//! let doc = br#"{"name":"jot","tags":["fast","flat"]}"#;
//! let view = ByteView::new(doc);
//! let mut arena = TokenArena::with_capacity(16);
//!
//! let count = tokenize(view, &mut arena).unwrap();
//! assert_eq!(count, 7);
//! assert_eq!(arena.tokens()[0].kind, TokenKind::Object);
//! ```

use memchr::memchr2;

use crate::arena::TokenArena;
use crate::token::{Token, TokenId, TokenKind, OPEN_END};
use crate::view::ByteView;

// ============================================================================
// Errors
// ============================================================================

/// Error codes for parse failures.
///
/// Using an enum instead of String keeps errors Copy and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// Closing bracket with no matching open container
    UnmatchedBracket = 0,
    /// Object or array never closed before end of input
    UnterminatedContainer,
    /// String never closed before end of input
    UnterminatedString,
    /// Bad escape character, or `\u` without four hex digits
    InvalidEscapeSequence,
    /// Control or non-ASCII byte inside an unquoted literal
    InvalidPrimitiveCharacter,
    /// Token arena ran out of slots
    CapacityExceeded,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnmatchedBracket => "unmatched bracket",
            Self::UnterminatedContainer => "unterminated container",
            Self::UnterminatedString => "unterminated string",
            Self::InvalidEscapeSequence => "invalid escape sequence",
            Self::InvalidPrimitiveCharacter => "invalid primitive character",
            Self::CapacityExceeded => "token capacity exceeded",
        }
    }
}

/// Error returned when a parse fails.
///
/// The failure voids the whole parse: tokens written before it must not
/// be read, and the next parse overwrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    /// Byte offset the failure was detected at.
    pub offset: usize,
}

impl ParseError {
    #[inline]
    fn new(code: ParseErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.code.message(), self.offset)
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// Entry point
// ============================================================================

/// Tokenize a JSON document into `arena`, returning the token count.
///
/// The arena cursor is rewound first; on success `arena.tokens()` holds
/// exactly the returned number of tokens in discovery order. On failure
/// the arena contents are unspecified and the next parse starts clean.
pub fn tokenize(view: ByteView<'_>, arena: &mut TokenArena) -> Result<usize, ParseError> {
    arena.reset();
    Scanner { view, arena, pos: 0, open: None }.run()
}

// ============================================================================
// Scanner
// ============================================================================

/// Cursor state for one parse.
struct Scanner<'a, 't> {
    view: ByteView<'a>,
    arena: &'t mut TokenArena,
    /// Current byte position.
    pos: usize,
    /// Attachment point for the next token: the innermost open container,
    /// or the pending key between a `:` and its value.
    open: Option<TokenId>,
}

impl<'a, 't> Scanner<'a, 't> {
    fn run(mut self) -> Result<usize, ParseError> {
        while self.pos < self.view.len() {
            match self.view.byte(self.pos) {
                b'{' => self.open_container(TokenKind::Object)?,
                b'[' => self.open_container(TokenKind::Array)?,
                b'}' => self.close_container(TokenKind::Object)?,
                b']' => self.close_container(TokenKind::Array)?,
                b'"' => self.scan_string()?,
                b':' => self.open = self.arena.last_id(),
                b',' => self.detach_key(),
                b' ' | b'\t' | b'\r' | b'\n' => {}
                _ => self.scan_primitive()?,
            }
            self.pos += 1;
        }

        // Anything still open never saw its closing bracket.
        if let Some(token) = self.arena.tokens().iter().rev().find(|t| !t.is_closed()) {
            return Err(ParseError::new(
                ParseErrorCode::UnterminatedContainer,
                token.start as usize,
            ));
        }
        Ok(self.arena.len())
    }

    /// Arena allocation mapped to the parse-level error. A full arena
    /// aborts the parse before anything can use the missing slot.
    fn alloc(&mut self, token: Token) -> Result<TokenId, ParseError> {
        let offset = token.start as usize;
        self.arena
            .alloc(token)
            .ok_or(ParseError::new(ParseErrorCode::CapacityExceeded, offset))
    }

    /// Credit the token that was just written to the open context.
    fn attach(&mut self) {
        if let Some(id) = self.open {
            self.arena.get_mut(id).size += 1;
        }
    }

    /// `{` or `[`: new container becomes the attachment point.
    fn open_container(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        let token = Token::new(kind, self.pos as u32, OPEN_END, self.open);
        let id = self.alloc(token)?;
        self.attach();
        self.open = Some(id);
        Ok(())
    }

    /// `}` or `]`: close the innermost open container.
    ///
    /// Walks parent links back from the most recent token, skipping
    /// everything already closed. The open containers form a chain
    /// reachable that way, which is what makes a separate stack
    /// unnecessary.
    fn close_container(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        let err = ParseError::new(ParseErrorCode::UnmatchedBracket, self.pos);
        let mut cursor = self.arena.last_id().ok_or(err)?;
        loop {
            let token = &self.arena.tokens()[cursor.index()];
            if !token.is_closed() {
                if token.kind != kind {
                    return Err(err);
                }
                let parent = token.parent;
                self.arena.get_mut(cursor).end = self.pos as u32 + 1;
                self.open = parent;
                return Ok(());
            }
            cursor = token.parent.ok_or(err)?;
        }
    }

    /// `,` ends a key/value pair: when the attachment point is a key
    /// rather than a container, restore the enclosing container.
    fn detach_key(&mut self) {
        if let Some(id) = self.open {
            let token = &self.arena.tokens()[id.index()];
            if !token.kind.is_container() {
                self.open = token.parent;
            }
        }
    }

    /// Scan a quoted string. `pos` sits on the opening quote at entry and
    /// on the closing quote at exit; the token spans the bytes between.
    fn scan_string(&mut self) -> Result<(), ParseError> {
        let bytes = self.view.as_bytes();
        let quote = self.pos;
        let mut at = quote + 1;

        loop {
            // Everything other than a quote or backslash is content.
            let found = match memchr2(b'"', b'\\', &bytes[at..]) {
                Some(found) => found,
                None => {
                    return Err(ParseError::new(ParseErrorCode::UnterminatedString, quote));
                }
            };
            at += found;

            if bytes[at] == b'"' {
                let token =
                    Token::new(TokenKind::String, quote as u32 + 1, at as u32, self.open);
                self.alloc(token)?;
                self.attach();
                self.pos = at;
                return Ok(());
            }

            // Backslash. A lone one at end of input escapes nothing, and
            // the string cannot close after it either.
            if at + 1 >= bytes.len() {
                return Err(ParseError::new(ParseErrorCode::UnterminatedString, quote));
            }
            at += 1;
            match bytes[at] {
                b'"' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't' => {}
                b'u' => {
                    for _ in 0..4 {
                        at += 1;
                        if at >= bytes.len() || !bytes[at].is_ascii_hexdigit() {
                            return Err(ParseError::new(
                                ParseErrorCode::InvalidEscapeSequence,
                                at,
                            ));
                        }
                    }
                }
                _ => {
                    return Err(ParseError::new(ParseErrorCode::InvalidEscapeSequence, at));
                }
            }
            at += 1;
        }
    }

    /// Scan an unquoted literal. `pos` sits on its first byte at entry
    /// and on its last byte at exit, so the main loop re-reads the
    /// delimiter that ended it.
    fn scan_primitive(&mut self) -> Result<(), ParseError> {
        let bytes = self.view.as_bytes();
        let start = self.pos;
        let mut at = start;

        while at < bytes.len() {
            match bytes[at] {
                b' ' | b'\t' | b'\r' | b'\n' | b',' | b'}' | b']' => break,
                byte if byte < 0x20 || byte >= 0x7f => {
                    return Err(ParseError::new(
                        ParseErrorCode::InvalidPrimitiveCharacter,
                        at,
                    ));
                }
                _ => at += 1,
            }
        }

        let token = Token::new(TokenKind::Primitive, start as u32, at as u32, self.open);
        self.alloc(token)?;
        self.attach();
        self.pos = at - 1;
        Ok(())
    }
}
