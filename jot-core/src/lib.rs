//! JOT Core Tokenizer
//!
//! Single-pass, non-recursive JSON tokenizer. Fills a caller-owned token
//! arena with byte spans instead of building a tree; the parent indices
//! stored in the tokens are the only structure there is, and a zero-copy
//! byte view pulls token contents straight out of the input buffer.
//!
//! # Architecture
//!
//! - **token.rs** - Token records, kinds, arena ids
//! - **arena.rs** - Fixed-capacity token arena
//! - **view.rs** - Zero-copy window over the input buffer
//! - **scanner.rs** - The scan loop and its error types
//! - **nav.rs** - Parent-index navigation handles

pub mod arena;
pub mod nav;
pub mod scanner;
pub mod token;
pub mod view;

pub use arena::TokenArena;
pub use nav::{Children, Node};
pub use scanner::{tokenize, ParseError, ParseErrorCode};
pub use token::{Token, TokenId, TokenKind};
pub use view::{ByteView, ViewError};
