pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;

pub use analyzer::{validate, VerdictReport};
pub use analyzer::lexer::{tokenize, Token, TokenKind};
pub use analyzer::validator::State;
pub use error::{LexicalError, ParenImbalance, SyntaxError, ValidationError};
