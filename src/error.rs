//! Error families raised while checking an expression.
//!
//! Tokenization fails with a [`LexicalError`], the state machine with a
//! [`SyntaxError`]. Both fold into [`ValidationError`] so the analyzer can
//! chain the two stages with `?`. `Display` is the diagnostic shown to users.
use crate::analyzer::lexer::{Token, TokenKind};
use crate::analyzer::validator::State;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("lexical error: invalid character '{0}'")]
    InvalidCharacter(char),

    /// The greedy number scan produced text that is not a number,
    /// e.g. `1.2.3`, `.` or a bare sign.
    #[error("lexical error: malformed number '{0}'")]
    MalformedNumber(String),
}

/// Which way the parentheses are out of balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenImbalance {
    /// A `)` arrived with no open `(` to close.
    ExcessClosing,
    /// Input ended with `depth` parentheses still open.
    Unclosed { depth: usize },
}

impl fmt::Display for ParenImbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenImbalance::ExcessClosing => write!(f, "excess closing parenthesis"),
            ParenImbalance::Unclosed { depth } => {
                write!(f, "unclosed parentheses (balance: {})", depth)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("syntax error: unexpected token '{}' ({kind}) in state {state}", .token.text)]
    UnexpectedToken {
        token: Token,
        kind: TokenKind,
        state: State,
    },

    #[error("syntax error: {0}")]
    UnbalancedParens(ParenImbalance),

    #[error("syntax error: expression ended prematurely")]
    IncompleteExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_messages_name_the_offender() {
        assert_eq!(
            LexicalError::InvalidCharacter('x').to_string(),
            "lexical error: invalid character 'x'"
        );
        assert_eq!(
            LexicalError::MalformedNumber("1.2.3".into()).to_string(),
            "lexical error: malformed number '1.2.3'"
        );
    }

    #[test]
    fn unexpected_token_message_names_kind_and_state() {
        let err = SyntaxError::UnexpectedToken {
            token: Token::new(TokenKind::RParen, ")"),
            kind: TokenKind::RParen,
            state: State::ExpectOperand,
        };
        assert_eq!(
            err.to_string(),
            "syntax error: unexpected token ')' (RPAREN) in state EXPECT_OPERAND"
        );
    }

    #[test]
    fn unbalanced_messages() {
        let excess = SyntaxError::UnbalancedParens(ParenImbalance::ExcessClosing);
        assert!(excess.to_string().contains("excess closing"));

        let open = SyntaxError::UnbalancedParens(ParenImbalance::Unclosed { depth: 2 });
        assert!(open.to_string().contains("balance: 2"));
    }

    #[test]
    fn validation_error_is_transparent() {
        let err: ValidationError = LexicalError::InvalidCharacter('#').into();
        assert!(matches!(err, ValidationError::Lexical(_)));
        assert_eq!(err.to_string(), "lexical error: invalid character '#'");

        let err: ValidationError = SyntaxError::IncompleteExpression.into();
        assert!(matches!(err, ValidationError::Syntax(_)));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<ValidationError>();
    }
}
