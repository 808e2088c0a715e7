pub mod lexer;
pub mod validator;

use crate::error::ValidationError;
use lexer::{Lexer, Token};
use log::debug;

/// Outcome of checking one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictReport {
    input: String,
    tokens: Option<Vec<Token>>,
    failure: Option<ValidationError>,
}

impl VerdictReport {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn accepted(&self) -> bool {
        self.failure.is_none()
    }

    /// Tokens produced by the lexer, `None` when tokenization failed.
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    /// The first problem found, if any.
    pub fn failure(&self) -> Option<&ValidationError> {
        self.failure.as_ref()
    }

    /// Human-readable reasons for rejection. Empty when accepted, otherwise
    /// exactly one entry.
    pub fn diagnostics(&self) -> Vec<String> {
        self.failure.iter().map(ToString::to_string).collect()
    }
}

/// Checks whether `source` is a well-formed arithmetic expression.
///
/// Never fails: lexical and syntax errors are reported through the returned
/// [`VerdictReport`].
pub fn validate(source: &str) -> VerdictReport {
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            debug!("lexing {:?} failed: {}", source, e);
            return VerdictReport { input: source.to_string(), tokens: None, failure: Some(e.into()) };
        }
    };

    debug!(
        "tokens: {}",
        tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );

    let failure = validator::check(&tokens).err().map(ValidationError::from);
    VerdictReport { input: source.to_string(), tokens: Some(tokens), failure }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, ParenImbalance, SyntaxError};

    #[test]
    fn accepted_report_has_no_diagnostics() {
        let report = validate("(1+2)*3");
        assert!(report.accepted());
        assert!(report.failure().is_none());
        assert!(report.diagnostics().is_empty());
        assert_eq!(report.tokens().map(<[Token]>::len), Some(8));
        assert_eq!(report.input(), "(1+2)*3");
    }

    #[test]
    fn lexical_failure_skips_validation() {
        let report = validate("1.2.3");
        assert!(!report.accepted());
        assert!(report.tokens().is_none());
        assert_eq!(
            report.failure(),
            Some(&ValidationError::Lexical(LexicalError::MalformedNumber("1.2.3".into())))
        );
        assert_eq!(report.diagnostics().len(), 1);
    }

    #[test]
    fn syntax_failure_keeps_tokens() {
        let report = validate("(1+2");
        assert!(!report.accepted());
        assert!(report.tokens().is_some());
        assert_eq!(
            report.failure(),
            Some(&ValidationError::Syntax(SyntaxError::UnbalancedParens(
                ParenImbalance::Unclosed { depth: 1 }
            )))
        );
    }

    #[test]
    fn empty_input_is_incomplete() {
        let report = validate("");
        assert_eq!(report.tokens(), Some(&[Token::end()][..]));
        assert_eq!(
            report.failure(),
            Some(&ValidationError::Syntax(SyntaxError::IncompleteExpression))
        );
    }
}
