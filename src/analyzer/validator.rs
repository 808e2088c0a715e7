use super::lexer::{Token, TokenKind};
use crate::error::{ParenImbalance, SyntaxError};
use log::trace;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ExpectOperand,
    ExpectOperator,
    Accept,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::ExpectOperand => "EXPECT_OPERAND",
            State::ExpectOperator => "EXPECT_OPERATOR",
            State::Accept => "ACCEPT",
        };
        f.write_str(name)
    }
}

/// The grammar, one row per state. `None` rejects the token.
///
/// Parentheses do not change the operand/operator alternation: `(` keeps
/// waiting for an operand and `)` keeps waiting for an operator. Nesting is
/// checked separately by the balance counter.
pub fn transition(state: State, kind: TokenKind) -> Option<State> {
    use State::*;
    use TokenKind::*;

    match (state, kind) {
        (ExpectOperand, Number) => Some(ExpectOperator),
        (ExpectOperand, LParen) => Some(ExpectOperand),
        (ExpectOperand, Operator | RParen | End) => None,

        (ExpectOperator, Operator) => Some(ExpectOperand),
        (ExpectOperator, RParen) => Some(ExpectOperator),
        (ExpectOperator, End) => Some(Accept),
        (ExpectOperator, Number | LParen) => None,

        (Accept, _) => None,
    }
}

/// Walks a token sequence through the state machine. One per check.
pub struct Validator<'t> {
    tokens: &'t [Token],
    state: State,
    balance: usize,
}

impl<'t> Validator<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Validator { tokens, state: State::ExpectOperand, balance: 0 }
    }

    pub fn run(mut self) -> Result<(), SyntaxError> {
        for token in self.tokens {
            self.step(token)?;
        }

        if self.balance != 0 {
            return Err(SyntaxError::UnbalancedParens(ParenImbalance::Unclosed {
                depth: self.balance,
            }));
        }

        if self.state == State::Accept {
            Ok(())
        } else {
            // Only reachable when the sequence lacks its End token.
            Err(SyntaxError::IncompleteExpression)
        }
    }

    fn step(&mut self, token: &Token) -> Result<(), SyntaxError> {
        let Some(next) = transition(self.state, token.kind) else {
            // End arriving where an operand is still owed means the input stopped short.
            if token.kind == TokenKind::End {
                return Err(SyntaxError::IncompleteExpression);
            }
            return Err(SyntaxError::UnexpectedToken {
                token: token.clone(),
                kind: token.kind,
                state: self.state,
            });
        };

        match token.kind {
            TokenKind::LParen => self.balance += 1,
            TokenKind::RParen => {
                self.balance = self
                    .balance
                    .checked_sub(1)
                    .ok_or(SyntaxError::UnbalancedParens(ParenImbalance::ExcessClosing))?;
            }
            _ => {}
        }

        trace!("{} --{}--> {} (balance {})", self.state, token, next, self.balance);
        self.state = next;
        Ok(())
    }
}

pub fn check(tokens: &[Token]) -> Result<(), SyntaxError> {
    Validator::new(tokens).run()
}
