use crate::error::LexicalError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

lazy_static! {
    // Optional sign, then digits with an optional fraction, or a bare fraction.
    static ref NUMBER: Regex = Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$")
        .expect("number pattern is valid");
    // Unicode decimal digits (Nd), same class as `\d` above.
    static ref DIGIT: Regex = Regex::new(r"^\d$").expect("digit pattern is valid");
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || (c.is_numeric() && DIGIT.is_match(c.encode_utf8(&mut [0; 4])))
}

/// Text carried by the synthetic end-of-input token.
pub const END_MARKER: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    #[serde(rename = "NUM")]
    Number,
    #[serde(rename = "OP")]
    Operator,
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    #[serde(rename = "END")]
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUM",
            TokenKind::Operator => "OP",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::End => "END",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token { kind, text: text.into() }
    }

    pub fn end() -> Self {
        Token::new(TokenKind::End, END_MARKER)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.text)
    }
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    // Kind of the last token pushed; drives the unary sign decision.
    previous: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { chars: input.chars().peekable(), previous: None }
    }

    /// Consumes the whole input and returns its tokens, always terminated by
    /// a single [`TokenKind::End`]. Stops at the first lexical error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        while let Some(&c) = self.chars.peek() {
            let token = match c {
                c if c.is_whitespace() => { self.chars.next(); continue; }
                c if is_digit(c) || c == '.' => self.read_number()?,
                '+' | '-' if self.in_unary_context() => self.read_number()?,
                '(' => { self.chars.next(); Token::new(TokenKind::LParen, "(") }
                ')' => { self.chars.next(); Token::new(TokenKind::RParen, ")") }
                '+' | '-' | '*' | '/' => {
                    self.chars.next();
                    Token::new(TokenKind::Operator, c.to_string())
                }
                _ => return Err(LexicalError::InvalidCharacter(c)),
            };
            self.previous = Some(token.kind);
            tokens.push(token);
        }
        tokens.push(Token::end());
        Ok(tokens)
    }

    /// A sign starts a number at the very beginning, or right after an
    /// operator or an opening parenthesis. Only the last token is looked at.
    fn in_unary_context(&self) -> bool {
        matches!(self.previous, None | Some(TokenKind::Operator) | Some(TokenKind::LParen))
    }

    fn read_number(&mut self) -> Result<Token, LexicalError> {
        let mut s = String::new();
        if let Some(first) = self.chars.next() {
            s.push(first);
        }
        while let Some(&c) = self.chars.peek() {
            if is_digit(c) || c == '.' {
                s.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        if NUMBER.is_match(&s) {
            Ok(Token::new(TokenKind::Number, s))
        } else {
            Err(LexicalError::MalformedNumber(s))
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).tokenize()
}
