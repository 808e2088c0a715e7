use exprlex_core::{
    tokenize, validate, LexicalError, ParenImbalance, State, SyntaxError, Token, TokenKind,
    ValidationError,
};

#[track_caller]
fn accepted(input: &str) {
    let report = validate(input);
    assert!(report.accepted(), "{:?} rejected: {:?}", input, report.diagnostics());
}

#[track_caller]
fn rejected(input: &str, expected: ValidationError) {
    let report = validate(input);
    assert_eq!(report.failure(), Some(&expected), "input: {:?}", input);
    assert_eq!(report.diagnostics(), vec![expected.to_string()]);
}

#[test]
fn accepts_well_formed_expressions() {
    accepted("(1+2)*3");
    accepted("-3+2");
    accepted("  4 / .5 ");
    accepted("((-3))");
    accepted("1. * (2 - (3 + 4.25)) / -1");
}

#[test]
fn double_sign_is_folded_into_number() {
    assert_eq!(
        tokenize("3--2").unwrap(),
        vec![
            Token::new(TokenKind::Number, "3"),
            Token::new(TokenKind::Operator, "-"),
            Token::new(TokenKind::Number, "-2"),
            Token::end(),
        ]
    );
    accepted("3--2");
}

#[test]
fn rejects_unclosed_parens() {
    rejected(
        "(1+2",
        SyntaxError::UnbalancedParens(ParenImbalance::Unclosed { depth: 1 }).into(),
    );
}

#[test]
fn rejects_excess_closing_paren() {
    rejected("(1))", SyntaxError::UnbalancedParens(ParenImbalance::ExcessClosing).into());
}

#[test]
fn rejects_rparen_after_operator() {
    rejected(
        "1+)",
        SyntaxError::UnexpectedToken {
            token: Token::new(TokenKind::RParen, ")"),
            kind: TokenKind::RParen,
            state: State::ExpectOperand,
        }
        .into(),
    );
}

#[test]
fn rejects_leading_operator() {
    rejected(
        "*3",
        SyntaxError::UnexpectedToken {
            token: Token::new(TokenKind::Operator, "*"),
            kind: TokenKind::Operator,
            state: State::ExpectOperand,
        }
        .into(),
    );
}

#[test]
fn rejects_malformed_number() {
    rejected("1.2.3", LexicalError::MalformedNumber("1.2.3".into()).into());
}

#[test]
fn accepts_unicode_decimal_digits() {
    accepted("٣+1");
    accepted("(١٢.٥ - 3) * ४");
}

#[test]
fn rejects_invalid_character() {
    rejected("2 % 3", LexicalError::InvalidCharacter('%').into());
}

#[test]
fn empty_input_is_incomplete() {
    assert_eq!(tokenize("").unwrap(), vec![Token::end()]);
    rejected("", SyntaxError::IncompleteExpression.into());
    rejected("   ", SyntaxError::IncompleteExpression.into());
}

#[test]
fn trailing_operator_is_incomplete() {
    rejected("1 +", SyntaxError::IncompleteExpression.into());
}

#[test]
fn reports_are_independent_across_threads() {
    let handles: Vec<_> = ["(1+2)*3", "(1+2", "1.2.3", "*3"]
        .into_iter()
        .map(|input| std::thread::spawn(move || validate(input).accepted()))
        .collect();
    let verdicts: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(verdicts, vec![true, false, false, false]);
}
