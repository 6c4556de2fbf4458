use exprcc::lexer::{Lexer, Punct, Token, TokenKind};
use exprcc::CompileError;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn two_symbol_operators_win_over_one_symbol() {
    assert_eq!(
        kinds("<=>=<>==!="),
        vec![
            TokenKind::Punct(Punct::LessEqual),
            TokenKind::Punct(Punct::GreaterEqual),
            TokenKind::Punct(Punct::LessThan),
            TokenKind::Punct(Punct::GreaterThan),
            TokenKind::Punct(Punct::DoubleEqual),
            TokenKind::Punct(Punct::NotEqual),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn digits_are_munched_into_one_literal() {
    assert_eq!(
        kinds("123+4"),
        vec![
            TokenKind::Num(123),
            TokenKind::Punct(Punct::Plus),
            TokenKind::Num(4),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_skip_whitespace() {
    let tokens = Lexer::tokenize(" 12 *\t(3)\n").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token { kind: TokenKind::Num(12), offset: 1, len: 2 },
            Token { kind: TokenKind::Punct(Punct::Star), offset: 4, len: 1 },
            Token { kind: TokenKind::Punct(Punct::OpenParen), offset: 6, len: 1 },
            Token { kind: TokenKind::Num(3), offset: 7, len: 1 },
            Token { kind: TokenKind::Punct(Punct::CloseParen), offset: 8, len: 1 },
            Token { kind: TokenKind::Eof, offset: 10, len: 0 },
        ]
    );
}

#[test]
fn vertical_tab_is_whitespace() {
    assert_eq!(
        Lexer::tokenize("1\x0b+1").unwrap(),
        vec![
            Token { kind: TokenKind::Num(1), offset: 0, len: 1 },
            Token { kind: TokenKind::Punct(Punct::Plus), offset: 2, len: 1 },
            Token { kind: TokenKind::Num(1), offset: 3, len: 1 },
            Token { kind: TokenKind::Eof, offset: 4, len: 0 },
        ]
    );
    assert_eq!(kinds("1\x0b+1"), kinds("1 +1"));
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(
        Lexer::tokenize("").unwrap(),
        vec![Token { kind: TokenKind::Eof, offset: 0, len: 0 }]
    );
}

#[test]
fn unknown_character_reports_its_offset() {
    let err = Lexer::tokenize("1@2").unwrap_err();
    assert!(matches!(err, CompileError::Tokenize { offset: 1, .. }));
    assert_eq!(err.message(), "cannot tokenize");
}

#[test]
fn lone_bang_and_equal_are_rejected() {
    assert_eq!(Lexer::tokenize("1!2").unwrap_err().offset(), 1);
    assert_eq!(Lexer::tokenize("1 = 2").unwrap_err().offset(), 2);
}

#[test]
fn non_ascii_input_is_rejected_at_char_start() {
    let err = Lexer::tokenize("1+é").unwrap_err();
    assert_eq!(err.offset(), 2);
}

#[test]
fn caret_column_counts_characters() {
    let input = "é@";
    let err = Lexer::tokenize(input).unwrap_err();
    assert_eq!(err.offset(), 2);
    assert_eq!(err.diagnostic(input).column(), 1);
    assert_eq!(err.diagnostic(input).to_string(), "é@\n ^ cannot tokenize");
}

#[test]
fn literal_out_of_range() {
    assert_eq!(kinds("9223372036854775807")[0], TokenKind::Num(i64::MAX));

    let err = Lexer::tokenize("1+9223372036854775808").unwrap_err();
    assert!(matches!(err, CompileError::Tokenize { offset: 2, .. }));
    assert_eq!(err.message(), "number too large");
}
