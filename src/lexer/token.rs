use std::fmt;

use phf::phf_map;

pub(super) static TWO_SYMBOLS_TOKENS: phf::Map<&str, Punct> = phf_map! {
    "==" => Punct::DoubleEqual,
    "!=" => Punct::NotEqual,
    "<=" => Punct::LessEqual,
    ">=" => Punct::GreaterEqual,
};

pub(super) static ONE_SYMBOL_TOKENS: phf::Map<char, Punct> = phf_map! {
    '+' => Punct::Plus,
    '-' => Punct::Minus,
    '*' => Punct::Star,
    '/' => Punct::Slash,
    '(' => Punct::OpenParen,
    ')' => Punct::CloseParen,
    '<' => Punct::LessThan,
    '>' => Punct::GreaterThan,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punct {
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,

    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    DoubleEqual,
    NotEqual,
}

impl Punct {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punct::Plus => "+",
            Punct::Minus => "-",
            Punct::Star => "*",
            Punct::Slash => "/",
            Punct::OpenParen => "(",
            Punct::CloseParen => ")",
            Punct::LessThan => "<",
            Punct::LessEqual => "<=",
            Punct::GreaterThan => ">",
            Punct::GreaterEqual => ">=",
            Punct::DoubleEqual => "==",
            Punct::NotEqual => "!=",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Punct(Punct),
    Num(i64),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punct(p) => write!(f, "'{}'", p.as_str()),
            TokenKind::Num(n) => write!(f, "{n}"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub offset: usize,
    pub len: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}\t{}", self.offset, self.offset + self.len, self.kind)
    }
}
