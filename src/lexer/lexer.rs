use log::trace;

use super::{
    token::{ONE_SYMBOL_TOKENS, TWO_SYMBOLS_TOKENS},
    Token, TokenKind,
};
use crate::error::{CompileResult, TokenizeSnafu};

/// Same set as C `isspace`, which also counts vertical tab.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: vec![],
            index: 0,
        }
    }

    fn new_token(&mut self, kind: TokenKind, len: usize) {
        self.tokens.push(Token {
            kind,
            offset: self.index,
            len,
        });
        self.index += len;
    }

    fn parse_number(&mut self) -> CompileResult<()> {
        let rest = &self.input[self.index..];
        let len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        let Ok(value) = rest[..len].parse() else {
            return TokenizeSnafu {
                offset: self.index,
                message: "number too large",
            }
            .fail();
        };
        self.new_token(TokenKind::Num(value), len);
        Ok(())
    }

    fn _tokenize(&mut self) -> CompileResult<()> {
        let input = self.input;

        while let Some(c) = input[self.index..].chars().next() {
            let rest = &input[self.index..];

            if is_space(c) {
                self.index += 1;
            } else if let Some(punct) = rest.get(..2).and_then(|c2| TWO_SYMBOLS_TOKENS.get(c2)) {
                self.new_token(TokenKind::Punct(*punct), 2);
            } else if let Some(punct) = ONE_SYMBOL_TOKENS.get(&c) {
                self.new_token(TokenKind::Punct(*punct), 1);
            } else if c.is_ascii_digit() {
                self.parse_number()?;
            } else {
                return TokenizeSnafu {
                    offset: self.index,
                    message: "cannot tokenize",
                }
                .fail();
            }
        }

        self.new_token(TokenKind::Eof, 0);
        Ok(())
    }

    /// Splits `input` into tokens. The result always ends with a single
    /// [`TokenKind::Eof`] placed at `input.len()`.
    pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
        let mut lexer = Lexer::new(input);
        lexer._tokenize()?;
        trace!("lexed {} tokens", lexer.tokens.len());

        Ok(lexer.tokens)
    }
}
