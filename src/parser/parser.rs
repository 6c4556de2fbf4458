use crate::error::{CompileResult, ParseSnafu};
use crate::lexer::{Punct, Token, TokenKind};

use super::{BinOpKind, Node};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// expr           = equality
/// equality       = relational ("==" relational | "!=" relational)*
/// relational     = add ("<" add | "<=" add | ">" add | ">=" add)*
/// add            = mul ("+" mul | "-" mul)*
/// mul            = unary ("*" unary | "/" unary)*
/// unary          = ("+" | "-")? primary
/// primary        = num | "(" expr ")"
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// A [`TokenKind::Eof`] is appended if `tokens` lacks one.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(mut tokens: Vec<Token>, max_depth: usize) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let offset = tokens.last().map_or(0, |t| t.offset + t.len);
            tokens.push(Token {
                kind: TokenKind::Eof,
                offset,
                len: 0,
            });
        }

        Self {
            tokens,
            index: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parses one expression. Whatever follows it is left unconsumed, see
    /// [`Parser::expect_eof`].
    pub fn parse(&mut self) -> CompileResult<Node> {
        self.parse_expr()
    }

    pub fn expect_eof(&mut self) -> CompileResult<()> {
        if self.current().kind != TokenKind::Eof {
            return self.fail("expected end of input");
        }
        Ok(())
    }

    fn current(&self) -> &Token {
        // The stream ends with Eof and the cursor never moves past it.
        &self.tokens[self.index]
    }

    fn advance(&mut self) {
        if self.current().kind != TokenKind::Eof {
            self.index += 1;
        }
    }

    fn fail<T>(&self, message: impl Into<String>) -> CompileResult<T> {
        ParseSnafu {
            offset: self.current().offset,
            message,
        }
        .fail()
    }

    fn consume(&mut self, punct: Punct) -> bool {
        if self.current().kind != TokenKind::Punct(punct) {
            return false;
        }
        self.advance();
        true
    }

    fn expect(&mut self, punct: Punct) -> CompileResult<()> {
        if !self.consume(punct) {
            return self.fail(format!("expected '{}'", punct.as_str()));
        }
        Ok(())
    }

    fn expect_number(&mut self) -> CompileResult<i64> {
        let TokenKind::Num(value) = self.current().kind else {
            return self.fail("expected a number");
        };
        self.advance();
        Ok(value)
    }

    fn parse_expr(&mut self) -> CompileResult<Node> {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_relational()?;

        loop {
            if self.consume(Punct::DoubleEqual) {
                node = Node::binary(BinOpKind::Equal, node, self.parse_relational()?);
            } else if self.consume(Punct::NotEqual) {
                node = Node::binary(BinOpKind::NotEqual, node, self.parse_relational()?);
            } else {
                return Ok(node);
            }
        }
    }

    /// `a > b` and `a >= b` are stored as `b < a` and `b <= a`.
    fn parse_relational(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_add()?;

        loop {
            if self.consume(Punct::LessThan) {
                node = Node::binary(BinOpKind::LessThan, node, self.parse_add()?);
            } else if self.consume(Punct::LessEqual) {
                node = Node::binary(BinOpKind::LessEqual, node, self.parse_add()?);
            } else if self.consume(Punct::GreaterThan) {
                node = Node::binary(BinOpKind::LessThan, self.parse_add()?, node);
            } else if self.consume(Punct::GreaterEqual) {
                node = Node::binary(BinOpKind::LessEqual, self.parse_add()?, node);
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_add(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_mul()?;

        loop {
            if self.consume(Punct::Plus) {
                node = Node::binary(BinOpKind::Add, node, self.parse_mul()?);
            } else if self.consume(Punct::Minus) {
                node = Node::binary(BinOpKind::Sub, node, self.parse_mul()?);
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_mul(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_unary()?;

        loop {
            if self.consume(Punct::Star) {
                node = Node::binary(BinOpKind::Mul, node, self.parse_unary()?);
            } else if self.consume(Punct::Slash) {
                node = Node::binary(BinOpKind::Div, node, self.parse_unary()?);
            } else {
                return Ok(node);
            }
        }
    }

    /// Only one sign is accepted, `--1` is an error.
    fn parse_unary(&mut self) -> CompileResult<Node> {
        if self.consume(Punct::Plus) {
            self.parse_primary()
        } else if self.consume(Punct::Minus) {
            Ok(Node::binary(BinOpKind::Sub, Node::Num(0), self.parse_primary()?))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> CompileResult<Node> {
        if self.current().kind != TokenKind::Punct(Punct::OpenParen) {
            return Ok(Node::Num(self.expect_number()?));
        }

        if self.depth >= self.max_depth {
            return self.fail("expression nested too deeply");
        }
        self.advance();
        self.depth += 1;
        let node = self.parse_expr()?;
        self.depth -= 1;
        self.expect(Punct::CloseParen)?;
        Ok(node)
    }
}
