//! Compiles a single arithmetic expression into x86-64 assembly.
//!
//! The pipeline is lexer, parser, then code generator; the first error stops
//! it and is returned as a [`CompileError`].

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;

use log::debug;

use codegen::Codegen;
use lexer::{Lexer, Token};
use parser::{Node, Parser, DEFAULT_MAX_DEPTH};

pub use error::{CompileError, CompileResult, Diagnostic};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Deepest parenthesis nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub fn tokenize(user_input: &str) -> CompileResult<Vec<Token>> {
    Lexer::tokenize(user_input)
}

/// Parses the whole input as one expression; trailing tokens are an error.
pub fn parse(user_input: &str, options: &CompileOptions) -> CompileResult<Node> {
    let tokens = tokenize(user_input)?;
    debug!("{} tokens", tokens.len());

    let mut parser = Parser::with_max_depth(tokens, options.max_depth);
    let node = parser.parse()?;
    parser.expect_eof()?;
    debug!("ast: {node}");

    Ok(node)
}

pub fn compile(user_input: &str, options: &CompileOptions) -> CompileResult<String> {
    let node = parse(user_input, options)?;
    let instructions = Codegen::new().generate(&node);
    debug!("{} instructions", instructions.len());

    Ok(codegen::emit_program(&instructions))
}
