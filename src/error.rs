//! Errors raised by the lexer and the parser.
//!
//! An error only records where it happened and what went wrong. Rendering it
//! against the source text is left to whoever reports it, see [`Diagnostic`].

use std::fmt;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
    #[snafu(display("{message}"))]
    Tokenize { offset: usize, message: String },

    #[snafu(display("{message}"))]
    Parse { offset: usize, message: String },
}

impl CompileError {
    /// Byte offset into the source where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            CompileError::Tokenize { offset, .. } | CompileError::Parse { offset, .. } => *offset,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CompileError::Tokenize { message, .. } | CompileError::Parse { message, .. } => message,
        }
    }

    pub fn diagnostic<'a>(&'a self, source: &'a str) -> Diagnostic<'a> {
        Diagnostic {
            source,
            error: self,
        }
    }
}

/// An error paired with the text it points into.
///
/// ```text
/// 1@2
///  ^ cannot tokenize
/// ```
pub struct Diagnostic<'a> {
    source: &'a str,
    error: &'a CompileError,
}

impl Diagnostic<'_> {
    /// Column of the caret, counted in characters.
    pub fn column(&self) -> usize {
        let mut offset = self.error.offset().min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        self.source[..offset].chars().count()
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.source)?;
        write!(f, "{}^ {}", " ".repeat(self.column()), self.error)
    }
}
