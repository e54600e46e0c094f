use crate::{interpreter::evaluator::Context, position::Span};

/// Renders diagnostics for display.
///
/// Turns a [`Diagnostic`] plus the source text it refers to into a
/// human-readable report: a traceback over the context chain for runtime
/// errors, the message, a `File <id>, line <n>` header and a caret underline
/// beneath the offending span.
pub mod report;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero and the square root of a negative number. Runtime errors carry the
/// evaluation context chain used to synthesize tracebacks.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: illegal characters, oversized literals, unexpected tokens and
/// unclosed groupings.
pub mod syntax_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Classifies a diagnostic by the pipeline stage that produced it.
///
/// The kinds are mutually exclusive per call: a single run fails during
/// lexing, parsing or evaluation, never more than one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer met an unrecognized input character.
    IllegalCharacter,
    /// The parser met a grammar violation.
    InvalidSyntax,
    /// Evaluation failed (division by zero, negative square root).
    Runtime,
}

/// The error payload of a [`Diagnostic`], one variant per pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A lexing or parsing failure.
    Syntax(SyntaxError),
    /// An evaluation failure.
    Runtime(RuntimeError),
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

/// The uniform error record produced by any pipeline stage.
///
/// A diagnostic is constructed at the point of failure, propagated by value,
/// never mutated after construction, and rendered on demand by
/// [`report::render`]. It pairs the stage error with the identifier of the
/// source it originated from, so a rendered report can name its file.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Label of the source the error originated from (a filename or a
    /// placeholder such as `<stdin>`).
    pub source_id: String,
    /// The underlying stage error.
    pub error:     Error,
}

impl Diagnostic {
    /// Wraps a lexing or parsing failure.
    #[must_use]
    pub fn syntax(source_id: &str, error: SyntaxError) -> Self {
        Self { source_id: source_id.to_string(),
               error:     Error::Syntax(error), }
    }

    /// Wraps an evaluation failure.
    #[must_use]
    pub fn runtime(source_id: &str, error: RuntimeError) -> Self {
        Self { source_id: source_id.to_string(),
               error:     Error::Runtime(error), }
    }

    /// The diagnostic classification of the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match &self.error {
            Error::Syntax(error) => error.kind(),
            Error::Runtime(error) => error.kind(),
        }
    }

    /// The source span the underlying error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match &self.error {
            Error::Syntax(error) => error.span(),
            Error::Runtime(error) => error.span(),
        }
    }

    /// The evaluation frame the error was raised in, if any.
    ///
    /// Syntax errors occur before any context exists and carry none.
    #[must_use]
    pub const fn context(&self) -> Option<&Context> {
        match &self.error {
            Error::Syntax(_) => None,
            Error::Runtime(error) => Some(error.context()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Error::Syntax(error) => write!(f, "{error}"),
            Error::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Diagnostic {}
