use crate::{error::ErrorKind, interpreter::evaluator::Context, position::Span};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Every runtime error carries the evaluation frame it was raised in, so that
/// the renderer can reconstruct a traceback from the context chain.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source span of the zero-valued right operand.
        span:    Span,
        /// The evaluation frame the error was raised in.
        context: Context,
    },
    /// Attempted to take the square root of a negative number.
    NegativeSquareRoot {
        /// The source span of the negative operand.
        span:    Span,
        /// The evaluation frame the error was raised in.
        context: Context,
    },
}

impl RuntimeError {
    /// The diagnostic classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Runtime
    }

    /// The source span the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::DivisionByZero { span, .. } | Self::NegativeSquareRoot { span, .. } => *span,
        }
    }

    /// The evaluation frame the error was raised in.
    #[must_use]
    pub const fn context(&self) -> &Context {
        match self {
            Self::DivisionByZero { context, .. }
            | Self::NegativeSquareRoot { context, .. } => context,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "Runtime error: division by zero"),

            Self::NegativeSquareRoot { .. } => {
                write!(f,
                       "Runtime error: cannot take the square root of a negative number")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
