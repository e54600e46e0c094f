use crate::{error::ErrorKind, position::Span};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// The lexer met a character it does not recognize.
    IllegalCharacter {
        /// The character encountered.
        character: char,
        /// The source span covering exactly that character.
        span:      Span,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The source span of the literal.
        span: Span,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the grammar would have accepted at this point.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The source span of the offending token.
        span:     Span,
    },
    /// Reached the end of input where more was expected.
    UnexpectedEndOfInput {
        /// What the grammar would have accepted at this point.
        expected: &'static str,
        /// The zero-width span at the end of the input.
        span:     Span,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source span of the token found instead.
        span: Span,
    },
}

impl SyntaxError {
    /// The diagnostic classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalCharacter { .. } => ErrorKind::IllegalCharacter,
            Self::LiteralTooLarge { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::ExpectedClosingParen { .. } => ErrorKind::InvalidSyntax,
        }
    }

    /// The source span the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::IllegalCharacter { span, .. }
            | Self::LiteralTooLarge { span }
            | Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::ExpectedClosingParen { span } => *span,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, .. } => {
                write!(f, "Illegal character: '{character}'")
            },

            Self::LiteralTooLarge { .. } => {
                write!(f, "Invalid syntax: literal is too large")
            },

            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "Invalid syntax: expected {expected}, found '{found}'")
            },

            Self::UnexpectedEndOfInput { expected, .. } => {
                write!(f,
                       "Invalid syntax: unexpected end of input, expected {expected}")
            },

            Self::ExpectedClosingParen { .. } => {
                write!(f, "Invalid syntax: expected ')' but none found")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
