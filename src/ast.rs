use crate::position::Span;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. It is used in the AST to represent literal expressions and as
/// a convenient container for constants during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of variants: number literals, unary operations and
/// binary operations. Each node exclusively owns its children and carries the
/// span of the source text it covers, derived from its children at
/// construction time: a `Number` spans its token, a `UnaryOp` spans from the
/// operator to the end of its operand, and a `BinaryOp` spans from the start
/// of its left operand to the end of its right operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: LiteralValue,
        /// Source text covered by the literal.
        span:  Span,
    },
    /// A unary operation (negation or square root).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Source text covered by the operator and its operand.
        span:    Span,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source text covered by both operands.
        span:  Span,
    },
}

impl Expr {
    /// Gets the source span from `self`.
    ///
    /// ## Example
    /// ```
    /// use cosmo::{
    ///     ast::{Expr, LiteralValue},
    ///     position::{Position, Span},
    /// };
    ///
    /// let span = Span::new(Position::start(),
    ///                      Position { offset: 2, line: 0, column: 2 });
    /// let expr = Expr::Number { value: LiteralValue::Integer(42),
    ///                           span };
    ///
    /// assert_eq!(expr.span(), span);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. } => *span,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Square root (e.g. `|x`).
    Sqrt,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
