use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::value::Value,
    position::{Position, Span},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An evaluation frame, chained to its caller for traceback reconstruction.
///
/// A `Context` identifies the logical frame an expression is evaluated in.
/// Frames form a singly-linked chain from the current frame to the root;
/// runtime errors carry the frame they were raised in, and the diagnostic
/// renderer walks the chain to synthesize a traceback. The interpreter
/// currently creates a single root frame per run, but nested frames are
/// supported for future call constructs.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Name of the frame as it appears in tracebacks, e.g. `<program>`.
    pub display_name:          String,
    /// The calling frame, if any.
    pub parent:                Option<Rc<Context>>,
    /// Where in the source the parent entered this frame.
    pub parent_entry_position: Option<Position>,
}

impl Context {
    /// Creates a root frame with no caller.
    #[must_use]
    pub fn new(display_name: &str) -> Self {
        Self { display_name:          display_name.to_string(),
               parent:                None,
               parent_entry_position: None, }
    }

    /// Creates a frame entered from `parent` at `entry_position`.
    ///
    /// The new frame holds a shared reference to its parent; parents are
    /// never mutated to point back at children, so the chain stays acyclic.
    #[must_use]
    pub fn nested(display_name: &str, parent: Rc<Self>, entry_position: Position) -> Self {
        Self { display_name:          display_name.to_string(),
               parent:                Some(parent),
               parent_entry_position: Some(entry_position), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the expression variant and reduces the tree bottom-up: operands are
    /// evaluated before their operation, left fully before right, and the
    /// first error anywhere in the subtree short-circuits the whole call.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for division by zero (positioned at the
    /// right operand) or the square root of a negative number (positioned at
    /// the operand). The error carries this frame for traceback rendering.
    ///
    /// # Example
    /// ```
    /// use cosmo::interpreter::{
    ///     evaluator::Context,
    ///     lexer::tokenize,
    ///     parser::parse,
    ///     value::Value,
    /// };
    ///
    /// let tokens = tokenize("1 + 2 * 3").unwrap();
    /// let ast = parse(&tokens).unwrap();
    ///
    /// let context = Context::new("<program>");
    /// assert_eq!(context.eval(&ast).unwrap(), Value::Integer(7));
    /// ```
    pub fn eval(&self, expression: &Expr) -> EvalResult<Value> {
        match expression {
            Expr::Number { value, .. } => Ok(Value::from(*value)),
            Expr::UnaryOp { op, operand, .. } => {
                let value = self.eval(operand)?;
                self.eval_unary(*op, value, operand.span())
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                self.eval_binary(*op, lhs, rhs, right.span())
            },
        }
    }

    /// Applies a unary operator to an already-evaluated operand.
    fn eval_unary(&self, op: UnaryOperator, value: Value, operand_span: Span) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Sqrt => {
                let radicand = value.as_real();
                if radicand < 0.0 {
                    return Err(RuntimeError::NegativeSquareRoot { span:    operand_span,
                                                                  context: self.clone(), });
                }
                Ok(Value::Real(radicand.sqrt()))
            },
        }
    }

    /// Applies a binary operator to two already-evaluated operands.
    ///
    /// `right_span` locates the right operand, which is where a division by
    /// zero is reported.
    fn eval_binary(&self,
                   op: BinaryOperator,
                   left: Value,
                   right: Value,
                   right_span: Span)
                   -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { span:    right_span,
                                                              context: self.clone(), });
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.pow(right)),
        }
    }
}
