use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Evaluation preserves the distinction between integers and reals: integer
/// arithmetic stays integral where it can, and promotes to a real number when
/// the exact result does not fit 64 bits. Arithmetic on values therefore
/// always succeeds; the only failing operations, division by zero and the
/// square root of a negative number, are rejected by the evaluator before the
/// arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64-bit).
    Integer(i64),
    /// A numeric value (double-precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Value {
    /// The value as a double-precision float.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Whether the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Raises `self` to the power of `exponent`.
    ///
    /// A non-negative integer exponent on an integer base uses checked
    /// integer arithmetic; everything else follows IEEE-754 `powf`
    /// semantics, including fractional and negative exponents.
    ///
    /// # Example
    /// ```
    /// use cosmo::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(2).pow(Value::Integer(10)),
    ///            Value::Integer(1024));
    /// assert_eq!(Value::Integer(2).pow(Value::Real(0.5)),
    ///            Value::Real(2.0_f64.powf(0.5)));
    /// ```
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        match (self, exponent) {
            (Self::Integer(base), Self::Integer(power)) if power >= 0 => {
                u32::try_from(power).ok()
                                    .and_then(|power| base.checked_pow(power))
                                    .map_or(Self::Real((base as f64).powf(power as f64)),
                                            Self::Integer)
            },
            _ => Self::Real(self.as_real().powf(exponent.as_real())),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl std::ops::Add for Value {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_add(b)
                 .map_or(Self::Real(a as f64 + b as f64), Self::Integer)
            },
            _ => Self::Real(self.as_real() + other.as_real()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl std::ops::Sub for Value {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_sub(b)
                 .map_or(Self::Real(a as f64 - b as f64), Self::Integer)
            },
            _ => Self::Real(self.as_real() - other.as_real()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl std::ops::Mul for Value {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_mul(b)
                 .map_or(Self::Real(a as f64 * b as f64), Self::Integer)
            },
            _ => Self::Real(self.as_real() * other.as_real()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl std::ops::Div for Value {
    type Output = Self;

    /// Divides `self` by `other`.
    ///
    /// Integer division stays integral when it is exact and promotes to a
    /// real quotient otherwise. Callers reject zero divisors before
    /// dispatching here.
    fn div(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => match a.checked_rem(b) {
                Some(0) => Self::Integer(a / b),
                _ => Self::Real(a as f64 / b as f64),
            },
            _ => Self::Real(self.as_real() / other.as_real()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl std::ops::Neg for Value {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Integer(n) => {
                n.checked_neg()
                 .map_or(Self::Real(-(n as f64)), Self::Integer)
            },
            Self::Real(r) => Self::Real(-r),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
