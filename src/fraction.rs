//! Exact rational arithmetic on arbitrary-precision integers.
//!
//! [`Fraction`] is always in lowest terms with a positive denominator.
//! [`Value`] adds the `Undefined` case produced by division by zero, which
//! evaluation carries through larger expressions instead of failing early.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::error::{EquationError, ParseError, Result};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Builds `numer / denom`, reduced and with the sign moved to the numerator.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(EquationError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Converts a float through its shortest decimal form, so `0.1` becomes
    /// exactly `1/10`. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.fract() == 0.0 {
            return BigInt::from_f64(value).map(Self::from_integer);
        }
        value.to_string().parse().ok()
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn neg(&self) -> Self {
        Self(-&self.0)
    }

    pub fn add(&self, other: impl Into<Fraction>) -> Self {
        Self(&self.0 + other.into().0)
    }

    pub fn subtract(&self, other: impl Into<Fraction>) -> Self {
        Self(&self.0 - other.into().0)
    }

    pub fn multiply(&self, other: impl Into<Fraction>) -> Self {
        Self(&self.0 * other.into().0)
    }

    /// Division that yields [`Value::Undefined`] for a zero divisor.
    pub fn divide(&self, other: impl Into<Fraction>) -> Value {
        let other = other.into();
        if other.is_zero() {
            Value::Undefined
        } else {
            Value::Finite(Self(&self.0 / other.0))
        }
    }

    /// Lossy conversion for final output.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_else(|| {
            match (self.numer().to_f64(), self.denom().to_f64()) {
                (Some(n), Some(d)) => n / d,
                _ => f64::NAN,
            }
        })
    }

    pub fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

impl FromStr for Fraction {
    type Err = EquationError;

    /// Parses an optionally signed integer or decimal literal without going
    /// through binary floating point: `"3.14"` is `157/50`.
    fn from_str(literal: &str) -> Result<Self> {
        let invalid = || EquationError::from(ParseError::InvalidNumber(literal.to_string()));

        let (negative, body) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal.strip_prefix('+').unwrap_or(literal)),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !is_digits(int_part)
            || !is_digits(frac_part)
        {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::from_str_radix(&digits, 10).map_err(|_| invalid())?;
        let denom = num_traits::pow(BigInt::from(10u8), frac_part.len());
        let numer = if negative { -magnitude } else { magnitude };
        Ok(Self(BigRational::new(numer, denom)))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl std::ops::Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction(&self.0 + &rhs.0)
    }
}

impl std::ops::Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Fraction(&self.0 - &rhs.0)
    }
}

impl std::ops::Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction(&self.0 * &rhs.0)
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}

/// Result of evaluating an expression: a finite fraction, or the sentinel
/// for a division by zero somewhere along the way.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Finite(Fraction),
    Undefined,
}

impl Value {
    pub fn zero() -> Self {
        Value::Finite(Fraction::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Value::Finite(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Finite(f) if f.is_zero())
    }

    pub fn as_finite(&self) -> Option<&Fraction> {
        match self {
            Value::Finite(f) => Some(f),
            Value::Undefined => None,
        }
    }

    pub fn into_finite(self) -> Option<Fraction> {
        match self {
            Value::Finite(f) => Some(f),
            Value::Undefined => None,
        }
    }

    /// `Undefined` maps to positive infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Finite(f) => f.to_f64(),
            Value::Undefined => f64::INFINITY,
        }
    }
}

impl From<Fraction> for Value {
    fn from(value: Fraction) -> Self {
        Value::Finite(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Finite(fraction) => write!(f, "{fraction}"),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Finite(a), Value::Finite(b)) => Value::Finite(&a + &b),
            _ => Value::Undefined,
        }
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Finite(a), Value::Finite(b)) => Value::Finite(&a - &b),
            _ => Value::Undefined,
        }
    }
}

impl std::ops::Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Finite(a), Value::Finite(b)) => Value::Finite(&a * &b),
            _ => Value::Undefined,
        }
    }
}

impl std::ops::Div for Value {
    type Output = Value;

    /// `x / 0` is undefined; anything divided by an undefined value is zero,
    /// including the indeterminate `undefined / undefined`.
    fn div(self, rhs: Value) -> Value {
        match (self, rhs) {
            (_, Value::Finite(b)) if b.is_zero() => Value::Undefined,
            (Value::Finite(a), Value::Finite(b)) => a.divide(b),
            (Value::Undefined, Value::Finite(_)) => Value::Undefined,
            (_, Value::Undefined) => Value::zero(),
        }
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Finite(f) => Value::Finite(-f),
            Value::Undefined => Value::Undefined,
        }
    }
}
