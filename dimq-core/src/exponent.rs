//! Exact rational exponents
//!
//! Unit and dimension exponents are small rationals ("m^3/2", "s^-1").
//! They are kept exact so that parsing, composition and equality never
//! drift the way floating exponents would.
//!
//! Exponents read from text are bounded by `Exponent::MAX_NUMERATOR` and
//! `Exponent::MAX_DENOMINATOR`; unit algebra stays inside the same bounds.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::superscript;

/// Error type for exponent parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExponentError {
    #[error("empty exponent")]
    Empty,

    #[error("invalid exponent: {0}")]
    Invalid(String),

    #[error("zero denominator in exponent: {0}")]
    ZeroDenominator(String),

    #[error("exponent out of range: {0}")]
    OutOfRange(String),
}

/// Exact rational exponent, always stored in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Exponent(Rational64);

impl Exponent {
    pub const ZERO: Exponent = Exponent(Rational64::new_raw(0, 1));
    pub const ONE: Exponent = Exponent(Rational64::new_raw(1, 1));

    /// Largest numerator magnitude of a bounded exponent
    pub const MAX_NUMERATOR: i64 = 1000;

    /// Largest denominator of a bounded exponent
    pub const MAX_DENOMINATOR: i64 = 16;

    /// Integer exponent, usable in const tables
    pub const fn integer(n: i64) -> Self {
        Exponent(Rational64::new_raw(n, 1))
    }

    /// Fraction `numer/denom`, reduced to lowest terms
    pub fn new(numer: i64, denom: i64) -> Result<Self, ExponentError> {
        if denom == 0 {
            return Err(ExponentError::ZeroDenominator(format!("{}/{}", numer, denom)));
        }
        Ok(Exponent(Rational64::new(numer, denom)))
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Within `MAX_NUMERATOR` and `MAX_DENOMINATOR`
    pub fn is_bounded(&self) -> bool {
        self.numer().unsigned_abs() <= Self::MAX_NUMERATOR as u64 && self.denom() <= Self::MAX_DENOMINATOR
    }

    pub fn checked_add(&self, rhs: Exponent) -> Option<Exponent> {
        self.0.checked_add(&rhs.0).map(Exponent)
    }

    pub fn checked_sub(&self, rhs: Exponent) -> Option<Exponent> {
        self.0.checked_sub(&rhs.0).map(Exponent)
    }

    pub fn checked_mul(&self, rhs: Exponent) -> Option<Exponent> {
        self.0.checked_mul(&rhs.0).map(Exponent)
    }

    pub fn is_negative(&self) -> bool {
        self.numer() < 0
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { -*self } else { *self }
    }

    /// Integer value, if the exponent is integral and fits an i32
    pub fn to_i32(&self) -> Option<i32> {
        if self.is_integer() {
            i32::try_from(self.numer()).ok()
        } else {
            None
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    /// Raise `base` to this exponent, exactly (`powi`) when integral
    pub fn raise(&self, base: f64) -> f64 {
        match self.to_i32() {
            Some(n) => base.powi(n),
            None => base.powf(self.to_f64()),
        }
    }

    /// Superscript rendering: 2 -> "²", -1 -> "⁻¹", 3/2 -> "³ᐟ²"
    pub fn to_superscript(&self) -> String {
        superscript::render(&self.to_string())
    }

    /// Read a superscript exponent such as "⁻¹" or "³ᐟ²"
    pub fn from_superscript(s: &str) -> Result<Self, ExponentError> {
        let ascii = superscript::read(s).ok_or_else(|| ExponentError::Invalid(s.to_string()))?;
        ascii.parse()
    }
}

/// Parse `['-'] integer ['/' integer]`
fn parse_integer(s: &str, signed: bool) -> Option<i64> {
    let digits = if signed { s.strip_prefix('-').unwrap_or(s) } else { s };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Exponent {
    type Err = ExponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ExponentError::Empty);
        }

        let (numer_str, denom_str) = match s.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (s, None),
        };

        let numer = parse_integer(numer_str, true)
            .ok_or_else(|| ExponentError::Invalid(s.to_string()))?;
        let denom = match denom_str {
            Some(d) => parse_integer(d, false).ok_or_else(|| ExponentError::Invalid(s.to_string()))?,
            None => 1,
        };

        if denom == 0 {
            return Err(ExponentError::ZeroDenominator(s.to_string()));
        }
        if numer == i64::MIN {
            return Err(ExponentError::OutOfRange(s.to_string()));
        }
        let exponent = Exponent(Rational64::new(numer, denom));
        if !exponent.is_bounded() {
            return Err(ExponentError::OutOfRange(s.to_string()));
        }
        Ok(exponent)
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Exponent {
    fn from(n: i64) -> Self {
        Exponent::integer(n)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

impl Add for Exponent {
    type Output = Exponent;

    fn add(self, rhs: Exponent) -> Exponent {
        Exponent(self.0 + rhs.0)
    }
}

impl AddAssign for Exponent {
    fn add_assign(&mut self, rhs: Exponent) {
        self.0 += rhs.0;
    }
}

impl Sub for Exponent {
    type Output = Exponent;

    fn sub(self, rhs: Exponent) -> Exponent {
        Exponent(self.0 - rhs.0)
    }
}

impl SubAssign for Exponent {
    fn sub_assign(&mut self, rhs: Exponent) {
        self.0 -= rhs.0;
    }
}

impl Mul for Exponent {
    type Output = Exponent;

    fn mul(self, rhs: Exponent) -> Exponent {
        Exponent(self.0 * rhs.0)
    }
}

impl Neg for Exponent {
    type Output = Exponent;

    fn neg(self) -> Exponent {
        Exponent(-self.0)
    }
}

impl Sum for Exponent {
    fn sum<I: Iterator<Item = Exponent>>(iter: I) -> Exponent {
        iter.fold(Exponent::ZERO, |acc, e| acc + e)
    }
}

impl Serialize for Exponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Exponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!("2".parse::<Exponent>().unwrap(), Exponent::integer(2));
        assert_eq!("-1".parse::<Exponent>().unwrap(), Exponent::integer(-1));
        assert_eq!("0".parse::<Exponent>().unwrap(), Exponent::ZERO);
    }

    #[test]
    fn test_parse_fraction_reduces() {
        let e: Exponent = "6/4".parse().unwrap();
        assert_eq!(e, Exponent::new(3, 2).unwrap());
        assert_eq!(e.numer(), 3);
        assert_eq!(e.denom(), 2);
        assert!((e.to_f64() - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Exponent>(), Err(ExponentError::Empty));
        assert!(matches!("x".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("+2".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("1.5".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("1/".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("1/-2".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("1/2/3".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("--1".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
        assert!(matches!("3/0".parse::<Exponent>(), Err(ExponentError::ZeroDenominator(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!("1000".parse::<Exponent>().unwrap(), Exponent::integer(1000));
        assert_eq!("-1000/16".parse::<Exponent>().unwrap(), Exponent::new(-125, 2).unwrap());
        assert_eq!("2000/2".parse::<Exponent>().unwrap(), Exponent::integer(1000));
        assert!(matches!("1001".parse::<Exponent>(), Err(ExponentError::OutOfRange(_))));
        assert!(matches!("1/17".parse::<Exponent>(), Err(ExponentError::OutOfRange(_))));
        assert!(matches!("9223372036854775807".parse::<Exponent>(), Err(ExponentError::OutOfRange(_))));
        assert!(matches!("-9223372036854775808".parse::<Exponent>(), Err(ExponentError::OutOfRange(_))));
        assert!(matches!("99999999999999999999".parse::<Exponent>(), Err(ExponentError::Invalid(_))));
    }

    #[test]
    fn test_checked_arithmetic() {
        let half = Exponent::new(1, 2).unwrap();
        assert_eq!(half.checked_add(half), Some(Exponent::ONE));
        assert_eq!(half.checked_sub(Exponent::ONE), Some(-half));
        assert_eq!(half.checked_mul(Exponent::integer(6)), Some(Exponent::integer(3)));
        let huge = Exponent::integer(i64::MAX);
        assert_eq!(huge.checked_add(Exponent::ONE), None);
        assert_eq!(huge.checked_mul(Exponent::integer(2)), None);
        assert_eq!(Exponent::integer(i64::MIN + 1).checked_sub(Exponent::integer(2)), None);
        assert!(!huge.is_bounded());
    }

    #[test]
    fn test_arithmetic() {
        let half = Exponent::new(1, 2).unwrap();
        assert_eq!(half + half, Exponent::ONE);
        assert_eq!(Exponent::ONE - half, half);
        assert_eq!(half * Exponent::integer(4), Exponent::integer(2));
        assert_eq!(-half, Exponent::new(-1, 2).unwrap());
        assert_eq!((-half).abs(), half);
        let total: Exponent = vec![half, half, Exponent::integer(2)].into_iter().sum();
        assert_eq!(total, Exponent::integer(3));
    }

    #[test]
    fn test_raise() {
        assert_eq!(Exponent::integer(3).raise(10.0), 1000.0);
        assert_eq!(Exponent::integer(-1).raise(4.0), 0.25);
        let r = Exponent::new(1, 2).unwrap().raise(16.0);
        assert!((r - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_and_superscript() {
        assert_eq!(Exponent::integer(-2).to_string(), "-2");
        assert_eq!(Exponent::new(3, 2).unwrap().to_string(), "3/2");
        assert_eq!(Exponent::integer(2).to_superscript(), "²");
        assert_eq!(Exponent::integer(-1).to_superscript(), "⁻¹");
        assert_eq!(Exponent::new(3, 2).unwrap().to_superscript(), "³ᐟ²");
        assert_eq!(Exponent::from_superscript("⁻¹²").unwrap(), Exponent::integer(-12));
        assert_eq!(Exponent::from_superscript("³ᐟ²").unwrap(), Exponent::new(3, 2).unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let e = Exponent::new(-3, 2).unwrap();
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, "\"-3/2\"");
        let back: Exponent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
