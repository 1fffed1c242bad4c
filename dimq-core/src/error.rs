//! Unit engine errors
//!
//! Every error is raised synchronously by the operation that detects it and
//! leaves its inputs untouched. Errors carry rendered unit and dimension
//! strings so they can be reported without access to the registries.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const MALFORMED_EXPRESSION: &str = "MALFORMED_EXPRESSION";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const INVALID_AFFINE_COMPOSITION: &str = "INVALID_AFFINE_COMPOSITION";
    pub const EXPONENT_OUT_OF_RANGE: &str = "EXPONENT_OUT_OF_RANGE";
}

/// Errors raised while reading a unit or dimension expression
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ParseError {
    /// Token is neither a registered symbol nor a registered name
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Invalid syntax: bad exponent, misplaced separator, zero denominator
    #[error("malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },
}

impl ParseError {
    pub fn malformed(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ParseError::MalformedExpression { .. } => codes::MALFORMED_EXPRESSION,
        }
    }
}

/// Errors raised by unit algebra, conversion and quantity arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum UnitError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Operands do not share a dimension vector
    #[error("cannot convert {from} [{from_dim}] to {to} [{to_dim}]: incompatible dimensions")]
    DimensionMismatch {
        from: String,
        to: String,
        from_dim: String,
        to_dim: String,
    },

    /// An offset-bearing unit was raised to a power other than 1 or combined with another term
    #[error("affine unit {unit} must stand alone with exponent 1, got {expression}")]
    InvalidAffineComposition { unit: String, expression: String },

    /// A unit operation produced an exponent outside the bounded range
    #[error("exponent out of range in {expression}")]
    ExponentOutOfRange { expression: String },
}

impl UnitError {
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::Parse(e) => e.code(),
            UnitError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            UnitError::InvalidAffineComposition { .. } => codes::INVALID_AFFINE_COMPOSITION,
            UnitError::ExponentOutOfRange { .. } => codes::EXPONENT_OUT_OF_RANGE,
        }
    }

    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, UnitError::DimensionMismatch { .. })
    }

    pub fn is_invalid_affine(&self) -> bool {
        matches!(self, UnitError::InvalidAffineComposition { .. })
    }
}
