//! dimq Core - Fundamental types
//!
//! This crate provides the core types used throughout dimq:
//! - `Exponent`: exact rational exponents for units and dimensions
//! - `superscript`: Unicode superscript rendering and reading of exponents
//! - `ParseError` / `UnitError`: the error taxonomy of the unit engine

mod exponent;
mod error;
pub mod superscript;

pub use exponent::{Exponent, ExponentError};
pub use error::{ParseError, UnitError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Exponent, ParseError, UnitError};
    pub use crate::error::codes;
}
