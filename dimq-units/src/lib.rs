//! Dimq Units - Physical dimensions, composable units and quantities
//!
//! Units are exponent vectors over a fixed registry of atomic units
//! ("kg.m^2.s^-2", "J.N^-1", "m^3/2"). Every unit reduces to a vector over
//! the base dimensions (mass, length, time, electric current, temperature,
//! amount of substance, luminous intensity, angle); two units convert into
//! each other exactly when those vectors agree.
//!
//! Quantities pair an `f64` value with a unit. Addition and conversion
//! check dimensions, multiplication composes units without rescaling, and
//! temperature scales with an offset (°C, °F) are only accepted on their
//! own with exponent 1.
//!
//! For display, dimensions are mapped back to named physical quantities
//! (area, energy, ...) by the shortest-name resolver.

mod categories;
mod config;
mod convert;
mod dimension;
mod format;
mod parse;
mod quantity;
mod resolve;
mod unit;
mod units;
mod vector;

pub use categories::{CategoryRegistry, DimensionCategory, CATEGORIES};
pub use config::{approx_eq, DisplayConfig, DEFAULT_RELATIVE_TOLERANCE, MAX_EXPONENT_LIMIT, MAX_TERMS_LIMIT};
pub use convert::{conversion, conversion_factor, convert, si_form, Conversion, SiForm};
pub use dimension::{Dimension, BASE_COUNT, BASE_NAMES, BASE_SYMBOLS};
pub use format::{dimension_report, format_value, unit_report};
pub use parse::{parse_dimension, parse_unit_vector};
pub use quantity::Quantity;
pub use resolve::{equivalents, shortest, Composition};
pub use unit::Unit;
pub use units::{AtomicUnit, UnitRegistry, ATOM_COUNT, UNITS};
pub use vector::UnitVector;

pub use dimq_core::{Exponent, ParseError, UnitError};
