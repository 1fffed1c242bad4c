//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as an 8-element vector
//! of exact exponents:
//! [mass, length, time, current, temperature, amount, luminosity, angle]

use std::fmt;
use serde::{Serialize, Deserialize};
use dimq_core::{Exponent, ParseError};

/// Dimension indices for the base quantities
pub const MASS: usize = 0;
pub const LENGTH: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;
pub const ANGLE: usize = 7;

/// Number of base dimensions (the seven SI base quantities plus angle)
pub const BASE_COUNT: usize = 8;

pub const BASE_SYMBOLS: [&str; BASE_COUNT] = ["M", "L", "T", "I", "Θ", "N", "J", "α"];

pub const BASE_NAMES: [&str; BASE_COUNT] = [
    "mass",
    "length",
    "time",
    "electric current",
    "temperature",
    "amount of substance",
    "luminous intensity",
    "angle",
];

/// Represents the dimensions of a physical quantity
/// as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [mass, length, time, current, temperature, amount, luminosity, angle]
    pub exponents: [Exponent; BASE_COUNT],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension::from_integers([0, 0, 0, 0, 0, 0, 0, 0]);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::from_integers([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::from_integers([0, 1, 0, 0, 0, 0, 0, 0]);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::from_integers([0, 0, 1, 0, 0, 0, 0, 0]);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension::from_integers([0, 0, 0, 1, 0, 0, 0, 0]);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::from_integers([0, 0, 0, 0, 1, 0, 0, 0]);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension::from_integers([0, 0, 0, 0, 0, 1, 0, 0]);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension::from_integers([0, 0, 0, 0, 0, 0, 1, 0]);

    /// Plane angle [α]
    pub const ANGLE: Dimension = Dimension::from_integers([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Area [L^2]
    pub const AREA: Dimension = Dimension::from_integers([0, 2, 0, 0, 0, 0, 0, 0]);

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension::from_integers([0, 3, 0, 0, 0, 0, 0, 0]);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::from_integers([0, 0, -1, 0, 0, 0, 0, 0]);

    /// Density [M L^-3]
    pub const DENSITY: Dimension = Dimension::from_integers([1, -3, 0, 0, 0, 0, 0, 0]);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::from_integers([1, -1, -2, 0, 0, 0, 0, 0]);

    /// Electric charge [T I]
    pub const CHARGE: Dimension = Dimension::from_integers([0, 0, 1, 1, 0, 0, 0, 0]);

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::from_integers([0, 1, -1, 0, 0, 0, 0, 0]);

    /// Momentum [M L T^-1]
    pub const MOMENTUM: Dimension = Dimension::from_integers([1, 1, -1, 0, 0, 0, 0, 0]);

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension::from_integers([0, 1, -2, 0, 0, 0, 0, 0]);

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension::from_integers([1, 1, -2, 0, 0, 0, 0, 0]);

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::from_integers([1, 2, -2, 0, 0, 0, 0, 0]);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::from_integers([1, 2, -3, 0, 0, 0, 0, 0]);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::from_integers([1, 2, -3, -1, 0, 0, 0, 0]);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::from_integers([1, 2, -3, -2, 0, 0, 0, 0]);

    /// Create a new dimension from exponents
    pub fn new(exponents: [Exponent; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    /// Create from integer exponents in base order
    /// [mass, length, time, current, temperature, amount, luminosity, angle],
    /// usable in const tables
    pub const fn from_integers(exponents: [i64; BASE_COUNT]) -> Self {
        let mut result = [Exponent::ZERO; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            result[i] = Exponent::integer(exponents[i]);
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Parse a dimension expression over category symbols or names,
    /// e.g. "F", "M.L.T^-2", "energy.time^-1"
    pub fn parse(expr: &str) -> Result<Dimension, ParseError> {
        crate::parse::parse_dimension(expr)
    }

    pub fn exponent(&self, base: usize) -> Exponent {
        self.exponents[base]
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    /// A single base dimension with exponent +1 or -1
    pub fn is_primary(&self) -> bool {
        self.abs_sum() == Exponent::ONE && self.exponents.iter().all(|e| e.is_zero() || e.abs().is_one())
    }

    /// Index of the base dimension this dimension is exactly equal to
    pub fn base_index(&self) -> Option<usize> {
        if self.abs_sum() != Exponent::ONE {
            return None;
        }
        self.exponents.iter().position(|e| e.is_one())
    }

    /// Sum of absolute exponents
    pub fn abs_sum(&self) -> Exponent {
        self.exponents.iter().map(|e| e.abs()).sum()
    }

    /// Integer exponents, if every exponent is integral
    pub fn to_integers(&self) -> Option<[i64; BASE_COUNT]> {
        let mut result = [0i64; BASE_COUNT];
        for (slot, e) in result.iter_mut().zip(self.exponents.iter()) {
            if !e.is_integer() {
                return None;
            }
            *slot = e.numer();
        }
        Some(result)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = self.exponents;
        for (r, o) in result.iter_mut().zip(other.exponents.iter()) {
            *r += *o;
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = self.exponents;
        for (r, o) in result.iter_mut().zip(other.exponents.iter()) {
            *r -= *o;
        }
        Dimension { exponents: result }
    }

    /// Raise to a rational power (multiply exponents)
    pub fn power(&self, exp: Exponent) -> Dimension {
        let mut result = self.exponents;
        for r in result.iter_mut() {
            *r = *r * exp;
        }
        Dimension { exponents: result }
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Dimension {
        self.power(-Exponent::ONE)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .exponents
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_zero())
            .map(|(i, e)| {
                if e.is_one() {
                    BASE_SYMBOLS[i].to_string()
                } else {
                    format!("{}{}", BASE_SYMBOLS[i], e.to_superscript())
                }
            })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("."))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
