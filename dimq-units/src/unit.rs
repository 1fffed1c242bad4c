//! Composable units: an exponent vector over the atomic unit registry

use std::fmt;
use std::str::FromStr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use dimq_core::{Exponent, UnitError};
use crate::dimension::Dimension;
use crate::format::{self, NAME_SEPARATOR, SYMBOL_SEPARATOR};
use crate::parse::parse_unit_vector;
use crate::units::UNITS;
use crate::vector::UnitVector;

/// A possibly compound unit such as "kg.m².s⁻²" or "J.N⁻¹"
///
/// Affine atoms (°C, °F) only appear alone with exponent 1; every
/// constructor and every operation enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
    vector: UnitVector,
}

impl Unit {
    /// Parse a unit expression, e.g. "kg.m^2.s^-2"
    pub fn parse(expr: &str) -> Result<Unit, UnitError> {
        let vector = parse_unit_vector(expr)?;
        check_affine(&vector, expr)?;
        Ok(Unit { vector })
    }

    /// Build from a raw vector; exponents must be bounded and affine
    /// atoms must stand alone
    pub fn from_vector(vector: UnitVector) -> Result<Unit, UnitError> {
        let expression = render_expression(&vector);
        if !vector.is_bounded() {
            return Err(UnitError::ExponentOutOfRange { expression });
        }
        check_affine(&vector, &expression)?;
        Ok(Unit { vector })
    }

    /// Vectors that cannot hold an affine violation (SI-only, single atoms)
    pub(crate) fn from_valid(vector: UnitVector) -> Unit {
        Unit { vector }
    }

    /// The empty composition
    pub fn unitless() -> Unit {
        Unit { vector: UnitVector::unitless() }
    }

    /// A single registered atom by symbol or name
    pub fn atom(token: &str) -> Option<Unit> {
        UNITS.index_of(token).map(|i| Unit { vector: UnitVector::basis(i) })
    }

    pub fn vector(&self) -> &UnitVector {
        &self.vector
    }

    pub fn is_unitless(&self) -> bool {
        self.vector.is_unitless()
    }

    /// A lone affine atom such as °C
    pub fn is_affine(&self) -> bool {
        self.vector.affine_atom().is_some()
    }

    /// Multiply units (add exponent vectors)
    pub fn multiply(&self, other: &Unit) -> Result<Unit, UnitError> {
        let vector = self
            .vector
            .add(&other.vector)
            .ok_or_else(|| out_of_range(format!("{}.{}", self.expression(), other.expression())))?;
        Unit::from_vector(vector)
    }

    /// Divide units (subtract exponent vectors)
    pub fn divide(&self, other: &Unit) -> Result<Unit, UnitError> {
        let vector = self
            .vector
            .subtract(&other.vector)
            .ok_or_else(|| out_of_range(format!("({}).({})^-1", self.expression(), other.expression())))?;
        Unit::from_vector(vector)
    }

    /// Raise to a rational power
    pub fn power(&self, exp: Exponent) -> Result<Unit, UnitError> {
        let vector = self
            .vector
            .scale(exp)
            .ok_or_else(|| out_of_range(format!("({})^{}", self.expression(), exp)))?;
        Unit::from_vector(vector)
    }

    pub fn powi(&self, exp: i32) -> Result<Unit, UnitError> {
        self.power(Exponent::integer(exp as i64))
    }

    /// Base-dimension vector of this unit
    pub fn dimension(&self) -> Dimension {
        self.vector.dimension()
    }

    /// Same dimension, so values convert between the two
    pub fn is_convertible_to(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }

    pub fn has_same_dimension(&self, dimension: &Dimension) -> bool {
        self.dimension() == *dimension
    }

    /// Only SI atoms
    pub fn is_si(&self) -> bool {
        self.vector.is_si()
    }

    /// Each atom replaced by its SI equivalent: kcal -> J, L -> m³
    pub fn si(&self) -> Unit {
        let mut vector = UnitVector::unitless();
        for (i, e) in self.vector.terms() {
            vector.accumulate(UNITS.si_equivalent(i), e);
        }
        Unit::from_valid(vector)
    }

    /// Expressed purely in SI base units: J -> kg.m².s⁻²
    pub fn si_primary(&self) -> Unit {
        Unit::from_valid(UNITS.si_primary(&self.dimension()))
    }

    /// The named SI unit of a dimension, or its SI base expansion
    pub fn si_of(dimension: &Dimension) -> Unit {
        Unit::from_valid(UNITS.si_for(dimension))
    }

    /// Superscript symbol rendering, "J.N⁻¹"
    pub fn symbol(&self) -> String {
        let parts: Vec<(&str, Exponent)> = self
            .ordered_terms()
            .into_iter()
            .map(|(i, e)| (UNITS.atom(i).symbol, e))
            .collect();
        format::compose(&parts, SYMBOL_SEPARATOR, "1")
    }

    /// Name rendering, "joule . newton⁻¹"
    pub fn name(&self) -> String {
        let parts: Vec<(&str, Exponent)> = self
            .ordered_terms()
            .into_iter()
            .map(|(i, e)| (UNITS.atom(i).name, e))
            .collect();
        format::compose(&parts, NAME_SEPARATOR, "unitless")
    }

    /// ASCII grammar rendering, "J.N^-1"; parses back to the same unit
    pub fn expression(&self) -> String {
        render_expression(&self.vector)
    }

    fn ordered_terms(&self) -> Vec<(usize, Exponent)> {
        format::display_order(self.vector.terms(), UNITS.primary_count())
    }
}

fn render_expression(vector: &UnitVector) -> String {
    let parts: Vec<(&str, Exponent)> = format::display_order(vector.terms(), UNITS.primary_count())
        .into_iter()
        .map(|(i, e)| (UNITS.atom(i).symbol, e))
        .collect();
    format::compose_expression(&parts)
}

fn out_of_range(expression: String) -> UnitError {
    UnitError::ExponentOutOfRange { expression }
}

fn check_affine(vector: &UnitVector, expression: &str) -> Result<(), UnitError> {
    match vector.affine_violation() {
        Some(i) => Err(UnitError::InvalidAffineComposition {
            unit: UNITS.atom(i).symbol.to_string(),
            expression: expression.to_string(),
        }),
        None => Ok(()),
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::unitless()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expression())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Unit::parse(&s).map_err(de::Error::custom)
    }
}
