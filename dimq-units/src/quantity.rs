//! Quantity type - a value with an associated unit

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};
use serde::{Deserialize, Serialize};
use dimq_core::{Exponent, UnitError};
use crate::config::{approx_eq, DisplayConfig, DEFAULT_RELATIVE_TOLERANCE};
use crate::convert::{convert, si_form};
use crate::dimension::Dimension;
use crate::format;
use crate::unit::Unit;

/// A physical quantity: a numeric value with an associated unit
///
/// The value is only meaningful relative to its unit; nothing is normalized
/// on construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Create from a unit expression, e.g. `Quantity::parse(1.0, "kcal.mol^-1")`
    pub fn parse(value: f64, expr: &str) -> Result<Self, UnitError> {
        Ok(Quantity::new(value, Unit::parse(expr)?))
    }

    /// Create a dimensionless quantity (pure number)
    pub fn dimensionless(value: f64) -> Self {
        Quantity::new(value, Unit::unitless())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Get the dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Check if two quantities have compatible dimensions
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_convertible_to(&other.unit)
    }

    pub fn is_in_si_unit(&self) -> bool {
        self.unit.is_si()
    }

    /// Equal within the default tolerance; false across dimensions
    pub fn equals(&self, other: &Quantity) -> bool {
        self.approx_eq(other, DEFAULT_RELATIVE_TOLERANCE)
    }

    /// `other` converted into this unit, compared within `rel_tol`
    pub fn approx_eq(&self, other: &Quantity, rel_tol: f64) -> bool {
        match convert(other.value, &other.unit, &self.unit) {
            Ok(converted) => approx_eq(self.value, converted, rel_tol),
            Err(_) => false,
        }
    }

    /// Order two quantities of the same dimension
    pub fn compare(&self, other: &Quantity) -> Result<Ordering, UnitError> {
        let converted = convert(other.value, &other.unit, &self.unit)?;
        if approx_eq(self.value, converted, DEFAULT_RELATIVE_TOLERANCE) {
            return Ok(Ordering::Equal);
        }
        Ok(self.value.total_cmp(&converted))
    }

    /// Sum in this quantity's unit
    pub fn add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let converted = convert(other.value, &other.unit, &self.unit)?;
        Ok(Quantity::new(self.value + converted, self.unit.clone()))
    }

    /// Difference in this quantity's unit
    pub fn subtract(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let converted = convert(other.value, &other.unit, &self.unit)?;
        Ok(Quantity::new(self.value - converted, self.unit.clone()))
    }

    /// Product: units compose, values multiply, no conversion factor applied
    pub fn multiply(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let unit = self.unit.multiply(&other.unit)?;
        Ok(Quantity::new(self.value * other.value, unit))
    }

    /// Quotient: units divide, values divide, no conversion factor applied
    pub fn divide(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let unit = self.unit.divide(&other.unit)?;
        Ok(Quantity::new(self.value / other.value, unit))
    }

    /// Raise to a rational power
    pub fn power(&self, exp: Exponent) -> Result<Quantity, UnitError> {
        let unit = self.unit.power(exp)?;
        Ok(Quantity::new(exp.raise(self.value), unit))
    }

    pub fn powi(&self, exp: i32) -> Result<Quantity, UnitError> {
        self.power(Exponent::integer(exp as i64))
    }

    /// Same quantity expressed in `target`
    pub fn convert_unit(&self, target: &Unit) -> Result<Quantity, UnitError> {
        let value = convert(self.value, &self.unit, target)?;
        Ok(Quantity::new(value, target.clone()))
    }

    /// Like `convert_unit`, but rewrites this quantity; untouched on error
    pub fn convert_unit_in_place(&mut self, target: &Unit) -> Result<(), UnitError> {
        self.value = convert(self.value, &self.unit, target)?;
        self.unit = target.clone();
        Ok(())
    }

    /// Expressed in the SI form of its unit: 1 kcal -> 4184 J
    pub fn convert_unit_to_si(&self) -> Quantity {
        let form = si_form(&self.unit);
        Quantity::new(form.to_si(self.value), form.unit)
    }

    pub fn convert_unit_to_si_in_place(&mut self) {
        let form = si_form(&self.unit);
        self.value = form.to_si(self.value);
        self.unit = form.unit;
    }

    /// Expressed in SI base units: 1 kcal -> 4184 kg.m².s⁻²
    pub fn convert_unit_to_si_primary(&self) -> Quantity {
        let form = si_form(&self.unit);
        Quantity::new(form.to_si(self.value), self.unit.si_primary())
    }

    /// Value line followed by the unit and dimension views
    pub fn report(&self, config: &DisplayConfig) -> String {
        format!(
            "{} {}\n\n{}",
            format::format_value(self.value, config.decimals),
            self.unit.symbol(),
            format::unit_report(&self.unit, config),
        )
    }

    fn map_value(&self, f: impl FnOnce(f64) -> f64) -> Quantity {
        Quantity::new(f(self.value), self.unit.clone())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = DisplayConfig::default().decimals;
        write!(f, "{} {}", format::format_value(self.value, decimals), self.unit.symbol())
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        self.map_value(|v| v * rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        &self * rhs
    }
}

impl Div<f64> for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        self.map_value(|v| v / rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        &self / rhs
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.map_value(|v| -v)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(value: f64, expr: &str) -> Quantity {
        Quantity::parse(value, expr).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        approx_eq(a, b, DEFAULT_RELATIVE_TOLERANCE)
    }

    #[test]
    fn test_quantity_creation() {
        let length = q(5.0, "m");
        assert_eq!(length.value(), 5.0);
        assert_eq!(length.unit().symbol(), "m");
        assert_eq!(length.dimension(), Dimension::LENGTH);
        assert!(Quantity::dimensionless(42.0).is_dimensionless());
        assert!(Quantity::parse(1.0, "parsec").is_err());
    }

    #[test]
    fn test_no_normalization_on_construction() {
        let energy = q(1.0, "kcal");
        assert_eq!(energy.value(), 1.0);
        assert_eq!(energy.unit().symbol(), "kcal");
        assert!(!energy.is_in_si_unit());
        assert!(q(1.0, "J").is_in_si_unit());
    }

    #[test]
    fn test_add_sub() {
        let sum = q(1.0, "km").add(&q(500.0, "m")).unwrap();
        assert!(close(sum.value(), 1.5));
        assert_eq!(sum.unit().symbol(), "km");

        let diff = q(1.0, "h").subtract(&q(30.0, "min")).unwrap();
        assert!(close(diff.value(), 0.5));

        let warmer = q(20.0, "°C").add(&q(5.0, "°C")).unwrap();
        assert!(close(warmer.value(), 25.0));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let err = q(1.0, "kg").add(&q(1.0, "m")).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(q(1.0, "kg").subtract(&q(1.0, "s")).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_mul_div_keep_units_apart() {
        let area = q(5.0, "m").multiply(&q(3.0, "cm")).unwrap();
        assert_eq!(area.value(), 15.0);
        assert_eq!(area.unit().symbol(), "m.cm");
        assert_eq!(area.dimension(), Dimension::AREA);

        let speed = q(100.0, "km").divide(&q(2.0, "h")).unwrap();
        assert_eq!(speed.value(), 50.0);
        assert_eq!(speed.dimension(), Dimension::VELOCITY);
    }

    #[test]
    fn test_mul_rejects_affine() {
        assert!(q(20.0, "°C").multiply(&q(1.0, "s")).unwrap_err().is_invalid_affine());
        assert!(q(20.0, "°C").powi(2).unwrap_err().is_invalid_affine());
    }

    #[test]
    fn test_power() {
        let volume = q(2.0, "m").powi(3).unwrap();
        assert_eq!(volume.value(), 8.0);
        assert_eq!(volume.dimension(), Dimension::VOLUME);

        let side = q(16.0, "m^2").power(Exponent::new(1, 2).unwrap()).unwrap();
        assert!(close(side.value(), 4.0));
        assert_eq!(side.unit(), &Unit::parse("m").unwrap());
    }

    #[test]
    fn test_equality() {
        assert_eq!(q(1.0, "km"), q(1000.0, "m"));
        assert!(q(0.0, "°C").equals(&q(273.15, "K")));
        assert!(!q(1.0, "km").equals(&q(1.0, "m")));
        // Across dimensions: false, never an error
        assert!(!q(1.0, "kg").equals(&q(1.0, "m")));
        assert!(q(1.0, "m").approx_eq(&q(100.1, "cm"), 1e-2));
    }

    #[test]
    fn test_equality_at_tiny_magnitudes() {
        let a = q(1e-30, "kg");
        let b = q(2e-30, "kg");
        assert!(!a.equals(&b));
        assert_ne!(a, b);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert_eq!(b.compare(&a).unwrap(), Ordering::Greater);

        let planck = q(6.62607015e-34, "J.s");
        assert!(!planck.equals(&q(0.0, "J.s")));
        assert!(planck.equals(&q(6.62607015e-34, "J.s")));
        assert!(q(1.0, "e").equals(&q(1.602176634e-19, "C")));
        assert!(!q(1.0, "e").equals(&q(1.602176634e-19 * 1.001, "C")));
    }

    #[test]
    fn test_compare() {
        assert_eq!(q(1.0, "km").compare(&q(999.0, "m")).unwrap(), Ordering::Greater);
        assert_eq!(q(1.0, "min").compare(&q(61.0, "s")).unwrap(), Ordering::Less);
        assert_eq!(q(1.0, "J").compare(&q(1.0 / 4184.0, "kcal")).unwrap(), Ordering::Equal);
        assert!(q(1.0, "kg").compare(&q(1.0, "m")).unwrap_err().is_dimension_mismatch());
    }

    #[test]
    fn test_convert_unit() {
        let feet = q(1.0, "mi").convert_unit(&Unit::parse("ft").unwrap()).unwrap();
        assert!(close(feet.value(), 5280.0));
        assert_eq!(feet.unit().symbol(), "ft");

        let err = q(1.0, "kcal").convert_unit(&Unit::parse("kg.m.s^-2").unwrap()).unwrap_err();
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_convert_in_place() {
        let mut t = q(100.0, "°C");
        t.convert_unit_in_place(&Unit::parse("°F").unwrap()).unwrap();
        assert!(close(t.value(), 212.0));
        assert_eq!(t.unit().symbol(), "°F");

        // A failed conversion leaves the quantity untouched
        let before = t.clone();
        assert!(t.convert_unit_in_place(&Unit::parse("m").unwrap()).is_err());
        assert_eq!(t.value(), before.value());
        assert_eq!(t.unit(), before.unit());

        t.convert_unit_to_si_in_place();
        assert!(close(t.value(), 373.15));
        assert_eq!(t.unit().symbol(), "K");
    }

    #[test]
    fn test_convert_to_si() {
        let si = q(1.0, "kcal.mol^-1").convert_unit_to_si();
        assert!(close(si.value(), 4184.0));
        assert_eq!(si.unit().symbol(), "J.mol⁻¹");

        let primary = q(1.0, "kcal").convert_unit_to_si_primary();
        assert!(close(primary.value(), 4184.0));
        assert_eq!(primary.unit().symbol(), "kg.m².s⁻²");

        let litres = q(2.0, "L").convert_unit_to_si();
        assert!(close(litres.value(), 2e-3));
        assert_eq!(litres.unit().symbol(), "m³");
    }

    #[test]
    fn test_scalar_ops() {
        let d = q(3.0, "m");
        assert_eq!((&d * 2.0).value(), 6.0);
        assert_eq!((&d / 2.0).value(), 1.5);
        assert_eq!((-d.clone()).value(), -3.0);
        assert_eq!((d * 2.0).unit().symbol(), "m");
    }

    #[test]
    fn test_display() {
        assert_eq!(q(4184.0, "J").to_string(), "4.184E+03 J");
        assert_eq!(q(1.0, "J.N^-1").to_string(), "1E+00 J.N⁻¹");
        assert_eq!(Quantity::dimensionless(0.5).to_string(), "5E-01 1");
    }

    #[test]
    fn test_report() {
        let report = q(1.0, "J.N^-1").report(&DisplayConfig::default());
        let expected = "1E+00 J.N⁻¹\n\
            \n\
            Unit:\n\
            -----\n\
            As is:      J.N⁻¹ = joule . newton⁻¹\n\
            SI:         J.N⁻¹ = joule . newton⁻¹\n\
            SI primary: m = metre\n\
            \n\
            Dimension:\n\
            ----------\n\
            As is:    E.F⁻¹ = energy . force⁻¹ [J.N⁻¹]\n\
            Shortest: L = length [m]\n\
            Primary:  L = length [m]";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_serde() {
        let energy = q(1.5, "kcal.mol^-1");
        let json = serde_json::to_value(&energy).unwrap();
        assert_eq!(json, serde_json::json!({"value": 1.5, "unit": "kcal.mol^-1"}));
        let back: Quantity = serde_json::from_value(json).unwrap();
        assert_eq!(back.unit(), energy.unit());
        assert_eq!(back.value(), 1.5);
    }
}
