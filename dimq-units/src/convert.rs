//! Conversion engine - SI forms and value conversion between units
//!
//! `value_si = value * scale + offset`. Only a lone affine atom carries an
//! offset; composite units are purely multiplicative.

use dimq_core::UnitError;
use tracing::debug;
use crate::unit::Unit;
use crate::units::UNITS;

/// A unit's SI equivalent together with the transform into it
#[derive(Debug, Clone, PartialEq)]
pub struct SiForm {
    /// The unit with every atom replaced by its SI equivalent
    pub unit: Unit,
    pub scale: f64,
    pub offset: f64,
}

impl SiForm {
    /// Value in this form's SI unit
    pub fn to_si(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Value in this form's source unit from an SI value
    pub fn from_si(&self, value_si: f64) -> f64 {
        (value_si - self.offset) / self.scale
    }
}

/// SI form of a unit: the product of each atom's scale raised to its exponent
pub fn si_form(unit: &Unit) -> SiForm {
    let scale: f64 = unit
        .vector()
        .terms()
        .map(|(i, e)| e.raise(UNITS.atom(i).scale))
        .product();
    let offset = unit
        .vector()
        .affine_atom()
        .map(|i| UNITS.atom(i).offset)
        .unwrap_or(0.0);
    SiForm { unit: unit.si(), scale, offset }
}

/// Transform between two interconvertible units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub from_scale: f64,
    pub from_offset: f64,
    pub to_scale: f64,
    pub to_offset: f64,
}

impl Conversion {
    /// Multiplicative factor; the whole conversion unless either side is affine
    pub fn factor(&self) -> f64 {
        self.from_scale / self.to_scale
    }

    pub fn is_affine(&self) -> bool {
        self.from_offset != 0.0 || self.to_offset != 0.0
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.is_affine() {
            let value_si = value * self.from_scale + self.from_offset;
            (value_si - self.to_offset) / self.to_scale
        } else {
            value * self.factor()
        }
    }

    /// The conversion back
    pub fn inverse(&self) -> Conversion {
        Conversion {
            from_scale: self.to_scale,
            from_offset: self.to_offset,
            to_scale: self.from_scale,
            to_offset: self.from_offset,
        }
    }
}

/// Conversion from one unit to another of the same dimension
pub fn conversion(from: &Unit, to: &Unit) -> Result<Conversion, UnitError> {
    let from_dim = from.dimension();
    let to_dim = to.dimension();
    if from_dim != to_dim {
        debug!(from = %from, to = %to, "rejected conversion between dimensions {} and {}", from_dim, to_dim);
        return Err(UnitError::DimensionMismatch {
            from: from.symbol(),
            to: to.symbol(),
            from_dim: from_dim.to_string(),
            to_dim: to_dim.to_string(),
        });
    }

    let source = si_form(from);
    let target = si_form(to);
    Ok(Conversion {
        from_scale: source.scale,
        from_offset: source.offset,
        to_scale: target.scale,
        to_offset: target.offset,
    })
}

/// Factor `si_scale(from) / si_scale(to)`
pub fn conversion_factor(from: &Unit, to: &Unit) -> Result<f64, UnitError> {
    Ok(conversion(from, to)?.factor())
}

/// Convert a value between units, honoring affine offsets
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64, UnitError> {
    Ok(conversion(from, to)?.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{approx_eq, DEFAULT_RELATIVE_TOLERANCE};

    fn unit(expr: &str) -> Unit {
        Unit::parse(expr).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        approx_eq(a, b, DEFAULT_RELATIVE_TOLERANCE)
    }

    #[test]
    fn test_si_form() {
        let form = si_form(&unit("kcal"));
        assert_eq!(form.unit, unit("J"));
        assert_eq!(form.scale, 4184.0);
        assert_eq!(form.offset, 0.0);

        let form = si_form(&unit("km.h^-1"));
        assert_eq!(form.unit, unit("m.s^-1"));
        assert!(close(form.scale, 1000.0 / 3600.0));

        let form = si_form(&unit("°C"));
        assert_eq!(form.unit, unit("K"));
        assert_eq!(form.offset, 273.15);
        assert!(close(form.to_si(25.0), 298.15));
        assert!(close(form.from_si(0.0), -273.15));
    }

    #[test]
    fn test_fractional_scale() {
        let form = si_form(&unit("cm^1/2"));
        assert!(close(form.scale, 0.1));
    }

    #[test]
    fn test_linear_conversion() {
        assert!(close(convert(1.0, &unit("km"), &unit("m")).unwrap(), 1000.0));
        assert!(close(convert(1.0, &unit("mi"), &unit("km")).unwrap(), 1.609344));
        assert!(close(convert(1.0, &unit("kcal"), &unit("J")).unwrap(), 4184.0));
        assert!(close(convert(1.0, &unit("m.cm"), &unit("m^2")).unwrap(), 0.01));
        assert!(close(convert(1.0, &unit("L"), &unit("cm^3")).unwrap(), 1000.0));
        assert!(close(conversion_factor(&unit("E_h"), &unit("eV")).unwrap(), 27.211386245988));
    }

    #[test]
    fn test_temperature() {
        assert!(close(convert(0.0, &unit("°C"), &unit("K")).unwrap(), 273.15));
        assert!(close(convert(373.15, &unit("K"), &unit("°C")).unwrap(), 100.0));
        assert!(close(convert(100.0, &unit("°C"), &unit("°F")).unwrap(), 212.0));
        assert!(convert(32.0, &unit("°F"), &unit("°C")).unwrap().abs() < 1e-9);
        assert!(close(convert(32.0, &unit("°F"), &unit("°R")).unwrap(), 491.67));
        assert!(close(convert(491.67, &unit("°R"), &unit("K")).unwrap(), 273.15));
    }

    #[test]
    fn test_inverse() {
        let c = conversion(&unit("°F"), &unit("K")).unwrap();
        assert!(c.is_affine());
        assert!(close(c.inverse().apply(c.apply(-40.0)), -40.0));

        let c = conversion(&unit("ft"), &unit("in")).unwrap();
        assert!(!c.is_affine());
        assert!(close(c.factor(), 12.0));
        assert!(close(c.inverse().factor(), 1.0 / 12.0));
    }

    #[test]
    fn test_round_trip_all_interconvertible_atoms() {
        let atoms = UNITS.all();
        for a in atoms {
            for b in atoms.iter().filter(|b| b.dimension == a.dimension) {
                let (ua, ub) = (unit(a.symbol), unit(b.symbol));
                let there = convert(3.7, &ua, &ub).unwrap();
                let back = convert(there, &ub, &ua).unwrap();
                assert!(close(back, 3.7), "{} -> {} -> {}", a.symbol, b.symbol, a.symbol);
            }
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = conversion(&unit("kcal"), &unit("kg.m.s^-2")).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert_eq!(
            err,
            UnitError::DimensionMismatch {
                from: "kcal".to_string(),
                to: "kg.m.s⁻²".to_string(),
                from_dim: "M.L².T⁻²".to_string(),
                to_dim: "M.L.T⁻²".to_string(),
            }
        );
        assert!(conversion_factor(&unit("m"), &unit("s")).is_err());
    }
}
