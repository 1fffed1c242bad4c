//! Dimq Constants - CODATA physical constants as quantities
//!
//! Each call to [`PhysicalConstant::quantity`] builds a fresh value; there is
//! no shared instance to mutate.

use std::fmt;
use serde::{Deserialize, Serialize};
use dimq_core::UnitError;
use dimq_units::Quantity;

/// Source for every value below
pub const SOURCE: &str = "CODATA 2018";

/// Supported physical constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalConstant {
    Avogadro,
    Coulomb,
    SpeedOfLight,
    Planck,
    Boltzmann,
    ElementaryCharge,
}

impl PhysicalConstant {
    pub const ALL: [PhysicalConstant; 6] = [
        PhysicalConstant::Avogadro,
        PhysicalConstant::Coulomb,
        PhysicalConstant::SpeedOfLight,
        PhysicalConstant::Planck,
        PhysicalConstant::Boltzmann,
        PhysicalConstant::ElementaryCharge,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            PhysicalConstant::Avogadro => "N_A",
            PhysicalConstant::Coulomb => "k_e",
            PhysicalConstant::SpeedOfLight => "c",
            PhysicalConstant::Planck => "h",
            PhysicalConstant::Boltzmann => "k_B",
            PhysicalConstant::ElementaryCharge => "e",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhysicalConstant::Avogadro => "avogadro",
            PhysicalConstant::Coulomb => "coulomb",
            PhysicalConstant::SpeedOfLight => "speed of light",
            PhysicalConstant::Planck => "planck",
            PhysicalConstant::Boltzmann => "boltzmann",
            PhysicalConstant::ElementaryCharge => "elementary charge",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            PhysicalConstant::Avogadro => 6.02214076e23,
            PhysicalConstant::Coulomb => 8.9875517923e9,
            PhysicalConstant::SpeedOfLight => 299792458.0,
            PhysicalConstant::Planck => 6.62607015e-34,
            PhysicalConstant::Boltzmann => 1.380649e-23,
            PhysicalConstant::ElementaryCharge => 1.602176634e-19,
        }
    }

    /// Unit expression the value is given in
    pub fn unit_expression(&self) -> &'static str {
        match self {
            PhysicalConstant::Avogadro => "mol^-1",
            PhysicalConstant::Coulomb => "N.m^2.C^-2",
            PhysicalConstant::SpeedOfLight => "m.s^-1",
            PhysicalConstant::Planck => "J.s",
            PhysicalConstant::Boltzmann => "J.K^-1",
            PhysicalConstant::ElementaryCharge => "C",
        }
    }

    pub fn source(&self) -> &'static str {
        SOURCE
    }

    /// Look up by symbol or name
    pub fn from_symbol(token: &str) -> Option<PhysicalConstant> {
        Self::ALL
            .into_iter()
            .find(|c| c.symbol() == token || c.name() == token)
    }

    /// A fresh quantity holding this constant
    pub fn quantity(&self) -> Result<Quantity, UnitError> {
        Quantity::parse(self.value(), self.unit_expression())
    }
}

impl fmt::Display for PhysicalConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimq_units::{approx_eq, Dimension, Unit, DEFAULT_RELATIVE_TOLERANCE};

    #[test]
    fn test_every_constant_builds() {
        for constant in PhysicalConstant::ALL {
            let q = constant.quantity().unwrap();
            assert_eq!(q.value(), constant.value());
            assert_eq!(q.unit(), &Unit::parse(constant.unit_expression()).unwrap());
        }
    }

    #[test]
    fn test_dimensions() {
        let c = PhysicalConstant::SpeedOfLight.quantity().unwrap();
        assert_eq!(c.dimension(), Dimension::VELOCITY);

        let n_a = PhysicalConstant::Avogadro.quantity().unwrap();
        assert_eq!(n_a.dimension(), Dimension::AMOUNT.invert());

        // k_e.e²/m is a force
        let k_e = PhysicalConstant::Coulomb.quantity().unwrap();
        let e = PhysicalConstant::ElementaryCharge.quantity().unwrap();
        let force = k_e
            .multiply(&e.powi(2).unwrap())
            .unwrap()
            .divide(&Quantity::parse(1.0, "m^2").unwrap())
            .unwrap();
        assert_eq!(force.dimension(), Dimension::FORCE);
    }

    #[test]
    fn test_fresh_values() {
        let mut first = PhysicalConstant::Planck.quantity().unwrap();
        first.convert_unit_to_si_in_place();
        first = &first * 2.0;
        let second = PhysicalConstant::Planck.quantity().unwrap();
        assert_eq!(second.value(), 6.62607015e-34);
        assert!(!first.equals(&second));
    }

    #[test]
    fn test_boltzmann_in_ev() {
        let k_b = PhysicalConstant::Boltzmann.quantity().unwrap();
        let target = Unit::parse("eV.K^-1").unwrap();
        let k_ev = k_b.convert_unit(&target).unwrap();
        assert!(approx_eq(k_ev.value(), 8.617333262e-5, DEFAULT_RELATIVE_TOLERANCE));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(PhysicalConstant::from_symbol("c"), Some(PhysicalConstant::SpeedOfLight));
        assert_eq!(PhysicalConstant::from_symbol("avogadro"), Some(PhysicalConstant::Avogadro));
        assert_eq!(PhysicalConstant::from_symbol("G"), None);
        assert_eq!(PhysicalConstant::Planck.to_string(), "planck");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&PhysicalConstant::SpeedOfLight).unwrap();
        assert_eq!(json, r#""speed_of_light""#);
        let back: PhysicalConstant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PhysicalConstant::SpeedOfLight);
    }
}
