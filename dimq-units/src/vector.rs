//! Exponent vectors over the atomic unit registry
//!
//! A `UnitVector` has one exact exponent per registered atomic unit.
//! Composition is vector addition, division is subtraction and
//! exponentiation is scalar multiplication. Nothing is simplified:
//! `m.cm` keeps two nonzero slots even though it reduces like `m^2`.

use dimq_core::Exponent;
use crate::dimension::Dimension;
use crate::units::{ATOM_COUNT, UNITS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitVector {
    exponents: [Exponent; ATOM_COUNT],
}

impl UnitVector {
    /// The zero vector
    pub fn unitless() -> Self {
        UnitVector { exponents: [Exponent::ZERO; ATOM_COUNT] }
    }

    /// Standard basis vector: 1 at the atom's registry slot
    pub fn basis(index: usize) -> Self {
        let mut v = Self::unitless();
        v.exponents[index] = Exponent::ONE;
        v
    }

    /// Accumulate `(slot, exponent)` pairs; repeated slots add up
    pub fn from_terms(terms: impl IntoIterator<Item = (usize, Exponent)>) -> Self {
        let mut v = Self::unitless();
        for (index, e) in terms {
            v.exponents[index] += e;
        }
        v
    }

    pub fn exponent(&self, index: usize) -> Exponent {
        self.exponents[index]
    }

    pub fn exponents(&self) -> &[Exponent; ATOM_COUNT] {
        &self.exponents
    }

    /// Nonzero `(slot, exponent)` pairs in registry order
    pub fn terms(&self) -> impl Iterator<Item = (usize, Exponent)> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_zero())
            .map(|(i, e)| (i, *e))
    }

    pub fn term_count(&self) -> usize {
        self.terms().count()
    }

    pub fn is_unitless(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    /// Unit multiplication; `None` on exponent overflow
    pub fn add(&self, other: &UnitVector) -> Option<UnitVector> {
        self.zip_with(other, Exponent::checked_add)
    }

    /// Unit division; `None` on exponent overflow
    pub fn subtract(&self, other: &UnitVector) -> Option<UnitVector> {
        self.zip_with(other, Exponent::checked_sub)
    }

    /// Unit exponentiation; `None` on exponent overflow
    pub fn scale(&self, factor: Exponent) -> Option<UnitVector> {
        let mut result = self.clone();
        for r in result.exponents.iter_mut() {
            *r = r.checked_mul(factor)?;
        }
        Some(result)
    }

    /// Every exponent within `Exponent::MAX_NUMERATOR` / `MAX_DENOMINATOR`
    pub fn is_bounded(&self) -> bool {
        self.exponents.iter().all(Exponent::is_bounded)
    }

    /// `self += other * factor` for vectors built from bounded units
    pub(crate) fn accumulate(&mut self, other: &UnitVector, factor: Exponent) {
        for (r, o) in self.exponents.iter_mut().zip(other.exponents.iter()) {
            if !o.is_zero() {
                *r += *o * factor;
            }
        }
    }

    fn zip_with(&self, other: &UnitVector, op: fn(&Exponent, Exponent) -> Option<Exponent>) -> Option<UnitVector> {
        let mut result = self.clone();
        for (r, o) in result.exponents.iter_mut().zip(other.exponents.iter()) {
            *r = op(r, *o)?;
        }
        Some(result)
    }

    /// Base-dimension vector: sum of exponent times each atom's dimension
    pub fn dimension(&self) -> Dimension {
        self.terms().fold(Dimension::DIMENSIONLESS, |acc, (i, e)| {
            acc.multiply(&UNITS.atom(i).dimension.power(e))
        })
    }

    /// Slot of an affine atom that is not standing alone with exponent 1
    pub fn affine_violation(&self) -> Option<usize> {
        let lone = self.term_count() == 1;
        self.terms()
            .find(|(i, e)| UNITS.atom(*i).is_affine() && !(lone && e.is_one()))
            .map(|(i, _)| i)
    }

    /// The single affine atom, if this vector is exactly one
    pub fn affine_atom(&self) -> Option<usize> {
        let mut terms = self.terms();
        match (terms.next(), terms.next()) {
            (Some((i, e)), None) if e.is_one() && UNITS.atom(i).is_affine() => Some(i),
            _ => None,
        }
    }

    /// Only SI atoms have nonzero exponents
    pub fn is_si(&self) -> bool {
        self.terms().all(|(i, _)| UNITS.atom(i).is_si)
    }
}

impl Default for UnitVector {
    fn default() -> Self {
        Self::unitless()
    }
}
