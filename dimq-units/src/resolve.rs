//! Shortest-name resolution - dimension vectors back to named quantities
//!
//! Display only: nothing here takes part in equality, conversion or
//! arithmetic.

use dimq_core::Exponent;
use tracing::debug;
use crate::categories::CATEGORIES;
use crate::config::DisplayConfig;
use crate::dimension::{Dimension, BASE_COUNT};
use crate::format::{self, NAME_SEPARATOR, SYMBOL_SEPARATOR};
use crate::unit::Unit;
use crate::units::UNITS;

/// A dimension written as exponents of named categories, e.g. "E.F⁻¹"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Composition {
    /// Nonzero `(category index, exponent)` pairs, sorted by index
    terms: Vec<(usize, Exponent)>,
}

impl Composition {
    /// Accumulate terms; repeated categories add up and zeros drop out
    pub fn new(terms: impl IntoIterator<Item = (usize, Exponent)>) -> Self {
        let mut merged: Vec<(usize, Exponent)> = Vec::new();
        for (index, e) in terms {
            match merged.iter_mut().find(|(i, _)| *i == index) {
                Some((_, acc)) => *acc += e,
                None => merged.push((index, e)),
            }
        }
        merged.retain(|(_, e)| !e.is_zero());
        merged.sort_by_key(|(i, _)| *i);
        Composition { terms: merged }
    }

    pub fn empty() -> Self {
        Composition { terms: Vec::new() }
    }

    /// The dimension as the unit spells it: each atom mapped to its category
    pub fn of_unit(unit: &Unit) -> Self {
        let mut terms = Vec::new();
        for (i, e) in unit.vector().terms() {
            let dimension = UNITS.atom(i).dimension;
            match CATEGORIES.find_exact(&dimension) {
                Some(category) => terms.push((category, e)),
                None => terms.extend(Composition::primary(&dimension.power(e)).terms),
            }
        }
        Composition::new(terms)
    }

    /// Expansion over the base dimensions
    pub fn primary(dimension: &Dimension) -> Self {
        Composition::new(dimension.exponents.iter().copied().enumerate())
    }

    pub fn terms(&self) -> &[(usize, Exponent)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of absolute exponents
    pub fn abs_sum(&self) -> Exponent {
        self.terms.iter().map(|(_, e)| e.abs()).sum()
    }

    /// Base-dimension vector this composition reduces to
    pub fn dimension(&self) -> Dimension {
        self.terms.iter().fold(Dimension::DIMENSIONLESS, |acc, (i, e)| {
            acc.multiply(&CATEGORIES.category(*i).dimension.power(*e))
        })
    }

    pub fn symbol(&self) -> String {
        let parts: Vec<(&str, Exponent)> = self
            .ordered()
            .into_iter()
            .map(|(i, e)| (CATEGORIES.category(i).symbol, e))
            .collect();
        format::compose(&parts, SYMBOL_SEPARATOR, "1")
    }

    pub fn name(&self) -> String {
        let parts: Vec<(&str, Exponent)> = self
            .ordered()
            .into_iter()
            .map(|(i, e)| (CATEGORIES.category(i).name, e))
            .collect();
        format::compose(&parts, NAME_SEPARATOR, "dimensionless")
    }

    /// Each category replaced by its SI unit: "J.N⁻¹", "(m³)⁻¹"
    pub fn si_unit(&self) -> String {
        let parts: Vec<(String, Exponent)> = self
            .ordered()
            .into_iter()
            .map(|(i, e)| {
                let si = Unit::si_of(&CATEGORIES.category(i).dimension);
                let simple = si.vector().term_count() == 1 && si.vector().terms().all(|(_, x)| x.is_one());
                let symbol = si.symbol();
                if simple || e.is_one() {
                    (symbol, e)
                } else {
                    (format!("({})", symbol), e)
                }
            })
            .collect();
        format::compose(&parts, SYMBOL_SEPARATOR, "1")
    }

    fn ordered(&self) -> Vec<(usize, Exponent)> {
        format::display_order(self.terms.iter().copied(), BASE_COUNT)
    }

    fn from_integers(terms: &[(usize, i64)]) -> Self {
        Composition::new(terms.iter().map(|(i, e)| (*i, Exponent::integer(*e))))
    }
}

/// Most recognizable name for a dimension
///
/// An exact category match wins; otherwise the decomposition with the
/// fewest categories, then the smallest absolute exponent sum, then
/// declaration order. Falls back to the base expansion when nothing within
/// `config.max_terms` categories fits.
pub fn shortest(dimension: &Dimension, config: &DisplayConfig) -> Composition {
    if dimension.is_dimensionless() {
        return Composition::empty();
    }
    if let Some(index) = CATEGORIES.find_exact(dimension) {
        return Composition::new([(index, Exponent::ONE)]);
    }
    match search(dimension, config, true).into_iter().next() {
        Some(found) => found,
        None => {
            debug!(dimension = %dimension, max_terms = config.term_bound(), "no named decomposition, using base dimensions");
            Composition::primary(dimension)
        }
    }
}

/// Every integer composition of at most `config.max_terms` categories with
/// exponents up to `config.max_exponent` that reduces to `dimension`,
/// best first
pub fn equivalents(dimension: &Dimension, config: &DisplayConfig) -> Vec<Composition> {
    if dimension.is_dimensionless() {
        return Vec::new();
    }
    search(dimension, config, false)
}

fn search(dimension: &Dimension, config: &DisplayConfig, stop_at_first_size: bool) -> Vec<Composition> {
    let Some(target) = dimension.to_integers() else {
        return Vec::new();
    };
    let vectors: Vec<Option<[i64; BASE_COUNT]>> = CATEGORIES
        .all()
        .iter()
        .map(|c| c.dimension.to_integers())
        .collect();
    let steps = exponent_steps(config.exponent_bound());
    let max_terms = config.term_bound();

    let mut found = Vec::new();
    let mut chosen = Vec::with_capacity(max_terms);
    for size in 1..=max_terms {
        let mut walker = Search { vectors: &vectors, steps: &steps, target: &target, found: &mut found };
        walker.collect(size, 0, [0; BASE_COUNT], &mut chosen);
        if stop_at_first_size && !found.is_empty() {
            break;
        }
    }
    found.sort_by_key(|c| (c.len(), c.abs_sum()));
    found
}

/// 1, -1, 2, -2, ... up to `max`
fn exponent_steps(max: i64) -> Vec<i64> {
    (1..=max).flat_map(|e| [e, -e]).collect()
}

struct Search<'a> {
    vectors: &'a [Option<[i64; BASE_COUNT]>],
    steps: &'a [i64],
    target: &'a [i64; BASE_COUNT],
    found: &'a mut Vec<Composition>,
}

impl Search<'_> {
    /// Choose `remaining` more categories from `start` onward
    fn collect(&mut self, remaining: usize, start: usize, acc: [i64; BASE_COUNT], chosen: &mut Vec<(usize, i64)>) {
        if remaining == 0 {
            if acc == *self.target {
                self.found.push(Composition::from_integers(chosen));
            }
            return;
        }
        for index in start..self.vectors.len() {
            let Some(vector) = self.vectors[index] else { continue };
            for &e in self.steps {
                let mut next = acc;
                for (n, v) in next.iter_mut().zip(vector.iter()) {
                    *n += e * v;
                }
                chosen.push((index, e));
                self.collect(remaining - 1, index + 1, next, chosen);
                chosen.pop();
            }
        }
    }
}
