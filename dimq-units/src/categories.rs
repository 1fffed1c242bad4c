//! Named dimension categories (mass, area, energy, ...)
//!
//! Categories are display-only: they name dimension vectors but never take
//! part in equality or conversion. The first `BASE_COUNT` entries are the
//! base dimensions in base order; derived categories follow from simple to
//! complex.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::dimension::{Dimension, BASE_COUNT};

/// A named physical quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionCategory {
    /// Short symbol (e.g. "E")
    pub symbol: &'static str,
    /// Full name (e.g. "energy")
    pub name: &'static str,
    /// Base-dimension vector
    pub dimension: Dimension,
}

impl DimensionCategory {
    const fn new(symbol: &'static str, name: &'static str, dimension: Dimension) -> Self {
        DimensionCategory { symbol, name, dimension }
    }

    /// Whether this category is one of the base dimensions
    pub fn is_primary(&self) -> bool {
        self.dimension.base_index().is_some()
    }
}

const CATEGORY_TABLE: &[DimensionCategory] = &[
    // Base dimensions, in base order
    DimensionCategory::new("M", "mass", Dimension::MASS),
    DimensionCategory::new("L", "length", Dimension::LENGTH),
    DimensionCategory::new("T", "time", Dimension::TIME),
    DimensionCategory::new("I", "electric current", Dimension::CURRENT),
    DimensionCategory::new("Θ", "temperature", Dimension::TEMPERATURE),
    DimensionCategory::new("N", "amount of substance", Dimension::AMOUNT),
    DimensionCategory::new("J", "luminous intensity", Dimension::LUMINOSITY),
    DimensionCategory::new("α", "angle", Dimension::ANGLE),

    // Derived dimensions, simple to complex
    DimensionCategory::new("Ar", "area", Dimension::AREA),
    DimensionCategory::new("Vol", "volume", Dimension::VOLUME),
    DimensionCategory::new("ν", "frequency", Dimension::FREQUENCY),
    DimensionCategory::new("ρ", "density", Dimension::DENSITY),
    DimensionCategory::new("P", "pressure", Dimension::PRESSURE),
    DimensionCategory::new("Q", "electric charge", Dimension::CHARGE),
    DimensionCategory::new("V", "velocity", Dimension::VELOCITY),
    DimensionCategory::new("Mom", "momentum", Dimension::MOMENTUM),
    DimensionCategory::new("A", "acceleration", Dimension::ACCELERATION),
    DimensionCategory::new("F", "force", Dimension::FORCE),
    DimensionCategory::new("E", "energy", Dimension::ENERGY),
    DimensionCategory::new("Pw", "power", Dimension::POWER),
    DimensionCategory::new("U", "voltage", Dimension::VOLTAGE),
    DimensionCategory::new("R", "resistance", Dimension::RESISTANCE),
];

/// Global category registry
pub static CATEGORIES: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::new);

/// Registry of all named dimension categories
pub struct CategoryRegistry {
    index: HashMap<&'static str, usize>,
}

impl CategoryRegistry {
    fn new() -> Self {
        let mut index = HashMap::new();
        for (i, category) in CATEGORY_TABLE.iter().enumerate() {
            index.entry(category.symbol).or_insert(i);
            index.entry(category.name).or_insert(i);
        }
        CategoryRegistry { index }
    }

    /// All categories, in declaration order
    pub fn all(&self) -> &'static [DimensionCategory] {
        CATEGORY_TABLE
    }

    pub fn len(&self) -> usize {
        CATEGORY_TABLE.len()
    }

    pub fn is_empty(&self) -> bool {
        CATEGORY_TABLE.is_empty()
    }

    /// Category at a registry index
    pub fn category(&self, index: usize) -> &'static DimensionCategory {
        &CATEGORY_TABLE[index]
    }

    /// Registry index of a symbol or name (exact, case-sensitive)
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Get a category by symbol or name
    pub fn get(&self, token: &str) -> Option<&'static DimensionCategory> {
        self.index_of(token).map(|i| self.category(i))
    }

    /// First category whose vector equals `dimension` exactly
    pub fn find_exact(&self, dimension: &Dimension) -> Option<usize> {
        CATEGORY_TABLE.iter().position(|c| c.dimension == *dimension)
    }

    /// Whether the category at `index` is one of the base dimensions
    pub fn is_primary(&self, index: usize) -> bool {
        index < BASE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BASE_NAMES, BASE_SYMBOLS};

    #[test]
    fn test_base_categories_lead_in_base_order() {
        for i in 0..BASE_COUNT {
            let category = CATEGORIES.category(i);
            assert_eq!(category.symbol, BASE_SYMBOLS[i]);
            assert_eq!(category.name, BASE_NAMES[i]);
            assert!(category.is_primary());
        }
        assert!(CATEGORIES.all()[BASE_COUNT..].iter().all(|c| !c.is_primary()));
    }

    #[test]
    fn test_symbols_and_names_unique() {
        let all = CATEGORIES.all();
        for (i, c) in all.iter().enumerate() {
            assert_eq!(CATEGORIES.index_of(c.symbol), Some(i), "duplicate symbol {}", c.symbol);
            assert_eq!(CATEGORIES.index_of(c.name), Some(i), "duplicate name {}", c.name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(CATEGORIES.get("E").map(|c| c.name), Some("energy"));
        assert_eq!(CATEGORIES.get("force").map(|c| c.symbol), Some("F"));
        assert!(CATEGORIES.get("Force").is_none());
        assert!(CATEGORIES.get("energy ").is_none());
    }

    #[test]
    fn test_find_exact() {
        let area = CATEGORIES.find_exact(&Dimension::AREA).unwrap();
        assert_eq!(CATEGORIES.category(area).name, "area");
        assert!(CATEGORIES.find_exact(&Dimension::DIMENSIONLESS).is_none());
    }
}
