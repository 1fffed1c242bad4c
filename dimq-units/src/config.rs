//! Display and comparison settings

use serde::{Deserialize, Serialize};

/// Relative tolerance used by quantity equality
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Upper bound on `DisplayConfig::max_terms`
pub const MAX_TERMS_LIMIT: usize = 5;

/// Upper bound on `DisplayConfig::max_exponent`
pub const MAX_EXPONENT_LIMIT: i64 = 10;

/// Compare two floats within a relative tolerance.
///
/// Purely relative: values at any magnitude (1e-34 as readily as 1e+23)
/// are told apart, and a nonzero value never equals zero.
pub fn approx_eq(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Report rendering and name-resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Digits after the mantissa point in scientific notation
    pub decimals: usize,

    /// Most categories tried in one shortest-name decomposition,
    /// capped at `MAX_TERMS_LIMIT`
    pub max_terms: usize,

    /// Largest absolute exponent tried per category, capped at
    /// `MAX_EXPONENT_LIMIT`
    pub max_exponent: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 10,
            max_terms: 3,
            max_exponent: 3,
        }
    }
}

impl DisplayConfig {
    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        Ok(config.clamped())
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self.clamped()
    }

    pub fn with_max_exponent(mut self, max_exponent: i64) -> Self {
        self.max_exponent = max_exponent;
        self.clamped()
    }

    /// Bring the search bounds into range
    pub fn clamped(self) -> Self {
        Self {
            max_terms: self.term_bound(),
            max_exponent: self.exponent_bound(),
            ..self
        }
    }

    /// `max_terms` as used by the resolver
    pub fn term_bound(&self) -> usize {
        self.max_terms.min(MAX_TERMS_LIMIT)
    }

    /// `max_exponent` as used by the resolver (absolute, capped)
    pub fn exponent_bound(&self) -> i64 {
        self.max_exponent.unsigned_abs().min(MAX_EXPONENT_LIMIT as u64) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.decimals, 10);
        assert_eq!(config.max_terms, 3);
        assert_eq!(config.max_exponent, 3);
    }

    #[test]
    fn test_from_json_partial() {
        let config = DisplayConfig::from_json(r#"{"decimals": 4}"#).unwrap();
        assert_eq!(config, DisplayConfig::default().with_decimals(4));

        let config = DisplayConfig::from_json("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());

        assert!(DisplayConfig::from_json(r#"{"max_terms": "two"}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DisplayConfig::default().with_max_terms(2).with_max_exponent(-4);
        assert_eq!(config.max_exponent, 4);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DisplayConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12, DEFAULT_RELATIVE_TOLERANCE));
        assert!(approx_eq(4184.0, 4184.000001, DEFAULT_RELATIVE_TOLERANCE));
        assert!(!approx_eq(1.0, 1.001, DEFAULT_RELATIVE_TOLERANCE));
        assert!(!approx_eq(-1.0, 1.0, DEFAULT_RELATIVE_TOLERANCE));
        assert!(approx_eq(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_approx_eq_tiny_magnitudes() {
        assert!(!approx_eq(1e-30, 2e-30, DEFAULT_RELATIVE_TOLERANCE));
        assert!(!approx_eq(6.62607015e-34, 0.0, DEFAULT_RELATIVE_TOLERANCE));
        assert!(!approx_eq(0.0, 1e-13, DEFAULT_RELATIVE_TOLERANCE));
        assert!(approx_eq(1.602176634e-19, 1.602176634e-19 * (1.0 + 1e-12), DEFAULT_RELATIVE_TOLERANCE));
    }

    #[test]
    fn test_search_bounds_clamped() {
        let config = DisplayConfig::default().with_max_terms(1_000).with_max_exponent(i64::MIN);
        assert_eq!(config.max_terms, MAX_TERMS_LIMIT);
        assert_eq!(config.max_exponent, MAX_EXPONENT_LIMIT);

        let config = DisplayConfig::from_json(r#"{"max_terms": 64, "max_exponent": -9000}"#).unwrap();
        assert_eq!(config.max_terms, MAX_TERMS_LIMIT);
        assert_eq!(config.max_exponent, MAX_EXPONENT_LIMIT);

        let raw = DisplayConfig { max_terms: 40, max_exponent: i64::MAX, decimals: 4 };
        assert_eq!(raw.term_bound(), MAX_TERMS_LIMIT);
        assert_eq!(raw.exponent_bound(), MAX_EXPONENT_LIMIT);
    }
}
