//! Human-readable renderings: values, compositions and reports

use dimq_core::Exponent;
use crate::config::DisplayConfig;
use crate::resolve::{self, Composition};
use crate::unit::Unit;

/// Separator between symbols ("kg.m²")
pub const SYMBOL_SEPARATOR: &str = ".";

/// Separator between names ("joule . newton⁻¹")
pub const NAME_SEPARATOR: &str = " . ";

/// Scientific notation with trailing mantissa zeros stripped: 4184 -> "4.184E+03"
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*E}", decimals, value);
    let (mantissa, exp) = raw.split_once('E').unwrap_or((raw.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    format!("{}E{:+03}", mantissa, exp)
}

/// Derived entries first, most complex first, then primary entries in order
pub fn display_order(
    terms: impl IntoIterator<Item = (usize, Exponent)>,
    primary_count: usize,
) -> Vec<(usize, Exponent)> {
    let (mut derived, primary): (Vec<_>, Vec<_>) =
        terms.into_iter().partition(|(i, _)| *i >= primary_count);
    derived.sort_by(|a, b| b.0.cmp(&a.0));
    let mut primary = primary;
    primary.sort_by_key(|(i, _)| *i);
    derived.extend(primary);
    derived
}

/// Join labels with superscript exponents; exponent 1 is omitted
pub fn compose<S: AsRef<str>>(parts: &[(S, Exponent)], separator: &str, empty: &str) -> String {
    if parts.is_empty() {
        return empty.to_string();
    }
    parts
        .iter()
        .map(|(label, e)| {
            if e.is_one() {
                label.as_ref().to_string()
            } else {
                format!("{}{}", label.as_ref(), e.to_superscript())
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Join labels in the ASCII expression grammar: "J.N^-1"
pub fn compose_expression<S: AsRef<str>>(parts: &[(S, Exponent)]) -> String {
    if parts.is_empty() {
        return crate::parse::UNITLESS_TERM.to_string();
    }
    parts
        .iter()
        .map(|(label, e)| {
            if e.is_one() {
                label.as_ref().to_string()
            } else {
                format!("{}^{}", label.as_ref(), e)
            }
        })
        .collect::<Vec<_>>()
        .join(SYMBOL_SEPARATOR)
}

/// Three unit views followed by the dimension report
pub fn unit_report(unit: &Unit, config: &DisplayConfig) -> String {
    let si = unit.si();
    let si_primary = unit.si_primary();
    format!(
        "Unit:\n\
         -----\n\
         As is:      {} = {}\n\
         SI:         {} = {}\n\
         SI primary: {} = {}\n\
         \n\
         Dimension:\n\
         ----------\n\
         {}",
        unit.symbol(),
        unit.name(),
        si.symbol(),
        si.name(),
        si_primary.symbol(),
        si_primary.name(),
        dimension_report(unit, config),
    )
}

/// As-is, shortest-name and primary views of a unit's dimension
pub fn dimension_report(unit: &Unit, config: &DisplayConfig) -> String {
    let dimension = unit.dimension();
    let as_is = Composition::of_unit(unit);
    let shortest = resolve::shortest(&dimension, config);
    let primary = Composition::primary(&dimension);
    format!(
        "As is:    {}\nShortest: {}\nPrimary:  {}",
        dimension_line(&as_is),
        dimension_line(&shortest),
        dimension_line(&primary),
    )
}

fn dimension_line(composition: &Composition) -> String {
    format!("{} = {} [{}]", composition.symbol(), composition.name(), composition.si_unit())
}
