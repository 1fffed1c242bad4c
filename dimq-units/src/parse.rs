//! Unit expression parsing - "kg.m^2.s^-2", "m^3/2", "J.N⁻¹"
//!
//! ```text
//! unit     := term ('.' term)*
//! term     := atom ('^' exponent)? | atom superscript | '1'
//! exponent := ['-'] integer ['/' integer]
//! ```
//!
//! Atoms are registry symbols or names, matched exactly. The whole
//! expression is checked for syntax before any atom is looked up, so a
//! malformed expression is reported as such even if it also names an
//! unknown unit.

use dimq_core::{superscript, Exponent, ParseError};
use tracing::{debug, trace};
use crate::categories::CATEGORIES;
use crate::dimension::Dimension;
use crate::units::UNITS;
use crate::vector::UnitVector;

/// Term separator
pub const SEPARATOR: char = '.';

/// ASCII exponent marker
pub const CARET: char = '^';

/// Literal for the empty composition
pub const UNITLESS_TERM: &str = "1";

/// One `atom^exponent` term; `atom` is `None` for the literal "1"
#[derive(Debug, Clone, PartialEq)]
struct Term<'a> {
    atom: Option<&'a str>,
    exponent: Exponent,
}

/// Parse a unit expression into its vector over the atomic unit registry
///
/// Affine validity is not checked here; see `Unit::parse`.
pub fn parse_unit_vector(expr: &str) -> Result<UnitVector, ParseError> {
    let terms = split_terms(expr)?;

    let mut vector = UnitVector::unitless();
    for term in terms {
        let Some(atom) = term.atom else { continue };
        let index = UNITS.index_of(atom).ok_or_else(|| {
            debug!(expression = expr, token = atom, "unknown unit");
            ParseError::UnknownUnit(atom.to_string())
        })?;
        trace!(token = atom, slot = index, exponent = %term.exponent, "unit term");
        vector = UnitVector::basis(index)
            .scale(term.exponent)
            .and_then(|t| vector.add(&t))
            .filter(UnitVector::is_bounded)
            .ok_or_else(|| {
                debug!(expression = expr, token = atom, "unit exponent out of range");
                ParseError::malformed(expr, format!("exponent of '{}' out of range", atom))
            })?;
    }
    Ok(vector)
}

/// Parse a dimension expression over category symbols or names
///
/// "F", "M.L.T^-2" and "force" all reduce to the same base vector.
pub fn parse_dimension(expr: &str) -> Result<Dimension, ParseError> {
    let terms = split_terms(expr)?;

    let mut dimension = Dimension::DIMENSIONLESS;
    for term in terms {
        let Some(atom) = term.atom else { continue };
        let category = CATEGORIES.get(atom).ok_or_else(|| {
            debug!(expression = expr, token = atom, "unknown dimension");
            ParseError::UnknownUnit(atom.to_string())
        })?;
        dimension = dimension.multiply(&category.dimension.power(term.exponent));
    }
    Ok(dimension)
}

/// Split an expression into syntactically valid terms
fn split_terms(expr: &str) -> Result<Vec<Term<'_>>, ParseError> {
    if expr.trim().is_empty() {
        debug!("empty unit expression");
        return Err(ParseError::malformed(expr, "empty expression"));
    }

    expr.split(SEPARATOR)
        .map(|raw| {
            parse_term(raw.trim()).map_err(|reason| {
                debug!(expression = expr, term = raw, reason = %reason, "malformed unit expression");
                ParseError::malformed(expr, reason)
            })
        })
        .collect()
}

fn parse_term(term: &str) -> Result<Term<'_>, String> {
    if term.is_empty() {
        return Err("empty term, misplaced separator".to_string());
    }

    let (atom, exponent) = match term.split_once(CARET) {
        Some((atom, exp)) => {
            let atom = atom.trim();
            let exp = exp.trim();
            if exp.contains(CARET) {
                return Err(format!("more than one '^' in term '{}'", term));
            }
            if atom.ends_with(superscript::is_superscript) {
                return Err(format!("term '{}' has two exponents", term));
            }
            let exponent = exp
                .parse::<Exponent>()
                .map_err(|e| format!("bad exponent in term '{}': {}", term, e))?;
            (atom, exponent)
        }
        None => {
            let (atom, sup) = superscript::split_trailing(term);
            let exponent = if sup.is_empty() {
                Exponent::ONE
            } else {
                Exponent::from_superscript(sup)
                    .map_err(|e| format!("bad exponent in term '{}': {}", term, e))?
            };
            (atom.trim_end(), exponent)
        }
    };

    if atom.is_empty() {
        return Err(format!("missing unit before exponent in term '{}'", term));
    }
    if atom == UNITLESS_TERM {
        return Ok(Term { atom: None, exponent });
    }
    if atom.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("unexpected number '{}'", atom));
    }

    Ok(Term { atom: Some(atom), exponent })
}
