//! Atomic unit definitions - every elementary (non-decomposed) unit
//!
//! Declaration order matters for display: units of a single base dimension
//! come first (in base order), derived units follow from simple to complex.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::dimension::{Dimension, BASE_COUNT};
use crate::vector::UnitVector;

/// An elementary unit with its SI scale and optional affine offset
///
/// `value_si = value * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicUnit {
    /// The unit symbol (e.g., "m", "kg", "°C")
    pub symbol: &'static str,
    /// The unit name (e.g., "metre", "kilogram", "degree Celsius")
    pub name: &'static str,
    /// The dimensional signature
    pub dimension: Dimension,
    /// Factor to the coherent SI unit of the same dimension
    pub scale: f64,
    /// Zero-point offset, nonzero only for temperature scales
    pub offset: f64,
    /// Whether this is a coherent SI unit
    pub is_si: bool,
}

impl AtomicUnit {
    const fn si(symbol: &'static str, name: &'static str, dimension: Dimension) -> Self {
        AtomicUnit { symbol, name, dimension, scale: 1.0, offset: 0.0, is_si: true }
    }

    const fn scaled(symbol: &'static str, name: &'static str, dimension: Dimension, scale: f64) -> Self {
        AtomicUnit { symbol, name, dimension, scale, offset: 0.0, is_si: false }
    }

    const fn affine(symbol: &'static str, name: &'static str, dimension: Dimension, scale: f64, offset: f64) -> Self {
        AtomicUnit { symbol, name, dimension, scale, offset, is_si: false }
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Whether the unit measures exactly one base dimension
    pub fn is_primary(&self) -> bool {
        self.dimension.base_index().is_some()
    }
}

const ATOMIC_UNIT_TABLE: &[AtomicUnit] = &[
    // Mass
    AtomicUnit::si("kg", "kilogram", Dimension::MASS),
    AtomicUnit::scaled("g", "gram", Dimension::MASS, 1e-3),
    AtomicUnit::scaled("Da", "dalton", Dimension::MASS, 1.66053906660e-27),
    AtomicUnit::scaled("m_e", "electron mass", Dimension::MASS, 9.1093837015e-31),
    AtomicUnit::scaled("t", "tonne", Dimension::MASS, 1e3),
    AtomicUnit::scaled("lb", "pound", Dimension::MASS, 0.45359237),

    // Length
    AtomicUnit::si("m", "metre", Dimension::LENGTH),
    AtomicUnit::scaled("Å", "angstrom", Dimension::LENGTH, 1e-10),
    AtomicUnit::scaled("a0", "bohr radius", Dimension::LENGTH, 5.29177210903e-11),
    AtomicUnit::scaled("cm", "centimetre", Dimension::LENGTH, 1e-2),
    AtomicUnit::scaled("mm", "millimetre", Dimension::LENGTH, 1e-3),
    AtomicUnit::scaled("μm", "micrometre", Dimension::LENGTH, 1e-6),
    AtomicUnit::scaled("nm", "nanometre", Dimension::LENGTH, 1e-9),
    AtomicUnit::scaled("pm", "picometre", Dimension::LENGTH, 1e-12),
    AtomicUnit::scaled("fm", "femtometre", Dimension::LENGTH, 1e-15),
    AtomicUnit::scaled("am", "attometre", Dimension::LENGTH, 1e-18),
    AtomicUnit::scaled("km", "kilometre", Dimension::LENGTH, 1e3),
    AtomicUnit::scaled("in", "inch", Dimension::LENGTH, 0.0254),
    AtomicUnit::scaled("ft", "foot", Dimension::LENGTH, 0.3048),
    AtomicUnit::scaled("mi", "mile", Dimension::LENGTH, 1609.344),

    // Time
    AtomicUnit::si("s", "second", Dimension::TIME),
    AtomicUnit::scaled("cs", "centisecond", Dimension::TIME, 1e-2),
    AtomicUnit::scaled("ms", "millisecond", Dimension::TIME, 1e-3),
    AtomicUnit::scaled("μs", "microsecond", Dimension::TIME, 1e-6),
    AtomicUnit::scaled("ns", "nanosecond", Dimension::TIME, 1e-9),
    AtomicUnit::scaled("ps", "picosecond", Dimension::TIME, 1e-12),
    AtomicUnit::scaled("fs", "femtosecond", Dimension::TIME, 1e-15),
    AtomicUnit::scaled("as", "attosecond", Dimension::TIME, 1e-18),
    AtomicUnit::scaled("min", "minute", Dimension::TIME, 60.0),
    AtomicUnit::scaled("h", "hour", Dimension::TIME, 3600.0),
    AtomicUnit::scaled("d", "day", Dimension::TIME, 86400.0),

    // Electric current
    AtomicUnit::si("A", "ampere", Dimension::CURRENT),
    AtomicUnit::scaled("mA", "milliampere", Dimension::CURRENT, 1e-3),

    // Temperature: K = C + 273.15, K = (F + 459.67) * 5/9
    AtomicUnit::si("K", "kelvin", Dimension::TEMPERATURE),
    AtomicUnit::affine("°C", "degree Celsius", Dimension::TEMPERATURE, 1.0, 273.15),
    AtomicUnit::affine("°F", "degree Fahrenheit", Dimension::TEMPERATURE, 0.5555555555555556, 255.37222222222223),
    AtomicUnit::scaled("°R", "degree Rankine", Dimension::TEMPERATURE, 0.5555555555555556),

    // Amount of substance
    AtomicUnit::si("mol", "mole", Dimension::AMOUNT),
    AtomicUnit::scaled("mmol", "millimole", Dimension::AMOUNT, 1e-3),

    // Luminous intensity
    AtomicUnit::si("cd", "candela", Dimension::LUMINOSITY),

    // Angle
    AtomicUnit::si("rad", "radian", Dimension::ANGLE),
    AtomicUnit::scaled("deg", "degree", Dimension::ANGLE, 0.017453292519943295),

    // Derived units, simple to complex
    AtomicUnit::si("Hz", "hertz", Dimension::FREQUENCY),
    AtomicUnit::si("Pa", "pascal", Dimension::PRESSURE),
    AtomicUnit::scaled("bar", "bar", Dimension::PRESSURE, 1e5),
    AtomicUnit::scaled("atm", "standard atmosphere", Dimension::PRESSURE, 101325.0),
    AtomicUnit::si("C", "coulomb", Dimension::CHARGE),
    AtomicUnit::scaled("e", "elementary charge", Dimension::CHARGE, 1.602176634e-19),
    AtomicUnit::si("N", "newton", Dimension::FORCE),
    AtomicUnit::scaled("dyn", "dyne", Dimension::FORCE, 1e-5),
    AtomicUnit::si("J", "joule", Dimension::ENERGY),
    AtomicUnit::scaled("kcal", "kilocalorie", Dimension::ENERGY, 4184.0),
    AtomicUnit::scaled("cal", "calorie", Dimension::ENERGY, 4.184),
    AtomicUnit::scaled("eV", "electronvolt", Dimension::ENERGY, 1.602176634e-19),
    AtomicUnit::scaled("E_h", "hartree", Dimension::ENERGY, 4.3597447222071e-18),
    AtomicUnit::si("W", "watt", Dimension::POWER),
    AtomicUnit::si("V", "volt", Dimension::VOLTAGE),
    AtomicUnit::si("Ω", "ohm", Dimension::RESISTANCE),
    AtomicUnit::scaled("L", "litre", Dimension::VOLUME, 1e-3),
];

/// Number of registered atomic units (the length of every `UnitVector`)
pub const ATOM_COUNT: usize = ATOMIC_UNIT_TABLE.len();

/// Slot of the SI unit of each base dimension, in base order
const SI_BASE: [usize; BASE_COUNT] = [
    si_slot("kg"),
    si_slot("m"),
    si_slot("s"),
    si_slot("A"),
    si_slot("K"),
    si_slot("mol"),
    si_slot("cd"),
    si_slot("rad"),
];

/// Table slot of an SI atom, resolved at compile time
const fn si_slot(symbol: &str) -> usize {
    let mut i = 0;
    while i < ATOMIC_UNIT_TABLE.len() {
        let atom = &ATOMIC_UNIT_TABLE[i];
        if bytes_eq(atom.symbol.as_bytes(), symbol.as_bytes()) {
            assert!(atom.is_si, "SI base slot names a non-SI unit");
            return i;
        }
        i += 1;
    }
    panic!("SI base unit missing from the atomic unit table");
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all atomic units
pub struct UnitRegistry {
    index: HashMap<&'static str, usize>,
    si_equivalents: Vec<UnitVector>,
    primary_count: usize,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut index = HashMap::new();
        for (i, atom) in ATOMIC_UNIT_TABLE.iter().enumerate() {
            index.entry(atom.symbol).or_insert(i);
            index.entry(atom.name).or_insert(i);
        }

        let si_equivalents = ATOMIC_UNIT_TABLE
            .iter()
            .enumerate()
            .map(|(i, atom)| {
                if atom.is_si {
                    return UnitVector::basis(i);
                }
                match find_si(&atom.dimension) {
                    Some(j) => UnitVector::basis(j),
                    None => primary_vector(&atom.dimension),
                }
            })
            .collect();

        let primary_count = ATOMIC_UNIT_TABLE
            .iter()
            .position(|a| !a.is_primary())
            .unwrap_or(ATOM_COUNT);

        UnitRegistry { index, si_equivalents, primary_count }
    }

    /// All atomic units, in declaration order
    pub fn all(&self) -> &'static [AtomicUnit] {
        ATOMIC_UNIT_TABLE
    }

    pub fn len(&self) -> usize {
        ATOM_COUNT
    }

    pub fn is_empty(&self) -> bool {
        ATOM_COUNT == 0
    }

    /// Atomic unit at a registry slot
    pub fn atom(&self, index: usize) -> &'static AtomicUnit {
        &ATOMIC_UNIT_TABLE[index]
    }

    /// Registry slot of a symbol or name (exact, case-sensitive)
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Get a unit by symbol or name
    pub fn get(&self, token: &str) -> Option<&'static AtomicUnit> {
        self.index_of(token).map(|i| self.atom(i))
    }

    /// Number of leading atoms that measure a single base dimension
    pub fn primary_count(&self) -> usize {
        self.primary_count
    }

    /// Slot of the SI unit of base dimension `base`
    pub fn si_base(&self, base: usize) -> usize {
        SI_BASE[base]
    }

    /// SI equivalent of the atom at `index`, as a unit vector of SI atoms
    pub fn si_equivalent(&self, index: usize) -> &UnitVector {
        &self.si_equivalents[index]
    }

    /// `dimension` expressed purely in SI base units
    pub fn si_primary(&self, dimension: &Dimension) -> UnitVector {
        primary_vector(dimension)
    }

    /// The named SI unit of `dimension` if one exists, else its SI base expansion
    pub fn si_for(&self, dimension: &Dimension) -> UnitVector {
        match find_si(dimension) {
            Some(j) => UnitVector::basis(j),
            None => self.si_primary(dimension),
        }
    }

    /// Supported (symbol, name) pairs
    pub fn supported(&self) -> Vec<(&'static str, &'static str)> {
        ATOMIC_UNIT_TABLE.iter().map(|a| (a.symbol, a.name)).collect()
    }
}

fn find_si(dimension: &Dimension) -> Option<usize> {
    ATOMIC_UNIT_TABLE.iter().position(|a| a.is_si && a.dimension == *dimension)
}

fn primary_vector(dimension: &Dimension) -> UnitVector {
    UnitVector::from_terms(
        dimension
            .exponents
            .iter()
            .enumerate()
            .map(|(base, e)| (SI_BASE[base], *e)),
    )
}
