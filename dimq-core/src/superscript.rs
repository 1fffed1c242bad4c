//! Unicode superscript exponents ("m²", "s⁻¹", "m³ᐟ²")

const PAIRS: [(char, char); 12] = [
    ('0', '⁰'), ('1', '¹'), ('2', '²'), ('3', '³'), ('4', '⁴'),
    ('5', '⁵'), ('6', '⁶'), ('7', '⁷'), ('8', '⁸'), ('9', '⁹'),
    ('-', '⁻'), ('/', 'ᐟ'),
];

/// Map an ASCII exponent ("-3/2") to superscript ("⁻³ᐟ²")
pub fn render(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| PAIRS.iter().find(|(a, _)| *a == c).map(|(_, s)| *s).unwrap_or(c))
        .collect()
}

/// Map a superscript exponent back to ASCII; `None` if any char is not a superscript
pub fn read(sup: &str) -> Option<String> {
    sup.chars()
        .map(|c| PAIRS.iter().find(|(_, s)| *s == c).map(|(a, _)| *a))
        .collect()
}

pub fn is_superscript(c: char) -> bool {
    PAIRS.iter().any(|(_, s)| *s == c)
}

/// Split a term into its base and trailing superscript run: "m⁻²" -> ("m", "⁻²")
pub fn split_trailing(term: &str) -> (&str, &str) {
    let start = term
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_superscript(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(term.len());
    term.split_at(start)
}
