//! Turkish diacritic transliteration.

use std::borrow::Cow;

/// Turkish letters folded to their ASCII base letter, both cases.
const TURKISH_TO_ASCII: [(char, char); 12] = [
    ('ş', 's'),
    ('ı', 'i'),
    ('ç', 'c'),
    ('ü', 'u'),
    ('ö', 'o'),
    ('ğ', 'g'),
    ('Ş', 'S'),
    ('İ', 'I'),
    ('Ç', 'C'),
    ('Ü', 'U'),
    ('Ö', 'O'),
    ('Ğ', 'G'),
];

fn lookup(c: char) -> Option<char> {
    TURKISH_TO_ASCII
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Replaces every character found in the table with its ASCII equivalent.
///
/// Borrows the input unchanged when nothing needs replacing.
pub fn transliterate(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| lookup(c).is_some()) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.chars().map(|c| lookup(c).unwrap_or(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_letters() {
        assert_eq!(transliterate("şöğüçı"), "soguci");
    }

    #[test]
    fn uppercase_letters() {
        assert_eq!(transliterate("ŞÖĞÜÇİ"), "SOGUCI");
    }

    #[test]
    fn dotted_capital_i() {
        assert_eq!(transliterate("İstanbul"), "Istanbul");
    }

    #[test]
    fn untouched_input_is_borrowed() {
        assert!(matches!(transliterate("team logo"), Cow::Borrowed(_)));
    }

    #[test]
    fn other_accents_are_left_alone() {
        assert_eq!(transliterate("café"), "café");
    }
}
