//! Character-level classification for Devanagari output text.

/// Virama (halant) — suppresses a consonant's inherent vowel.
pub const VIRAMA: char = '\u{094D}';
/// Anusvara — the nasalization dot.
pub const ANUSVARA: char = '\u{0902}';
/// The consonant ra, whose cluster-initial form is the reph.
pub const RA: char = '\u{0930}';
/// The short-i dependent vowel sign, rendered before its base consonant.
pub const SIGN_I: char = '\u{093F}';

/// The dependent vowel signs (matras) the legacy encoding can emit.
pub const VOWEL_SIGNS: [char; 15] = [
    'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'ॄ', 'ॅ', 'ॆ', 'े', 'ै', 'ॉ', 'ॊ', 'ो', 'ौ',
];

/// Marks the legacy font renders with padding, so they can end up detached
/// from their base: the vowel signs plus the virama.
pub const DETACHABLE_MARKS: [char; 16] = [
    'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'ॄ', 'ॅ', 'ॆ', 'े', 'ै', 'ॉ', 'ॊ', 'ो', 'ौ', '\u{094D}',
];

pub fn is_vowel_sign(c: char) -> bool {
    VOWEL_SIGNS.contains(&c)
}

/// Check the Devanagari block (U+0900..U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_vowel_sign() {
        assert!(is_vowel_sign('ा'));
        assert!(is_vowel_sign('ि'));
        assert!(is_vowel_sign('ौ'));
        assert!(!is_vowel_sign(VIRAMA));
        assert!(!is_vowel_sign('क'));
        assert!(!is_vowel_sign('a'));
    }

    #[test]
    fn test_detachable_marks_superset() {
        for sign in VOWEL_SIGNS {
            assert!(DETACHABLE_MARKS.contains(&sign));
        }
        assert!(DETACHABLE_MARKS.contains(&VIRAMA));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_devanagari('क'));
        assert!(is_devanagari(VIRAMA));
        assert!(is_devanagari(ANUSVARA));
        assert!(!is_devanagari('k'));
        assert!(!is_devanagari('Æ'));
    }
}
