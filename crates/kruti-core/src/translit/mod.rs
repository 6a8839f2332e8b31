//! Legacy-glyph to Unicode Devanagari conversion.
//!
//! The legacy encoding stores glyphs in visual order (a pre-base vowel sign
//! precedes the consonant it follows phonetically); Unicode wants logical
//! order. Conversion runs as an ordered sequence of whole-text passes:
//! table substitution, marker reordering, halant fix-ups, reph relocation,
//! detached-mark reattachment and conjunct normalization. Every pass depends
//! on the output of the previous one.

mod cleanup;
mod reorder;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::mapping::MappingTable;

/// Pre-base vowel-sign marker: `f` followed by a base character X becomes
/// X + ि.
pub(crate) const SIGN_MARKER: char = 'f';
/// Suffix turning the sign marker into its anusvara-carrying variant:
/// `fa` + X becomes X + ि + ं.
pub(crate) const ANUSVARA_SUFFIX: char = 'a';
/// Reph relocation marker: trails the consonant-vowel cluster that must gain
/// a leading र्.
pub(crate) const REPH_MARKER: char = 'Z';

/// Convert legacy-encoded text to Unicode Devanagari.
///
/// Total over its input: unmapped characters pass through unchanged, the
/// empty string converts to the empty string, and truncated legacy sequences
/// degrade to best-effort output. Never panics, never touches external
/// resources.
pub fn convert(input: &str) -> String {
    let _span = debug_span!("convert", chars = input.chars().count()).entered();

    let table = MappingTable::global();
    let text = substitute(input, table);
    let text = reorder::move_vowel_signs(&text);
    let text = reorder::fix_halant_collisions(&text);
    let text = reorder::strip_joiner_before_reph(&text);
    let text = reorder::relocate_reph(&text);
    let text = cleanup::reattach_detached_marks(&text);
    cleanup::normalize_conjuncts(&text)
}

/// [`convert`], returned as the UTF-8 byte sequence handed to presentation
/// consumers.
pub fn convert_to_bytes(input: &str) -> Vec<u8> {
    convert(input).into_bytes()
}

/// Apply the mapping table: every single-unit rule in order, then every
/// compound rule in order.
fn substitute(input: &str, table: &MappingTable) -> String {
    let mut text = input.to_string();
    for rule in table.single.iter().chain(table.compound.iter()) {
        text = text.replace(&rule.legacy, &rule.out);
    }
    text
}
