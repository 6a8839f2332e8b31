//! Marker-driven reordering: pre-base vowel signs and reph relocation.
//!
//! All scans walk codepoints, not bytes, so cluster boundaries stay correct
//! regardless of how many bytes a Devanagari character occupies.

use crate::unicode;

use super::{ANUSVARA_SUFFIX, REPH_MARKER, SIGN_MARKER};

/// Move every pre-base vowel sign after its base character.
///
/// `fa` + X rewrites to X + ि + ं before the plain `f` + X rule runs
/// (longest pattern first, or the one-unit rule would consume the `a`).
/// A trailing marker with no base character passes through unchanged, so
/// re-applying this pass to its own output is a no-op.
pub(crate) fn move_vowel_signs(text: &str) -> String {
    let text = rewrite_marker_pairs(text, true);
    rewrite_marker_pairs(&text, false)
}

fn rewrite_marker_pairs(text: &str, with_anusvara: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == SIGN_MARKER {
            if with_anusvara {
                if i + 2 < chars.len() && chars[i + 1] == ANUSVARA_SUFFIX {
                    out.push(chars[i + 2]);
                    out.push(unicode::SIGN_I);
                    out.push(unicode::ANUSVARA);
                    i += 3;
                    continue;
                }
            } else if i + 1 < chars.len() {
                out.push(chars[i + 1]);
                out.push(unicode::SIGN_I);
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Swap a relocated ि that landed before a virama: ि + ् + X becomes
/// ् + X + ि, so conjunct stems keep their joiner ahead of the vowel sign.
/// Repeated until no collision remains.
pub(crate) fn fix_halant_collisions(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = swap_sign_virama(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn swap_sign_virama(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i] == unicode::SIGN_I && chars[i + 1] == unicode::VIRAMA {
            out.push(unicode::VIRAMA);
            out.push(chars[i + 2]);
            out.push(unicode::SIGN_I);
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Drop a virama directly before the reph marker: the marker's replacement
/// carries its own joiner, so the virama is an artifact of the sign moves.
pub(crate) fn strip_joiner_before_reph(text: &str) -> String {
    text.replace("्Z", "Z")
}

/// Move each reph marker's र् to the front of its consonant cluster.
///
/// The cluster is the character directly before the marker plus the run of
/// dependent vowel signs preceding it; the backward scan stops on the first
/// non-sign character (the base), clamped to the start of the text. Every
/// marker in the text is relocated, one occurrence per iteration; a marker
/// with nothing before it degrades to a bare र्.
pub(crate) fn relocate_reph(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    while let Some(z) = chars.iter().position(|&c| c == REPH_MARKER) {
        let mut start = z;
        if start > 0 {
            start -= 1;
            while start > 0 && unicode::is_vowel_sign(chars[start]) {
                start -= 1;
            }
        }
        chars.remove(z);
        chars.splice(start..start, [unicode::RA, unicode::VIRAMA]);
    }
    chars.into_iter().collect()
}
