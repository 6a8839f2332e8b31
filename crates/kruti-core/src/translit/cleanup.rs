//! Final fix-ups: reattach padded marks and normalize conjunct joiners.

use crate::unicode;

/// Reattach marks the legacy font rendered with padding.
///
/// A dependent vowel sign (or virama) after a space belongs to the preceding
/// consonant; after a comma, the comma moves behind the sign; after a virama,
/// the sign implies its own joiner and the virama is dropped.
pub(crate) fn reattach_detached_marks(text: &str) -> String {
    let mut text = text.to_string();
    for mark in unicode::DETACHABLE_MARKS {
        text = text.replace(&format!(" {mark}"), &mark.to_string());
        text = text.replace(&format!(",{mark}"), &format!("{mark},"));
        text = text.replace(&format!("{}{mark}", unicode::VIRAMA), &mark.to_string());
    }
    text
}

/// Collapse joiner sequences the earlier passes can leave behind:
/// ् ् र → ् र, then ् र ् → र ्, then any remaining ् ् → ्, and a
/// dangling ् before a space is dropped.
pub(crate) fn normalize_conjuncts(text: &str) -> String {
    let text = text.replace("््र", "्र");
    let text = text.replace("्र्", "र्");
    let text = text.replace("््", "्");
    text.replace("् ", " ")
}
