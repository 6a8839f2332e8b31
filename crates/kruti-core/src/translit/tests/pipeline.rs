//! End-to-end conversion through the full pass sequence.

use crate::translit::{convert, convert_to_bytes};

#[test]
fn test_convert_empty() {
    assert_eq!(convert(""), "");
    assert!(convert_to_bytes("").is_empty());
}

#[test]
fn test_unmapped_passthrough() {
    // None of these characters carry a mapping or a marker role.
    assert_eq!(convert("mnop."), "mnop.");
}

#[test]
fn test_unicode_input_passthrough() {
    // Already-converted Devanagari survives a second run untouched.
    assert_eq!(convert("नमस्ते"), "नमस्ते");
}

#[test]
fn test_direct_mapping() {
    assert_eq!(convert("Æ"), "क");
    assert_eq!(convert("DçKç"), "अख");
}

#[test]
fn test_two_unit_pattern_beats_bare_cedilla() {
    // "Dç" must map as one unit, not as unmapped "D" plus deleted "ç".
    assert_eq!(convert("Dç"), "अ");
    assert_eq!(convert("ç"), "");
}

#[test]
fn test_prebase_sign_reordered_after_base() {
    // Visual order marker+base becomes logical order base+sign.
    assert_eq!(convert("fÆ"), "कि");
}

#[test]
fn test_anusvara_variant() {
    assert_eq!(convert("Çन"), "निं");
    assert_eq!(convert("¯न"), "निं");
}

#[test]
fn test_halant_collision_fixed() {
    // Legacy sign + half-form त् + न: the relocated ि must land after the
    // whole त्न conjunct, behind its joiner.
    assert_eq!(convert("fÀन"), "त्नि");
}

#[test]
fn test_reph_relocated_to_cluster_front() {
    assert_eq!(convert("क±"), "र्कं");
    assert_eq!(convert("ÆÊ"), "र्की");
}

#[test]
fn test_reph_after_explicit_joiner() {
    // The ब् half-form's virama is redundant before the reph marker.
    assert_eq!(convert("y±"), "र्बं");
}

#[test]
fn test_multiple_reph_clusters() {
    assert_eq!(convert("क±ग±"), "र्कंर्गं");
}

#[test]
fn test_detached_sign_after_space() {
    assert_eq!(convert("क ा"), "का");
}

#[test]
fn test_detached_sign_after_comma() {
    assert_eq!(convert("क,ा"), "का,");
}

#[test]
fn test_detached_sign_after_virama() {
    assert_eq!(convert("क्ा"), "का");
}

#[test]
fn test_dangling_virama_before_space() {
    assert_eq!(convert("À ब"), "त ब");
}

#[test]
fn test_truncated_marker_degrades() {
    // A marker with no following base has nothing to reorder.
    assert_eq!(convert("f"), "f");
}

#[test]
fn test_bytes_are_utf8_of_convert() {
    let text = "fÆ क±";
    assert_eq!(convert_to_bytes(text), convert(text).into_bytes());
}
