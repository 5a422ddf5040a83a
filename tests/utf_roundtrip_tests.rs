//! Property tests for the Unicode codec invariants.

mod common;

use common::convert_all;
use proptest::prelude::*;

proptest! {
    /// Decoding and re-encoding in the same form is the identity.
    #[test]
    fn prop_utf8_identity(text in any::<String>()) {
        let bytes = text.as_bytes();
        let output = convert_all("UTF-8", "UTF-8", bytes).unwrap();
        prop_assert_eq!(output.as_slice(), bytes);
    }

    /// A full trip through every form preserves the scalar sequence.
    #[test]
    fn prop_cross_utf_lossless(text in any::<String>()) {
        let utf8 = text.as_bytes();
        let utf16 = convert_all("UTF-16", "UTF-8", utf8).unwrap();
        let utf32 = convert_all("UTF-32", "UTF-16", &utf16).unwrap();
        let back = convert_all("UTF-8", "UTF-32", &utf32).unwrap();
        prop_assert_eq!(back.as_slice(), utf8);
    }

    /// The UTF-16 encoder agrees with the standard library's.
    #[test]
    fn prop_utf16_matches_std(text in any::<String>()) {
        let expected: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let actual = convert_all("UTF-16", "UTF-8", text.as_bytes()).unwrap();
        prop_assert_eq!(actual, expected);
    }

    /// The UTF-32 encoder agrees with a per-char widening.
    #[test]
    fn prop_utf32_matches_std(text in any::<String>()) {
        let expected: Vec<u8> = text.chars().flat_map(|ch| u32::from(ch).to_le_bytes()).collect();
        let actual = convert_all("UTF-32", "UTF-8", text.as_bytes()).unwrap();
        prop_assert_eq!(actual, expected);
    }

    /// Any scalar survives UTF-32 -> UTF-8 -> UTF-16 -> UTF-32.
    #[test]
    fn prop_single_scalar_round_trip(ch in any::<char>()) {
        let utf32: Vec<u8> = u32::from(ch).to_le_bytes().to_vec();
        let utf8 = convert_all("UTF-8", "UTF-32", &utf32).unwrap();
        let utf16 = convert_all("UTF-16", "UTF-8", &utf8).unwrap();
        let back = convert_all("UTF-32", "UTF-16", &utf16).unwrap();
        prop_assert_eq!(back, utf32);
    }
}

#[test]
fn test_supplementary_plane_edges() {
    for scalar in [0x10000u32, 0x1F600, 0x10FFFF] {
        let utf32: Vec<u8> = scalar.to_le_bytes().to_vec();
        let utf8 = convert_all("UTF-8", "UTF-32", &utf32).unwrap();
        let utf16 = convert_all("UTF-16", "UTF-8", &utf8).unwrap();
        let back = convert_all("UTF-32", "UTF-16", &utf16).unwrap();
        assert_eq!(back, utf32, "U+{scalar:04X} failed the round trip");
    }
}

#[test]
fn test_bmp_boundary_edges() {
    // The scalars either side of the surrogate gap and the BMP ceiling.
    for scalar in [0xD7FFu32, 0xE000, 0xFFFD] {
        let utf32: Vec<u8> = scalar.to_le_bytes().to_vec();
        let utf16 = convert_all("UTF-16", "UTF-32", &utf32).unwrap();
        let back = convert_all("UTF-32", "UTF-16", &utf16).unwrap();
        assert_eq!(back, utf32, "U+{scalar:04X} failed the round trip");
    }
}
