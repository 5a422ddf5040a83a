//! End-to-end MARC-8 decoding across the supported character sets.

mod common;

use common::convert_all;

fn marc8_to_string(input: &[u8]) -> String {
    let bytes = convert_all("UTF-8", "MARC-8", input).expect("conversion failed");
    String::from_utf8(bytes).expect("output was not UTF-8")
}

#[test]
fn test_ascii_passes_through() {
    assert_eq!(marc8_to_string(b"The Great Gatsby / 1925"), "The Great Gatsby / 1925");
}

#[test]
fn test_ansel_diacritics_follow_their_base() {
    // Grave before 'a', acute before 'e': "à la résistance" minus the
    // accents MARC-8 never needed.
    assert_eq!(marc8_to_string(b"\xE1a la r\xE2esistance"), "a\u{300} la re\u{301}sistance");
}

#[test]
fn test_ansel_double_diacritic_stack() {
    // Dot below arrives first, circumflex second; Unicode wants the base,
    // then the circumflex, then the dot below.
    assert_eq!(marc8_to_string(b"\xF2\xE3o"), "o\u{302}\u{323}");
}

#[test]
fn test_hebrew_designated_to_g1() {
    // "שלום" through GR after shifting G1 to Basic Hebrew.
    assert_eq!(
        marc8_to_string(b"\x1B)2\xF9\xEC\xE5\xED"),
        "\u{5e9}\u{5dc}\u{5d5}\u{5dd}"
    );
}

#[test]
fn test_hebrew_point_combines_with_letter() {
    // Patah before bet.
    assert_eq!(marc8_to_string(b"\x1B(2\x47\x61"), "\u{5d1}\u{5b7}");
}

#[test]
fn test_cyrillic_designated_to_g0() {
    // "мир" in the KOI-7 uppercase positions, then back to ASCII.
    assert_eq!(marc8_to_string(b"\x1B(NMIR\x1B(B!"), "\u{43c}\u{438}\u{440}!");
}

#[test]
fn test_extended_cyrillic_letters() {
    assert_eq!(marc8_to_string(b"\x1B(Q\x26\x27"), "\u{456}\u{457}");
}

#[test]
fn test_arabic_letters_and_digits() {
    // Alef, lam, then two Arabic-Indic digits.
    assert_eq!(
        marc8_to_string(b"\x1B(3\x47\x64\x31\x32"),
        "\u{627}\u{644}\u{661}\u{662}"
    );
}

#[test]
fn test_arabic_shadda_combines() {
    // Shadda precedes the beh it doubles.
    assert_eq!(marc8_to_string(b"\x1B(3\x71\x48"), "\u{628}\u{651}");
}

#[test]
fn test_extended_arabic_persian_letters() {
    assert_eq!(marc8_to_string(b"\x1B(4\x42\x46"), "\u{67e}\u{698}");
}

#[test]
fn test_greek_with_breathing_marks() {
    // Dasia before alpha: rough breathing over the vowel.
    assert_eq!(marc8_to_string(b"\x1B(S\x26\x61"), "\u{3b1}\u{314}");
}

#[test]
fn test_greek_symbols_shortcut() {
    assert_eq!(marc8_to_string(b"\x1Bgb\x1Bs-decay"), "\u{3b2}-decay");
}

#[test]
fn test_chemistry_subscripts() {
    assert_eq!(marc8_to_string(b"H\x1Bb2\x1BsO"), "H\u{2082}O");
}

#[test]
fn test_math_superscripts() {
    assert_eq!(marc8_to_string(b"E = mc\x1Bp2"), "E = mc\u{b2}");
}

#[test]
fn test_eacc_punctuation_run() {
    assert_eq!(
        marc8_to_string(b"\x1B$1\x21\x23\x28\x21\x23\x29\x21\x23\x2E"),
        "\u{ff08}\u{ff09}\u{3002}"
    );
}

#[test]
fn test_eacc_then_latin_resumes() {
    assert_eq!(
        marc8_to_string(b"\x1B$1\x21\x23\x20\x1B(BJapan"),
        "\u{3000}Japan"
    );
}

#[test]
fn test_mixed_scripts_in_one_field() {
    // Latin title, Hebrew parallel title through G1, Latin again.
    let input = b"Torah = \x1B)2\xFA\xE5\xF8\xE4\x1B)!E : scroll";
    assert_eq!(
        marc8_to_string(input),
        "Torah = \u{5ea}\u{5d5}\u{5e8}\u{5d4} : scroll"
    );
}

#[test]
fn test_non_sorting_zone_controls() {
    let output = convert_all("UTF-8", "MARC-8", &[0x88, b'T', b'h', b'e', 0x89, b' ', b'X']).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "\u{98}The\u{9c} X");
}

#[test]
fn test_marc8_to_utf16_and_utf32_targets() {
    // The decoder feeds any Unicode encoder.
    let utf16 = convert_all("UTF-16", "MARC-8", b"Caf\xE2e").unwrap();
    assert_eq!(
        utf16,
        [0x43, 0x00, 0x61, 0x00, 0x66, 0x00, 0x65, 0x00, 0x01, 0x03]
    );

    let utf32 = convert_all("UTF-32", "MARC-8", b"\x1B$1\x21\x23\x20").unwrap();
    assert_eq!(utf32, [0x00, 0x30, 0x00, 0x00]);
}
