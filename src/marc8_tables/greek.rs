//! The Basic Greek and Greek Symbols character sets.
//!
//! Basic: <https://www.loc.gov/marc/specifications/codetables/BasicGreek.html>
//! Symbols: <https://www.loc.gov/marc/specifications/codetables/GreekSymbols.html>

use super::{c, graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static BASIC_GRAPHICS: GraphicSet = graphic(&[
    // Accents and breathings, written before the letter they modify
    (0x21, c(0x0300)), // varia
    (0x22, c(0x0301)), // oxia
    (0x23, c(0x0308)), // dialytika
    (0x24, c(0x0342)), // perispomeni
    (0x25, c(0x0313)), // psili
    (0x26, c(0x0314)), // dasia
    (0x27, c(0x0345)), // ypogegrammeni
    (0x2C, n(0x002C)),
    (0x2D, n(0x002D)),
    (0x2E, n(0x002E)),
    (0x30, n(0x0030)),
    (0x31, n(0x0031)),
    (0x32, n(0x0032)),
    (0x33, n(0x0033)),
    (0x34, n(0x0034)),
    (0x35, n(0x0035)),
    (0x36, n(0x0036)),
    (0x37, n(0x0037)),
    (0x38, n(0x0038)),
    (0x39, n(0x0039)),
    (0x3B, n(0x0387)), // ano teleia
    (0x3F, n(0x037E)), // greek question mark
    // Capital letters
    (0x41, n(0x0391)),
    (0x42, n(0x0392)),
    (0x43, n(0x0393)),
    (0x44, n(0x0394)),
    (0x45, n(0x0395)),
    (0x46, n(0x0396)),
    (0x47, n(0x0397)),
    (0x48, n(0x0398)),
    (0x49, n(0x0399)),
    (0x4A, n(0x039A)),
    (0x4B, n(0x039B)),
    (0x4C, n(0x039C)),
    (0x4D, n(0x039D)),
    (0x4E, n(0x039E)),
    (0x4F, n(0x039F)),
    (0x50, n(0x03A0)),
    (0x51, n(0x03A1)),
    (0x52, n(0x03A3)),
    (0x53, n(0x03A4)),
    (0x54, n(0x03A5)),
    (0x55, n(0x03A6)),
    (0x56, n(0x03A7)),
    (0x57, n(0x03A8)),
    (0x58, n(0x03A9)),
    // Small letters, final sigma before sigma
    (0x61, n(0x03B1)),
    (0x62, n(0x03B2)),
    (0x63, n(0x03B3)),
    (0x64, n(0x03B4)),
    (0x65, n(0x03B5)),
    (0x66, n(0x03B6)),
    (0x67, n(0x03B7)),
    (0x68, n(0x03B8)),
    (0x69, n(0x03B9)),
    (0x6A, n(0x03BA)),
    (0x6B, n(0x03BB)),
    (0x6C, n(0x03BC)),
    (0x6D, n(0x03BD)),
    (0x6E, n(0x03BE)),
    (0x6F, n(0x03BF)),
    (0x70, n(0x03C0)),
    (0x71, n(0x03C1)),
    (0x72, n(0x03C2)),
    (0x73, n(0x03C3)),
    (0x74, n(0x03C4)),
    (0x75, n(0x03C5)),
    (0x76, n(0x03C6)),
    (0x77, n(0x03C7)),
    (0x78, n(0x03C8)),
    (0x79, n(0x03C9)),
]);

/// The MARC-8 Basic Greek character set.
pub static BASIC_GREEK: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &BASIC_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &BASIC_GRAPHICS,
    },
    spans: &[],
};

static SYMBOL_GRAPHICS: GraphicSet = graphic(&[
    (0x61, n(0x03B1)), // alpha
    (0x62, n(0x03B2)), // beta
    (0x63, n(0x03B3)), // gamma
]);

/// The MARC-8 Greek Symbols character set.
///
/// Three letters used as symbols in scientific text, reached through the
/// single-character `ESC g` shift.
pub static GREEK_SYMBOLS: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &SYMBOL_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &SYMBOL_GRAPHICS,
    },
    spans: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_cases() {
        assert_eq!(BASIC_GREEK.lookup(&[0x41], 0).unwrap().unicode, 0x0391);
        assert_eq!(BASIC_GREEK.lookup(&[0x61], 0).unwrap().unicode, 0x03B1);
    }

    #[test]
    fn test_sigma_forms() {
        assert_eq!(BASIC_GREEK.lookup(&[0x72], 0).unwrap().unicode, 0x03C2);
        assert_eq!(BASIC_GREEK.lookup(&[0x73], 0).unwrap().unicode, 0x03C3);
    }

    #[test]
    fn test_breathings_are_combining() {
        assert!(BASIC_GREEK.lookup(&[0x25], 0).unwrap().combining);
        assert!(BASIC_GREEK.lookup(&[0x26], 0).unwrap().combining);
    }

    #[test]
    fn test_symbol_set() {
        assert_eq!(GREEK_SYMBOLS.lookup(&[0x61], 0).unwrap().unicode, 0x03B1);
        assert_eq!(GREEK_SYMBOLS.lookup(&[0x63], 0).unwrap().unicode, 0x03B3);
        assert!(GREEK_SYMBOLS.lookup(&[0x64], 0).is_err());
    }
}
