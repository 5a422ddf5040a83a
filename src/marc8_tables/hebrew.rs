//! The Basic Hebrew character set.
//!
//! <https://www.loc.gov/marc/specifications/codetables/BasicHebrew.html>

use super::{c, graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static HEBREW_GRAPHICS: GraphicSet = graphic(&[
    (0x21, n(0x0021)),
    (0x22, n(0x0022)),
    (0x23, n(0x0023)),
    (0x24, n(0x0024)),
    (0x25, n(0x0025)),
    (0x26, n(0x0026)),
    (0x27, n(0x0027)),
    (0x28, n(0x0028)),
    (0x29, n(0x0029)),
    (0x2A, n(0x002A)),
    (0x2B, n(0x002B)),
    (0x2C, n(0x002C)),
    (0x2D, n(0x05BE)), // maqaf
    (0x2E, n(0x002E)),
    (0x2F, n(0x002F)),
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
    (0x3A, n(0x003A)),
    (0x3B, n(0x003B)),
    (0x3C, n(0x003C)),
    (0x3D, n(0x003D)),
    (0x3E, n(0x003E)),
    (0x3F, n(0x003F)),
    // Points, written before the consonant they vocalize
    (0x40, c(0x05B0)), // sheva
    (0x41, c(0x05B1)), // hataf segol
    (0x42, c(0x05B2)), // hataf patah
    (0x43, c(0x05B3)), // hataf qamats
    (0x44, c(0x05B4)), // hiriq
    (0x45, c(0x05B5)), // tsere
    (0x46, c(0x05B6)), // segol
    (0x47, c(0x05B7)), // patah
    (0x48, c(0x05B8)), // qamats
    (0x49, c(0x05B9)), // holam
    (0x4A, c(0x05BB)), // qubuts
    (0x4B, c(0x05BC)), // dagesh or mapiq
    (0x4C, c(0x05BF)), // rafe
    (0x4D, c(0x05C1)), // shin dot
    (0x4E, c(0x05C2)), // sin dot
    (0x5B, n(0x005B)),
    (0x5D, n(0x005D)),
    // Letters, alef through tav with the final forms interleaved
    (0x60, n(0x05D0)),
    (0x61, n(0x05D1)),
    (0x62, n(0x05D2)),
    (0x63, n(0x05D3)),
    (0x64, n(0x05D4)),
    (0x65, n(0x05D5)),
    (0x66, n(0x05D6)),
    (0x67, n(0x05D7)),
    (0x68, n(0x05D8)),
    (0x69, n(0x05D9)),
    (0x6A, n(0x05DA)),
    (0x6B, n(0x05DB)),
    (0x6C, n(0x05DC)),
    (0x6D, n(0x05DD)),
    (0x6E, n(0x05DE)),
    (0x6F, n(0x05DF)),
    (0x70, n(0x05E0)),
    (0x71, n(0x05E1)),
    (0x72, n(0x05E2)),
    (0x73, n(0x05E3)),
    (0x74, n(0x05E4)),
    (0x75, n(0x05E5)),
    (0x76, n(0x05E6)),
    (0x77, n(0x05E7)),
    (0x78, n(0x05E8)),
    (0x79, n(0x05E9)),
    (0x7A, n(0x05EA)),
]);

/// The MARC-8 Basic Hebrew character set.
pub static BASIC_HEBREW: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &HEBREW_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &HEBREW_GRAPHICS,
    },
    spans: &[],
};
