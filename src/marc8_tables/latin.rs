//! The Basic Latin (ASCII) and Extended Latin (ANSEL) character sets.
//!
//! Basic Latin: <https://www.loc.gov/marc/specifications/codetables/BasicLatin.html>
//! Extended Latin: <https://www.loc.gov/marc/specifications/codetables/ExtendedLatin.html>

use super::{c, graphic, n, ASCII_CONTROLS, MARC_CONTROLS, NONE};
use crate::codetable::{Charset, CodeTable, GraphicSet};

const fn ascii_graphics() -> GraphicSet {
    let mut cells = [NONE; 96];
    let mut i = 0;
    while i < 96 {
        cells[i] = n(0x20 + i as u32);
        i += 1;
    }
    GraphicSet { cells }
}

static ASCII_GRAPHICS: GraphicSet = ascii_graphics();

/// The MARC-8 Basic Latin (ASCII) character set.
///
/// The default G0 set: graphic characters map to their ASCII identities.
pub static BASIC_LATIN: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &ASCII_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &ASCII_GRAPHICS,
    },
    spans: &[],
};

static ANSEL_GRAPHICS: GraphicSet = graphic(&[
    // Spacing characters
    (0xA1, n(0x0141)), // latin capital letter L with stroke
    (0xA2, n(0x00D8)), // latin capital letter O with stroke
    (0xA3, n(0x0110)), // latin capital letter D with stroke
    (0xA4, n(0x00DE)), // latin capital letter thorn
    (0xA5, n(0x00C6)), // latin capital letter AE
    (0xA6, n(0x0152)), // latin capital ligature OE
    (0xA7, n(0x02B9)), // modifier letter prime (soft sign)
    (0xA8, n(0x00B7)), // middle dot
    (0xA9, n(0x266D)), // music flat sign
    (0xAA, n(0x00AE)), // registered sign
    (0xAB, n(0x00B1)), // plus-minus sign
    (0xAC, n(0x01A0)), // latin capital letter O with horn
    (0xAD, n(0x01AF)), // latin capital letter U with horn
    (0xAE, n(0x02BC)), // modifier letter apostrophe (alif)
    (0xB0, n(0x02BB)), // modifier letter turned comma (ayn)
    (0xB1, n(0x0142)), // latin small letter l with stroke
    (0xB2, n(0x00F8)), // latin small letter o with stroke
    (0xB3, n(0x0111)), // latin small letter d with stroke
    (0xB4, n(0x00FE)), // latin small letter thorn
    (0xB5, n(0x00E6)), // latin small letter ae
    (0xB6, n(0x0153)), // latin small ligature oe
    (0xB7, n(0x02BA)), // modifier letter double prime (hard sign)
    (0xB8, n(0x0131)), // latin small letter dotless i
    (0xB9, n(0x00A3)), // pound sign
    (0xBA, n(0x00F0)), // latin small letter eth
    (0xBC, n(0x01A1)), // latin small letter o with horn
    (0xBD, n(0x01B0)), // latin small letter u with horn
    (0xC0, n(0x00B0)), // degree sign
    (0xC1, n(0x2113)), // script small l
    (0xC2, n(0x2117)), // sound recording copyright
    (0xC3, n(0x00A9)), // copyright sign
    (0xC4, n(0x266F)), // music sharp sign
    (0xC5, n(0x00BF)), // inverted question mark
    (0xC6, n(0x00A1)), // inverted exclamation mark
    (0xC7, n(0x00DF)), // latin small letter sharp s
    (0xC8, n(0x20AC)), // euro sign
    // Combining diacritical marks
    (0xE0, c(0x0309)), // hook above
    (0xE1, c(0x0300)), // grave accent
    (0xE2, c(0x0301)), // acute accent
    (0xE3, c(0x0302)), // circumflex accent
    (0xE4, c(0x0303)), // tilde
    (0xE5, c(0x0304)), // macron
    (0xE6, c(0x0306)), // breve
    (0xE7, c(0x0307)), // dot above
    (0xE8, c(0x0308)), // diaeresis
    (0xE9, c(0x030C)), // caron
    (0xEA, c(0x030A)), // ring above
    (0xEB, c(0xFE20)), // ligature left half
    (0xEC, c(0xFE21)), // ligature right half
    (0xED, c(0x0315)), // comma above right
    (0xEE, c(0x030B)), // double acute accent
    (0xEF, c(0x0310)), // candrabindu
    (0xF0, c(0x0327)), // cedilla
    (0xF1, c(0x0328)), // ogonek (right hook)
    (0xF2, c(0x0323)), // dot below
    (0xF3, c(0x0324)), // double dot below
    (0xF4, c(0x0325)), // ring below
    (0xF5, c(0x0333)), // double low line
    (0xF6, c(0x0332)), // low line
    (0xF7, c(0x0326)), // comma below (left hook)
    (0xF8, c(0x031C)), // left half ring below (right cedilla)
    (0xF9, c(0x032E)), // breve below (upadhmaniya)
    (0xFA, c(0xFE22)), // double tilde left half
    (0xFB, c(0xFE23)), // double tilde right half
    (0xFE, c(0x0313)), // comma above (high comma centered)
]);

/// The MARC-8 Extended Latin (ANSEL) character set.
///
/// The default G1 set, covering the Latin-script special characters and
/// combining diacritics used in library catalogs.
pub static EXTENDED_LATIN: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &ANSEL_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &ANSEL_GRAPHICS,
    },
    spans: &[],
};
