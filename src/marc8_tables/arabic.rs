//! The Basic and Extended Arabic character sets.
//!
//! Basic: <https://www.loc.gov/marc/specifications/codetables/BasicArabic.html>
//! Extended: <https://www.loc.gov/marc/specifications/codetables/ExtendedArabic.html>
//!
//! The basic set follows the ASMO 449 layout; the extended set adds the
//! letters and digit forms used by Persian, Urdu, and related orthographies.

use super::{c, graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static BASIC_GRAPHICS: GraphicSet = graphic(&[
    (0x21, n(0x0021)),
    (0x22, n(0x0022)),
    (0x23, n(0x0023)),
    (0x24, n(0x00A4)), // currency sign
    (0x25, n(0x066A)), // arabic percent sign
    (0x26, n(0x0026)),
    (0x27, n(0x0027)),
    (0x28, n(0x0028)),
    (0x29, n(0x0029)),
    (0x2A, n(0x002A)),
    (0x2B, n(0x002B)),
    (0x2C, n(0x060C)), // arabic comma
    (0x2D, n(0x002D)),
    (0x2E, n(0x002E)),
    (0x2F, n(0x002F)),
    // Arabic-Indic digits
    (0x30, n(0x0660)),
    (0x31, n(0x0661)),
    (0x32, n(0x0662)),
    (0x33, n(0x0663)),
    (0x34, n(0x0664)),
    (0x35, n(0x0665)),
    (0x36, n(0x0666)),
    (0x37, n(0x0667)),
    (0x38, n(0x0668)),
    (0x39, n(0x0669)),
    (0x3A, n(0x003A)),
    (0x3B, n(0x061B)), // arabic semicolon
    (0x3C, n(0x003C)),
    (0x3D, n(0x003D)),
    (0x3E, n(0x003E)),
    (0x3F, n(0x061F)), // arabic question mark
    // Letters
    (0x41, n(0x0621)), // hamza
    (0x42, n(0x0622)), // alef with madda above
    (0x43, n(0x0623)), // alef with hamza above
    (0x44, n(0x0624)), // waw with hamza above
    (0x45, n(0x0625)), // alef with hamza below
    (0x46, n(0x0626)), // yeh with hamza above
    (0x47, n(0x0627)), // alef
    (0x48, n(0x0628)), // beh
    (0x49, n(0x0629)), // teh marbuta
    (0x4A, n(0x062A)), // teh
    (0x4B, n(0x062B)), // theh
    (0x4C, n(0x062C)), // jeem
    (0x4D, n(0x062D)), // hah
    (0x4E, n(0x062E)), // khah
    (0x4F, n(0x062F)), // dal
    (0x50, n(0x0630)), // thal
    (0x51, n(0x0631)), // reh
    (0x52, n(0x0632)), // zain
    (0x53, n(0x0633)), // seen
    (0x54, n(0x0634)), // sheen
    (0x55, n(0x0635)), // sad
    (0x56, n(0x0636)), // dad
    (0x57, n(0x0637)), // tah
    (0x58, n(0x0638)), // zah
    (0x59, n(0x0639)), // ain
    (0x5A, n(0x063A)), // ghain
    (0x5B, n(0x005B)),
    (0x5D, n(0x005D)),
    (0x60, n(0x0640)), // tatweel
    (0x61, n(0x0641)), // feh
    (0x62, n(0x0642)), // qaf
    (0x63, n(0x0643)), // kaf
    (0x64, n(0x0644)), // lam
    (0x65, n(0x0645)), // meem
    (0x66, n(0x0646)), // noon
    (0x67, n(0x0647)), // heh
    (0x68, n(0x0648)), // waw
    (0x69, n(0x0649)), // alef maksura
    (0x6A, n(0x064A)), // yeh
    // Harakat, written before the letter they vocalize
    (0x6B, c(0x064B)), // fathatan
    (0x6C, c(0x064C)), // dammatan
    (0x6D, c(0x064D)), // kasratan
    (0x6E, c(0x064E)), // fatha
    (0x6F, c(0x064F)), // damma
    (0x70, c(0x0650)), // kasra
    (0x71, c(0x0651)), // shadda
    (0x72, c(0x0652)), // sukun
]);

/// The MARC-8 Basic Arabic character set.
pub static BASIC_ARABIC: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &BASIC_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &BASIC_GRAPHICS,
    },
    spans: &[],
};

static EXTENDED_GRAPHICS: GraphicSet = graphic(&[
    // Eastern Arabic-Indic digits
    (0x30, n(0x06F0)),
    (0x31, n(0x06F1)),
    (0x32, n(0x06F2)),
    (0x33, n(0x06F3)),
    (0x34, n(0x06F4)),
    (0x35, n(0x06F5)),
    (0x36, n(0x06F6)),
    (0x37, n(0x06F7)),
    (0x38, n(0x06F8)),
    (0x39, n(0x06F9)),
    // Persian and Urdu letters
    (0x41, n(0x0679)), // tteh
    (0x42, n(0x067E)), // peh
    (0x43, n(0x0686)), // tcheh
    (0x44, n(0x0688)), // ddal
    (0x45, n(0x0691)), // rreh
    (0x46, n(0x0698)), // jeh
    (0x47, n(0x06A9)), // keheh
    (0x48, n(0x06AF)), // gaf
    (0x49, n(0x06BA)), // noon ghunna
    (0x4A, n(0x06BE)), // heh doachashmee
    (0x4B, n(0x06C1)), // heh goal
    (0x4C, n(0x06CC)), // farsi yeh
    (0x4D, n(0x06D2)), // yeh barree
]);

/// The MARC-8 Extended Arabic character set.
pub static EXTENDED_ARABIC: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &EXTENDED_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &EXTENDED_GRAPHICS,
    },
    spans: &[],
};
