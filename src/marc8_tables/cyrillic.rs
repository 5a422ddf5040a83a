//! The Basic and Extended Cyrillic character sets.
//!
//! Basic: <https://www.loc.gov/marc/specifications/codetables/BasicCyrillic.html>
//! Extended: <https://www.loc.gov/marc/specifications/codetables/ExtendedCyrillic.html>

use super::{graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static BASIC_GRAPHICS: GraphicSet = graphic(&[
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
    (0x2D, n(0x002D)),
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
    // Lowercase letters, KOI-7 layout
    (0x40, n(0x044E)), // yu
    (0x41, n(0x0430)), // a
    (0x42, n(0x0431)), // be
    (0x43, n(0x0446)), // tse
    (0x44, n(0x0434)), // de
    (0x45, n(0x0435)), // ie
    (0x46, n(0x0444)), // ef
    (0x47, n(0x0433)), // ghe
    (0x48, n(0x0445)), // ha
    (0x49, n(0x0438)), // i
    (0x4A, n(0x0439)), // short i
    (0x4B, n(0x043A)), // ka
    (0x4C, n(0x043B)), // el
    (0x4D, n(0x043C)), // em
    (0x4E, n(0x043D)), // en
    (0x4F, n(0x043E)), // o
    (0x50, n(0x043F)), // pe
    (0x51, n(0x044F)), // ya
    (0x52, n(0x0440)), // er
    (0x53, n(0x0441)), // es
    (0x54, n(0x0442)), // te
    (0x55, n(0x0443)), // u
    (0x56, n(0x0436)), // zhe
    (0x57, n(0x0432)), // ve
    (0x58, n(0x044C)), // soft sign
    (0x59, n(0x044B)), // yeru
    (0x5A, n(0x0437)), // ze
    (0x5B, n(0x0448)), // sha
    (0x5C, n(0x044D)), // e
    (0x5D, n(0x0449)), // shcha
    (0x5E, n(0x0447)), // che
    (0x5F, n(0x044A)), // hard sign
    // Uppercase letters
    (0x60, n(0x042E)),
    (0x61, n(0x0410)),
    (0x62, n(0x0411)),
    (0x63, n(0x0426)),
    (0x64, n(0x0414)),
    (0x65, n(0x0415)),
    (0x66, n(0x0424)),
    (0x67, n(0x0413)),
    (0x68, n(0x0425)),
    (0x69, n(0x0418)),
    (0x6A, n(0x0419)),
    (0x6B, n(0x041A)),
    (0x6C, n(0x041B)),
    (0x6D, n(0x041C)),
    (0x6E, n(0x041D)),
    (0x6F, n(0x041E)),
    (0x70, n(0x041F)),
    (0x71, n(0x042F)),
    (0x72, n(0x0420)),
    (0x73, n(0x0421)),
    (0x74, n(0x0422)),
    (0x75, n(0x0423)),
    (0x76, n(0x0416)),
    (0x77, n(0x0412)),
    (0x78, n(0x042C)),
    (0x79, n(0x042B)),
    (0x7A, n(0x0417)),
    (0x7B, n(0x0428)),
    (0x7C, n(0x042D)),
    (0x7D, n(0x0429)),
    (0x7E, n(0x0427)),
]);

/// The MARC-8 Basic Cyrillic character set.
pub static BASIC_CYRILLIC: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &BASIC_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &BASIC_GRAPHICS,
    },
    spans: &[],
};

static EXTENDED_GRAPHICS: GraphicSet = graphic(&[
    // Lowercase letters
    (0x21, n(0x0491)), // ghe with upturn
    (0x22, n(0x0452)), // dje
    (0x23, n(0x0453)), // gje
    (0x24, n(0x0454)), // ukrainian ie
    (0x25, n(0x0455)), // dze
    (0x26, n(0x0456)), // byelorussian-ukrainian i
    (0x27, n(0x0457)), // yi
    (0x28, n(0x0458)), // je
    (0x29, n(0x0459)), // lje
    (0x2A, n(0x045A)), // nje
    (0x2B, n(0x045B)), // tshe
    (0x2C, n(0x045C)), // kje
    (0x2D, n(0x045E)), // short u
    (0x2E, n(0x045F)), // dzhe
    (0x2F, n(0x0463)), // yat
    (0x30, n(0x0473)), // fita
    (0x31, n(0x0475)), // izhitsa
    (0x32, n(0x046B)), // big yus
    // Uppercase letters
    (0x41, n(0x0490)),
    (0x42, n(0x0402)),
    (0x43, n(0x0403)),
    (0x44, n(0x0404)),
    (0x45, n(0x0405)),
    (0x46, n(0x0406)),
    (0x47, n(0x0407)),
    (0x48, n(0x0408)),
    (0x49, n(0x0409)),
    (0x4A, n(0x040A)),
    (0x4B, n(0x040B)),
    (0x4C, n(0x040C)),
    (0x4D, n(0x040E)),
    (0x4E, n(0x040F)),
    (0x4F, n(0x0462)),
    (0x50, n(0x0472)),
    (0x51, n(0x0474)),
    (0x52, n(0x046A)),
]);

/// The MARC-8 Extended Cyrillic character set.
///
/// Letters for the non-Russian Cyrillic orthographies (Ukrainian, Serbian,
/// Macedonian) and the pre-reform historic letters.
pub static EXTENDED_CYRILLIC: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &EXTENDED_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &EXTENDED_GRAPHICS,
    },
    spans: &[],
};
