//! The Subscripts character set.
//!
//! <https://www.loc.gov/marc/specifications/codetables/Subscripts.html>

use super::{graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static SUBSCRIPT_GRAPHICS: GraphicSet = graphic(&[
    (0x28, n(0x208D)), // subscript left parenthesis
    (0x29, n(0x208E)), // subscript right parenthesis
    (0x2B, n(0x208A)), // subscript plus sign
    (0x2D, n(0x208B)), // subscript minus sign
    (0x30, n(0x2080)),
    (0x31, n(0x2081)),
    (0x32, n(0x2082)),
    (0x33, n(0x2083)),
    (0x34, n(0x2084)),
    (0x35, n(0x2085)),
    (0x36, n(0x2086)),
    (0x37, n(0x2087)),
    (0x38, n(0x2088)),
    (0x39, n(0x2089)),
]);

/// The MARC-8 Subscripts character set, reached through `ESC b`.
pub static SUBSCRIPT: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &SUBSCRIPT_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &SUBSCRIPT_GRAPHICS,
    },
    spans: &[],
};
