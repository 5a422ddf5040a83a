//! The Superscripts character set.
//!
//! <https://www.loc.gov/marc/specifications/codetables/Superscripts.html>

use super::{graphic, n, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodeTable, GraphicSet};

static SUPERSCRIPT_GRAPHICS: GraphicSet = graphic(&[
    (0x28, n(0x207D)), // superscript left parenthesis
    (0x29, n(0x207E)), // superscript right parenthesis
    (0x2B, n(0x207A)), // superscript plus sign
    (0x2D, n(0x207B)), // superscript minus sign
    (0x30, n(0x2070)),
    (0x31, n(0x00B9)),
    (0x32, n(0x00B2)),
    (0x33, n(0x00B3)),
    (0x34, n(0x2074)),
    (0x35, n(0x2075)),
    (0x36, n(0x2076)),
    (0x37, n(0x2077)),
    (0x38, n(0x2078)),
    (0x39, n(0x2079)),
]);

/// The MARC-8 Superscripts character set, reached through `ESC p`.
pub static SUPERSCRIPT: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &SUPERSCRIPT_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &SUPERSCRIPT_GRAPHICS,
    },
    spans: &[],
};
