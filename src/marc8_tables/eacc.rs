//! The East Asian Character Code (EACC) character set.
//!
//! <https://www.loc.gov/marc/specifications/specchareacc.html>
//!
//! EACC is the only multi-byte set in the MARC-8 environment: every code
//! point is exactly three code units, each constrained to the G0 graphic
//! range. The lead unit selects a span of second units, which selects a
//! span of third units, which resolves to Unicode. Spans with few
//! assignments are stored as sparse path lists; well-populated slices use
//! dense tables.
//!
//! This table embeds the ideographic punctuation slice of the published
//! code table. Sequences outside the embedded slice are unassigned and
//! fail resolution as illegal sequences.

use super::{graphic, n, span, span_block, ASCII_CONTROLS, MARC_CONTROLS};
use crate::codetable::{Charset, CodePath, CodeSpan, CodeTable, GraphicSet, IGNORED};

static EACC_GRAPHICS: GraphicSet = graphic(&[(0x21, span(0))]);

static LEAD_21_PATHS: [CodePath; 1] = [CodePath {
    unit: 0x23,
    info: span(1),
}];

static ROW_21_23: GraphicSet = span_block(&[
    (0x20, n(0x3000)), // ideographic space
    (0x21, n(0xFF01)), // fullwidth exclamation mark
    (0x28, n(0xFF08)), // fullwidth left parenthesis
    (0x29, n(0xFF09)), // fullwidth right parenthesis
    (0x2C, n(0xFF0C)), // fullwidth comma
    (0x2E, n(0x3002)), // ideographic full stop
    (0x6F, n(IGNORED)), // duplicate of the ideographic space; consumes no output
]);

static EACC_SPANS: [CodeSpan; 2] = [
    CodeSpan::Paths(&LEAD_21_PATHS),
    CodeSpan::Table(&ROW_21_23),
];

/// The MARC-8 East Asian Character Code set.
pub static EACC: Charset = Charset {
    table: CodeTable {
        cl: &ASCII_CONTROLS,
        gl: &EACC_GRAPHICS,
        cr: &MARC_CONTROLS,
        gr: &EACC_GRAPHICS,
    },
    spans: &EACC_SPANS,
};
