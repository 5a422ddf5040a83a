//! The stateful MARC-8 decoder.
//!
//! MARC-8 is an ISO-2022-style encoding: escape sequences shift character
//! sets into the graphic areas of a working code table, and subsequent
//! bytes are resolved against whatever sets are currently in place. The
//! decoder starts from the default environment (ASCII in GL, ANSEL in GR),
//! processes shifts as they arrive, and resolves everything else through
//! the [`codetable`](crate::codetable) trie.
//!
//! Combining characters need special care: MARC-8 writes diacritics
//! *before* the character they attach to, Unicode *after*. The decoder
//! buffers a run of combining characters, emits the following base
//! character first, then drains the buffer in reverse order of arrival.

use crate::codetable::{Charset, CodeSpan, CodeTable, Decoded, IGNORED};
use crate::coding::Decode;
use crate::error::{ConversionError, Result};
use crate::marc8_tables::{
    BASIC_ARABIC, BASIC_CYRILLIC, BASIC_GREEK, BASIC_HEBREW, BASIC_LATIN, EACC, EXTENDED_ARABIC,
    EXTENDED_CYRILLIC, EXTENDED_LATIN, GREEK_SYMBOLS, SUBSCRIPT, SUPERSCRIPT,
};
use smallvec::SmallVec;

const ESCAPE: u8 = 0x1B;

/// The mutable code table the decoder resolves bytes against.
///
/// Escape sequences replace individual areas with references into the
/// static charset data; nothing is copied.
#[derive(Debug, Clone, Copy)]
struct WorkingSet {
    table: CodeTable,
    spans: &'static [CodeSpan],
}

impl WorkingSet {
    /// The default MARC-8 environment: ASCII controls and graphics on the
    /// left, ANSEL controls and graphics on the right, EACC spans armed
    /// for a later multi-byte shift.
    fn initial() -> WorkingSet {
        WorkingSet {
            table: CodeTable {
                cl: BASIC_LATIN.table.cl,
                gl: BASIC_LATIN.table.gl,
                cr: EXTENDED_LATIN.table.cr,
                gr: EXTENDED_LATIN.table.gr,
            },
            spans: EACC.spans,
        }
    }

    fn lookup(&self, input: &[u8], pos: usize) -> Result<Decoded> {
        self.table.lookup_in(self.spans, input, pos)
    }
}

/// Which graphic area an escape sequence addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    G0,
    G1,
}

/// Consume one escape sequence from the cursor and shift the working set.
///
/// On failure the cursor is untouched and the working set unchanged, so a
/// malformed shift can be reported at its exact input position.
fn read_escape(working: &mut WorkingSet, src: &mut &[u8]) -> Result<()> {
    let input = *src;
    if input.first() != Some(&ESCAPE) {
        return Err(ConversionError::InvalidArgument(
            "escape processing called without an escape character".to_string(),
        ));
    }
    let mut pos = 1;

    // Single-character shifts outside the ISO 2022 grammar.
    if let Some(&byte) = input.get(pos) {
        let shortcut = match byte {
            b'g' => Some(&GREEK_SYMBOLS),
            b'b' => Some(&SUBSCRIPT),
            b'p' => Some(&SUPERSCRIPT),
            b's' => Some(&BASIC_LATIN),
            0x24 | 0x28 | 0x2C | 0x29 | 0x2D => None,
            _ => {
                return Err(ConversionError::IllegalSequence(format!(
                    "unrecognized escape sequence introducer 0x{byte:02X}"
                )))
            }
        };
        if let Some(charset) = shortcut {
            working.table.gl = charset.table.gl;
            *src = &input[2..];
            return Ok(());
        }
    }

    let mut target: Option<Area> = None;
    let mut expect_ansel = false;
    let mut multibyte = false;
    let mut explicit = false;

    // Intermediate bytes are 0x20-0x2F.
    while let Some(&byte) = input.get(pos) {
        if byte & 0xF0 != 0x20 {
            break;
        }
        match byte {
            // '!' marks the Extended Latin set and must follow an area
            // indicator.
            0x21 => {
                if target.is_none() || multibyte || expect_ansel {
                    return Err(ConversionError::IllegalSequence(
                        "misplaced '!' in escape sequence".to_string(),
                    ));
                }
                expect_ansel = true;
            }
            // '$' announces a multi-byte set and must come first; G0 is
            // implied unless an explicit indicator follows.
            0x24 => {
                if target.is_some() || multibyte {
                    return Err(ConversionError::IllegalSequence(
                        "misplaced '$' in escape sequence".to_string(),
                    ));
                }
                target = Some(Area::G0);
                multibyte = true;
            }
            0x28 | 0x2C => {
                if (target.is_some() && !multibyte) || explicit {
                    return Err(ConversionError::IllegalSequence(
                        "duplicate code area indicator in escape sequence".to_string(),
                    ));
                }
                target = Some(Area::G0);
                explicit = true;
            }
            0x29 | 0x2D => {
                if (target.is_some() && !multibyte) || explicit {
                    return Err(ConversionError::IllegalSequence(
                        "duplicate code area indicator in escape sequence".to_string(),
                    ));
                }
                target = Some(Area::G1);
                explicit = true;
            }
            _ => {
                return Err(ConversionError::IllegalSequence(format!(
                    "unrecognized escape sequence intermediate 0x{byte:02X}"
                )))
            }
        }
        pos += 1;
    }

    let Some(&final_byte) = input.get(pos) else {
        return Err(ConversionError::IllegalSequence(
            "escape sequence cut off by end of input".to_string(),
        ));
    };

    let charset: &'static Charset = match final_byte {
        b'B' if !expect_ansel && !multibyte => &BASIC_LATIN,
        b'E' if expect_ansel && !multibyte => &EXTENDED_LATIN,
        b'1' if !expect_ansel && multibyte => &EACC,
        b'2' if !expect_ansel && !multibyte => &BASIC_HEBREW,
        b'3' if !expect_ansel && !multibyte => &BASIC_ARABIC,
        b'4' if !expect_ansel && !multibyte => &EXTENDED_ARABIC,
        b'N' if !expect_ansel && !multibyte => &BASIC_CYRILLIC,
        b'Q' if !expect_ansel && !multibyte => &EXTENDED_CYRILLIC,
        b'S' if !expect_ansel && !multibyte => &BASIC_GREEK,
        _ => {
            return Err(ConversionError::IllegalSequence(format!(
                "unrecognized character set finalizer 0x{final_byte:02X}"
            )))
        }
    };
    pos += 1;

    match target {
        Some(Area::G0) => {
            working.table.gl = charset.table.gl;
        }
        Some(Area::G1) => {
            working.table.cr = charset.table.cr;
            working.table.gr = charset.table.gr;
        }
        None => {
            return Err(ConversionError::IllegalSequence(
                "escape sequence identifies no code area".to_string(),
            ))
        }
    }
    if multibyte {
        working.spans = charset.spans;
    }

    *src = &input[pos..];
    Ok(())
}

/// Decoder for MARC-8 encoded text.
///
/// Stateful across calls: the working set carries shift state and the
/// combining buffer carries diacritics awaiting emission. One decoder
/// serves one stream; `init` resets it for the next.
#[derive(Debug)]
pub struct Marc8Decoder {
    working: WorkingSet,
    combining: SmallVec<[u32; 8]>,
    /// Set once a base character has released the buffered marks; cleared
    /// when the buffer drains. Marks buffered but not yet released stay
    /// held across calls, so a buffer boundary inside a combining run
    /// cannot emit a mark ahead of its base.
    draining: bool,
}

impl Marc8Decoder {
    /// Create a decoder in the default MARC-8 environment.
    #[must_use]
    pub fn new() -> Marc8Decoder {
        Marc8Decoder {
            working: WorkingSet::initial(),
            combining: SmallVec::new(),
            draining: false,
        }
    }

    /// Return to the default environment and discard buffered diacritics.
    pub fn reset(&mut self) {
        self.working = WorkingSet::initial();
        self.combining.clear();
        self.draining = false;
    }
}

impl Default for Marc8Decoder {
    fn default() -> Marc8Decoder {
        Marc8Decoder::new()
    }
}

impl Decode for Marc8Decoder {
    fn init(&mut self, _src: &mut &[u8]) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn read(&mut self, src: &mut &[u8]) -> Result<Option<u32>> {
        // Marks released by an emitted base drain first, in reverse order
        // of arrival, before any more input is consumed.
        if self.draining {
            if let Some(mark) = self.combining.pop() {
                return Ok(Some(mark));
            }
            self.draining = false;
        }

        loop {
            let input = *src;
            let Some(&byte) = input.first() else {
                return Ok(None);
            };
            if byte == ESCAPE {
                read_escape(&mut self.working, src)?;
                continue;
            }
            if byte == 0 {
                // End of string: marks with no base to attach to are
                // dropped with it.
                self.combining.clear();
                *src = &input[1..];
                return Ok(Some(0));
            }

            let decoded = self.working.lookup(input, 0)?;
            if decoded.unicode == IGNORED {
                // The character spends an extra code point in MARC-8;
                // nothing to emit for this one.
                *src = &input[decoded.next..];
                continue;
            }
            if decoded.combining {
                self.combining.try_reserve(1)?;
                self.combining.push(decoded.unicode);
                *src = &input[decoded.next..];
                continue;
            }
            // A base character releases whatever marks preceded it.
            self.draining = !self.combining.is_empty();
            *src = &input[decoded.next..];
            return Ok(Some(decoded.unicode));
        }
    }
}
