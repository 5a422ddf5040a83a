#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marconv: MARC-8 to Unicode conversion
//!
//! A streaming converter from the Library of Congress MARC-8 character
//! encoding to the Unicode transformation forms (UTF-8, UTF-16, UTF-32),
//! with conversion among the Unicode forms as well. The interface follows
//! the POSIX `iconv` contract: open a descriptor for an encoding pair,
//! feed it input and output cursors until the input runs out, flush.
//!
//! ## Quick Start
//!
//! ```
//! use marconv::Converter;
//!
//! // MARC-8 spells "Café" with the combining acute before the 'e'.
//! let mut converter = Converter::open("UTF-8", "MARC-8")?;
//! let mut src: &[u8] = b"Caf\xE2e";
//! let mut buffer = [0u8; 32];
//! let written = {
//!     let mut dst: &mut [u8] = &mut buffer;
//!     converter.convert(&mut src, &mut dst)?;
//!     converter.flush(&mut dst)?;
//!     32 - dst.len()
//! };
//! assert_eq!(&buffer[..written], "Cafe\u{301}".as_bytes());
//! # Ok::<(), marconv::ConversionError>(())
//! ```
//!
//! ## Modules
//!
//! - [`converter`] — The conversion descriptor (open, convert, flush)
//! - [`marc8`] — The stateful MARC-8 decoder
//! - [`marc8_tables`] — Static MARC-8 character set tables
//! - [`codetable`] — Trie-structured lookup through the tables
//! - [`utf8`], [`utf16`], [`utf32`] — Stateless Unicode codecs
//! - [`coding`] — Decoder/encoder traits the descriptor pumps between
//! - [`error`] — Error types and result type
//!
//! ## What MARC-8 support covers
//!
//! - ISO-2022-style escape sequences shifting the G0/G1 graphic areas
//! - Basic and Extended Latin (ANSEL), Greek, Cyrillic, Arabic, Hebrew,
//!   the Greek Symbols and Subscript/Superscript sets, and the three-byte
//!   East Asian (EACC) set
//! - Reordering of combining characters, which precede their base in
//!   MARC-8 but follow it in Unicode
//!
//! Conversion *into* MARC-8 is not supported.

pub mod codetable;
pub mod coding;
pub mod converter;
pub mod error;
pub mod marc8;
pub mod marc8_tables;
pub mod utf16;
pub mod utf32;
pub mod utf8;

pub use converter::{Converter, Encoding};
pub use error::{ConversionError, Result};
pub use marc8::Marc8Decoder;
