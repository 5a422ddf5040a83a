//! The conversion descriptor.
//!
//! A [`Converter`] pairs a decoder for the source encoding with an encoder
//! for the target encoding and pumps code points between them, one at a
//! time, against caller-owned buffers. The contract follows the POSIX
//! `iconv` trio: open a descriptor for an encoding pair, feed it input and
//! output cursors until the input is exhausted, then flush.
//!
//! The pump suspends by returning: when the output fills mid-character the
//! decoded code point is parked inside the descriptor and picked up by the
//! next call, so nothing is decoded twice and nothing is lost.

use crate::coding::{Decode, Encode};
use crate::error::{ConversionError, Result};
use crate::marc8::Marc8Decoder;
use crate::utf16::Utf16Codec;
use crate::utf32::Utf32Codec;
use crate::utf8::Utf8Codec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A character encoding the converter can read or write.
///
/// MARC-8 is supported on the source side only; conversion into MARC-8 is
/// not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// The Library of Congress MARC-8 bibliographic encoding.
    Marc8,
    /// UTF-8.
    Utf8,
    /// UTF-16, little-endian, no byte order mark. Also serves UCS-2.
    Utf16,
    /// UTF-32, little-endian, no byte order mark. Also serves UCS-4.
    Utf32,
}

impl Encoding {
    /// Resolve an encoding name.
    ///
    /// Matching is case-insensitive and ignores `-`. Recognized names:
    /// `MARC-8`, `ANSEL`, `UTF-8`, `char`, `UTF-16`, `UCS-2`, `UTF-32`,
    /// `UCS-4`, `wchar`, `wchar_t`. The empty string selects the 8-bit
    /// default, UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidArgument`] for an unrecognized
    /// name.
    pub fn from_name(name: &str) -> Result<Encoding> {
        let normalized: String = name
            .chars()
            .filter(|&ch| ch != '-')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "" | "char" | "utf8" => Ok(Encoding::Utf8),
            "utf16" | "ucs2" => Ok(Encoding::Utf16),
            "utf32" | "ucs4" | "wchar" | "wchar_t" => Ok(Encoding::Utf32),
            "marc8" | "ansel" => Ok(Encoding::Marc8),
            _ => Err(ConversionError::InvalidArgument(format!(
                "unknown encoding name: {name}"
            ))),
        }
    }

    /// The canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Marc8 => "MARC-8",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A conversion descriptor.
///
/// Holds the codec pair, the parked code point awaiting a larger output
/// buffer, and the lazy-initialization flag. Dropping the converter
/// releases everything; there is no separate close step.
pub struct Converter {
    to: Encoding,
    from: Encoding,
    decoder: Box<dyn Decode + Send>,
    encoder: Box<dyn Encode + Send>,
    pending: Option<u32>,
    initialized: bool,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("to", &self.to)
            .field("from", &self.from)
            .field("pending", &self.pending)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl Converter {
    /// Open a descriptor converting `from` into `to`, by name.
    ///
    /// See [`Encoding::from_name`] for the recognized names.
    ///
    /// # Examples
    ///
    /// ```
    /// use marconv::Converter;
    ///
    /// let converter = Converter::open("UTF-8", "MARC-8")?;
    /// # Ok::<(), marconv::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidArgument`] when either name is
    /// unrecognized or the target is MARC-8, which this library does not
    /// encode into.
    pub fn open(to: &str, from: &str) -> Result<Converter> {
        Converter::new(Encoding::from_name(to)?, Encoding::from_name(from)?)
    }

    /// Open a descriptor converting `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidArgument`] when the target is
    /// MARC-8.
    pub fn new(to: Encoding, from: Encoding) -> Result<Converter> {
        let encoder: Box<dyn Encode + Send> = match to {
            Encoding::Utf8 => Box::new(Utf8Codec),
            Encoding::Utf16 => Box::new(Utf16Codec),
            Encoding::Utf32 => Box::new(Utf32Codec),
            Encoding::Marc8 => {
                return Err(ConversionError::InvalidArgument(
                    "MARC-8 is not supported as a conversion target".to_string(),
                ))
            }
        };
        let decoder: Box<dyn Decode + Send> = match from {
            Encoding::Marc8 => Box::new(Marc8Decoder::new()),
            Encoding::Utf8 => Box::new(Utf8Codec),
            Encoding::Utf16 => Box::new(Utf16Codec),
            Encoding::Utf32 => Box::new(Utf32Codec),
        };
        Ok(Converter {
            to,
            from,
            decoder,
            encoder,
            pending: None,
            initialized: false,
        })
    }

    /// The target encoding.
    #[must_use]
    pub fn target(&self) -> Encoding {
        self.to
    }

    /// The source encoding.
    #[must_use]
    pub fn source(&self) -> Encoding {
        self.from
    }

    /// Convert as much of `src` into `dst` as fits.
    ///
    /// Both cursors advance past the bytes consumed and produced, in the
    /// manner of [`std::io::Read`] on a byte slice. The call returns when
    /// the input is exhausted, when a NUL code point has been written
    /// (the canonical end of string), or when the output cursor is
    /// exhausted; converting resumes from the cursors on the next call.
    ///
    /// Returns the number of non-identical conversions performed, which
    /// is always 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use marconv::Converter;
    ///
    /// let mut converter = Converter::open("UTF-8", "MARC-8")?;
    /// let mut src: &[u8] = b"Caf\xE2e";
    /// let mut buffer = [0u8; 16];
    /// let written = {
    ///     let mut dst: &mut [u8] = &mut buffer;
    ///     converter.convert(&mut src, &mut dst)?;
    ///     converter.flush(&mut dst)?;
    ///     16 - dst.len()
    /// };
    /// assert_eq!(&buffer[..written], "Cafe\u{301}".as_bytes());
    /// # Ok::<(), marconv::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ConversionError::IllegalSequence`] when the input is malformed
    ///   for the source encoding. The input cursor is left at the start of
    ///   the offending sequence.
    /// - [`ConversionError::InvalidArgument`] when the input ends partway
    ///   through a fixed-width code unit; append the rest and retry.
    /// - [`ConversionError::OutputTooBig`] when the next character does
    ///   not fit in `dst`. The decoded code point is parked; supply a
    ///   larger buffer and call again (or flush) to resume without
    ///   re-decoding.
    /// - [`ConversionError::OutOfMemory`] when an internal buffer could
    ///   not grow.
    pub fn convert(&mut self, src: &mut &[u8], dst: &mut &mut [u8]) -> Result<usize> {
        if !self.initialized {
            self.encoder.init();
            self.decoder.init(src)?;
            self.initialized = true;
        }

        if src.is_empty() {
            return Ok(0);
        }

        loop {
            let unicode = if let Some(parked) = self.pending.take() {
                parked
            } else {
                match self.decoder.read(src)? {
                    Some(unicode) => unicode,
                    None => return Ok(0),
                }
            };

            if let Err(error) = self.encoder.write(unicode, dst) {
                self.pending = Some(unicode);
                return Err(error);
            }

            if unicode == 0 || dst.is_empty() {
                return Ok(0);
            }
        }
    }

    /// Finalize the stream: write any parked code point, drain encoder
    /// shift state, and return the descriptor to its uninitialized state
    /// so it can be reused for a new stream.
    ///
    /// Flushing twice is harmless; the second call writes nothing.
    ///
    /// Returns the number of non-identical conversions performed, which
    /// is always 0.
    ///
    /// # Errors
    ///
    /// [`ConversionError::OutputTooBig`] when the parked code point does
    /// not fit in `dst`; it stays parked for the next attempt.
    pub fn flush(&mut self, dst: &mut &mut [u8]) -> Result<usize> {
        if let Some(unicode) = self.pending {
            self.encoder.write(unicode, dst)?;
            self.pending = None;
        }
        self.encoder.flush(dst)?;
        self.initialized = false;
        Ok(0)
    }

    /// Abandon the stream: discard any parked code point and return the
    /// descriptor to its uninitialized state without writing anything.
    pub fn reset(&mut self) {
        self.pending = None;
        self.initialized = false;
    }
}
