//! Stateless UTF-16 decoding and encoding, little-endian, no BOM.

use crate::coding::{put_bytes, Decode, Encode};
use crate::error::{ConversionError, Result};

/// The little-endian UTF-16 codec, also serving UCS-2 streams.
#[derive(Debug, Default)]
pub struct Utf16Codec;

impl Decode for Utf16Codec {
    fn read(&mut self, src: &mut &[u8]) -> Result<Option<u32>> {
        let input = *src;
        if input.is_empty() {
            return Ok(None);
        }
        if input.len() < 2 {
            return Err(ConversionError::InvalidArgument(
                "UTF-16 unit cut off by end of input".to_string(),
            ));
        }

        let first = u32::from(u16::from_le_bytes([input[0], input[1]]));

        if !(0xD800..=0xDFFF).contains(&first) {
            *src = &input[2..];
            return Ok(Some(first));
        }

        if first <= 0xDBFF {
            // High surrogate; a low surrogate must follow.
            if input.len() < 4 {
                return Err(ConversionError::InvalidArgument(
                    "UTF-16 surrogate pair cut off by end of input".to_string(),
                ));
            }
            let second = u32::from(u16::from_le_bytes([input[2], input[3]]));
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(ConversionError::IllegalSequence(format!(
                    "high surrogate followed by non-surrogate 0x{second:04X}"
                )));
            }
            let unicode = ((first - 0xD800) << 10) + (second - 0xDC00) + 0x10000;
            *src = &input[4..];
            return Ok(Some(unicode));
        }

        Err(ConversionError::IllegalSequence(format!(
            "lone low surrogate 0x{first:04X}"
        )))
    }
}

impl Encode for Utf16Codec {
    fn write(&mut self, unicode: u32, dst: &mut &mut [u8]) -> Result<()> {
        if unicode > 0x10_FFFF || (0xD800..=0xDFFF).contains(&unicode) {
            return Err(ConversionError::IllegalSequence(format!(
                "U+{unicode:04X} cannot be encoded as UTF-16"
            )));
        }
        if unicode <= 0xFFFF {
            #[allow(clippy::cast_possible_truncation)]
            return put_bytes(dst, &(unicode as u16).to_le_bytes());
        }
        let value = unicode - 0x10000;
        #[allow(clippy::cast_possible_truncation)]
        let high = (0xD800 | (value >> 10)) as u16;
        #[allow(clippy::cast_possible_truncation)]
        let low = (0xDC00 | (value & 0x3FF)) as u16;
        let [h0, h1] = high.to_le_bytes();
        let [l0, l1] = low.to_le_bytes();
        put_bytes(dst, &[h0, h1, l0, l1])
    }
}
