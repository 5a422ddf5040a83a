//! Stateless UTF-32 decoding and encoding, little-endian, no BOM.

use crate::coding::{put_bytes, Decode, Encode};
use crate::error::{ConversionError, Result};

/// The little-endian UTF-32 codec, also serving UCS-4 streams.
#[derive(Debug, Default)]
pub struct Utf32Codec;

impl Decode for Utf32Codec {
    fn read(&mut self, src: &mut &[u8]) -> Result<Option<u32>> {
        let input = *src;
        if input.is_empty() {
            return Ok(None);
        }
        if input.len() < 4 {
            return Err(ConversionError::InvalidArgument(
                "UTF-32 unit cut off by end of input".to_string(),
            ));
        }

        let unicode = u32::from_le_bytes([input[0], input[1], input[2], input[3]]);
        if unicode > 0x10_FFFF || (0xD800..=0xDFFF).contains(&unicode) {
            return Err(ConversionError::IllegalSequence(format!(
                "0x{unicode:08X} is not a Unicode scalar value"
            )));
        }

        *src = &input[4..];
        Ok(Some(unicode))
    }
}

impl Encode for Utf32Codec {
    fn write(&mut self, unicode: u32, dst: &mut &mut [u8]) -> Result<()> {
        if unicode > 0x10_FFFF || (0xD800..=0xDFFF).contains(&unicode) {
            return Err(ConversionError::IllegalSequence(format!(
                "U+{unicode:04X} cannot be encoded as UTF-32"
            )));
        }
        put_bytes(dst, &unicode.to_le_bytes())
    }
}
