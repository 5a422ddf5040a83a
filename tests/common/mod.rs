//! Shared helpers for the integration test suites.

use marconv::Converter;

/// Convert an entire input through a fresh descriptor, flushing at the end.
pub fn convert_all(to: &str, from: &str, input: &[u8]) -> marconv::Result<Vec<u8>> {
    let mut converter = Converter::open(to, from)?;
    convert_with(&mut converter, input)
}

/// Convert an entire input through an existing descriptor, flushing at the
/// end. The output buffer is sized so the conversion never runs out of
/// space.
pub fn convert_with(converter: &mut Converter, input: &[u8]) -> marconv::Result<Vec<u8>> {
    let mut output = vec![0u8; input.len() * 4 + 16];
    let capacity = output.len();
    let written = {
        let mut src = input;
        let mut dst: &mut [u8] = &mut output;
        while !src.is_empty() {
            converter.convert(&mut src, &mut dst)?;
        }
        converter.flush(&mut dst)?;
        capacity - dst.len()
    };
    output.truncate(written);
    Ok(output)
}
