//! Record decoder.
//!
//! Reads every length specifier first, then continues with the same cursor
//! through the payloads, restoring each value's implicit leading one.
//!
//! # Example
//!
//! ```
//! use fwvarint::decoder::decode;
//!
//! let values = decode(&[4, 5], &[0x17, 0x40, 0xE4]).unwrap();
//! assert_eq!(values, [1, 12345]);
//! ```

use log::{debug, warn};

use crate::bit_width::MAX_NATURAL_WIDTH;
use crate::bitstream::BitReader;
use crate::error::{Error, Result};
use crate::field_widths;
use crate::length_specifier;
use crate::options::{CodecOptions, MAX_FIELD_WIDTH};

/// Decodes one value per entry of `field_widths` from `data`, with default
/// options.
///
/// `field_widths` must be the descriptor used for encoding. Fails with
/// [`Error::OutOfData`] if `data` is shorter than the layout implies and with
/// [`Error::InvalidLengthSpecifier`] if a specifier exceeds 32. Trailing
/// padding and any bytes past the layout are ignored.
pub fn decode(field_widths: &[u8], data: &[u8]) -> Result<Vec<u32>> {
    decode_with_options(field_widths, data, &CodecOptions::default())
}

/// Like [`decode`], with explicit options.
pub fn decode_with_options(
    field_widths: &[u8],
    data: &[u8],
    options: &CodecOptions,
) -> Result<Vec<u32>> {
    match decode_fields(field_widths, data, options) {
        Ok(values) => {
            debug!("decoded {} fields from {} bytes", values.len(), data.len());
            Ok(values)
        }
        Err(err) => {
            debug!("decode failed: {err}");
            Err(err)
        }
    }
}

fn decode_fields(field_widths: &[u8], data: &[u8], options: &CodecOptions) -> Result<Vec<u32>> {
    let mut reader = BitReader::new(data);
    let mut naturals = Vec::with_capacity(field_widths.len());
    let mut wide_fields = 0usize;

    // Erster Durchlauf: alle Specifier.
    for (index, &field_width) in field_widths.iter().enumerate() {
        field_widths::check(index, field_width, options)?;
        if field_width > MAX_FIELD_WIDTH {
            wide_fields += 1;
        }
        let specifier = length_specifier::decode(&mut reader, field_width)?;
        if specifier > u32::from(MAX_NATURAL_WIDTH) {
            return Err(Error::InvalidLengthSpecifier { index, specifier });
        }
        naturals.push(specifier as u8);
    }

    if wide_fields > 0 {
        warn!("{wide_fields} field(s) wider than {MAX_FIELD_WIDTH} bits accepted");
    }

    // Zweiter Durchlauf: Payloads direkt im Anschluss.
    naturals
        .into_iter()
        .map(|natural| reader.take_bits_with_implied_leading_one(natural))
        .collect()
}

#[cfg(test)]
mod tests;
