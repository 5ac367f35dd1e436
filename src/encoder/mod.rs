//! Record encoder.
//!
//! Length specifiers and payloads are collected in two separate bit streams.
//! The payload stream is then appended to the specifier stream bit-for-bit,
//! so the output is every specifier in field order followed by every payload
//! in field order, zero-padded to a byte boundary.
//!
//! # Example
//!
//! ```
//! use fwvarint::encoder::{encode, encoded_bit_len};
//! use fwvarint::CodecOptions;
//!
//! let bytes = encode(&[3, 3], &[0, 5]).unwrap();
//! assert_eq!(bytes, [0x0D]);
//! assert_eq!(encoded_bit_len(&[3, 3], &[0, 5], &CodecOptions::default()).unwrap(), 8);
//! ```

use log::{debug, warn};

use crate::bit_width;
use crate::bitstream::BitWriter;
use crate::error::{Error, Result};
use crate::field_widths;
use crate::length_specifier;
use crate::options::{CodecOptions, MAX_FIELD_WIDTH};

/// Encodes `values` using the width budgets in `field_widths`, with default
/// options.
///
/// Fails with [`Error::CountMismatch`] if the slices differ in length,
/// [`Error::ZeroFieldWidth`] or [`Error::FieldWidthTooLarge`] for an invalid
/// width, and [`Error::ValueTooLarge`] if a value's natural width exceeds
/// `2^w - 1` for its field.
pub fn encode(field_widths: &[u8], values: &[u32]) -> Result<Vec<u8>> {
    encode_with_options(field_widths, values, &CodecOptions::default())
}

/// Like [`encode`], with explicit options.
pub fn encode_with_options(
    field_widths: &[u8],
    values: &[u32],
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    match encode_fields(field_widths, values, options) {
        Ok(bytes) => {
            debug!(
                "encoded {} fields into {} bytes",
                values.len(),
                bytes.len()
            );
            Ok(bytes)
        }
        Err(err) => {
            debug!("encode rejected: {err}");
            Err(err)
        }
    }
}

/// Returns the exact number of bits `encode` would produce before byte
/// padding, performing the same validation but writing nothing.
pub fn encoded_bit_len(
    field_widths: &[u8],
    values: &[u32],
    options: &CodecOptions,
) -> Result<usize> {
    check_counts(field_widths, values)?;
    let mut bits = 0usize;
    for (index, (&field_width, &value)) in field_widths.iter().zip(values).enumerate() {
        let natural = checked_natural_width(index, field_width, value, options)?;
        bits += field_width as usize + natural.saturating_sub(1) as usize;
    }
    Ok(bits)
}

fn encode_fields(field_widths: &[u8], values: &[u32], options: &CodecOptions) -> Result<Vec<u8>> {
    check_counts(field_widths, values)?;

    let mut specifiers = BitWriter::with_capacity(field_widths.len() * 5);
    let mut payload = BitWriter::with_capacity(field_widths.len() * 4);
    let mut wide_fields = 0usize;

    for (index, (&field_width, &value)) in field_widths.iter().zip(values).enumerate() {
        let natural = checked_natural_width(index, field_width, value, options)?;
        if field_width > MAX_FIELD_WIDTH {
            wide_fields += 1;
        }
        length_specifier::encode(&mut specifiers, natural, field_width);
        payload.append_bits_dropping_leading_one(value, natural);
    }

    if wide_fields > 0 {
        warn!(
            "{wide_fields} field(s) wider than {MAX_FIELD_WIDTH} bits, high specifier bits are always zero"
        );
    }

    // Nur die tatsächlich geschriebenen Payload-Bits übernehmen, nicht das Padding.
    let payload_bits = payload.bit_position();
    let payload = payload.finish();
    specifiers.append_stream(&payload, payload_bits);
    Ok(specifiers.finish())
}

fn check_counts(field_widths: &[u8], values: &[u32]) -> Result<()> {
    if field_widths.len() != values.len() {
        return Err(Error::CountMismatch {
            fields: field_widths.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// Validates one field and returns the natural width of its value.
fn checked_natural_width(
    index: usize,
    field_width: u8,
    value: u32,
    options: &CodecOptions,
) -> Result<u8> {
    field_widths::check(index, field_width, options)?;
    let natural = bit_width::natural(value);
    if u32::from(natural) > bit_width::max_specifier(field_width) {
        return Err(Error::ValueTooLarge {
            index,
            value,
            field_width,
        });
    }
    Ok(natural)
}
