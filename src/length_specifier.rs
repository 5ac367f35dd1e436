//! Length specifiers: the natural width of a value, stored as an unsigned
//! integer in exactly `field_width` bits.
//!
//! Fields wider than 32 bits (accepted only under
//! [`WideFieldPolicy::Allow`](crate::WideFieldPolicy::Allow)) carry zero high
//! bits in front of a 32-bit specifier.

use crate::Result;
use crate::bitstream::{BitReader, BitWriter};

/// Writes `natural_width` in exactly `field_width` bits.
#[inline]
pub fn encode(writer: &mut BitWriter, natural_width: u8, field_width: u8) {
    debug_assert!(field_width > 0, "field width must be non-zero");
    let mut width = field_width;
    while width > 32 {
        let zeros = (width - 32).min(32);
        writer.append_bits(0, zeros);
        width -= zeros;
    }
    writer.append_bits(u32::from(natural_width), width);
}

/// Reads a length specifier of `field_width` bits.
///
/// For fields wider than 32 bits a non-zero high part saturates the result to
/// `u32::MAX`; the caller rejects anything above 32 anyway.
#[inline]
pub fn decode(reader: &mut BitReader, field_width: u8) -> Result<u32> {
    let mut width = field_width;
    let mut overflow = false;
    while width > 32 {
        let high = (width - 32).min(32);
        overflow |= reader.take_bits(high)? != 0;
        width -= high;
    }
    let specifier = reader.take_bits(width)?;
    Ok(if overflow { u32::MAX } else { specifier })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(natural_width: u8, field_width: u8) -> u32 {
        let mut w = BitWriter::new();
        encode(&mut w, natural_width, field_width);
        assert_eq!(w.bit_position(), field_width as usize);
        let data = w.finish();
        let mut r = BitReader::new(&data);
        decode(&mut r, field_width).unwrap()
    }

    #[test]
    fn zero_specifier_fills_field() {
        let mut w = BitWriter::new();
        encode(&mut w, 0, 9);
        assert_eq!(w.finish(), vec![0, 0]);
    }

    #[test]
    fn narrow_fields() {
        assert_eq!(round_trip(1, 1), 1);
        assert_eq!(round_trip(3, 2), 3);
        for nw in 0..=7 {
            assert_eq!(round_trip(nw, 3), u32::from(nw));
        }
    }

    #[test]
    fn six_bit_field_holds_every_natural_width() {
        for nw in 0..=32 {
            assert_eq!(round_trip(nw, 6), u32::from(nw));
        }
    }

    #[test]
    fn wide_fields_pad_high_bits() {
        assert_eq!(round_trip(32, 33), 32);
        assert_eq!(round_trip(17, 64), 17);
        assert_eq!(round_trip(5, 65), 5);
        assert_eq!(round_trip(32, 255), 32);

        let mut w = BitWriter::new();
        encode(&mut w, 1, 40);
        // 39 Nullbits, dann die Eins
        assert_eq!(w.finish(), vec![0, 0, 0, 0, 0x01]);
    }

    #[test]
    fn wide_field_with_high_bits_saturates() {
        let data = [0x80, 0, 0, 0, 0];
        let mut r = BitReader::new(&data);
        assert_eq!(decode(&mut r, 40).unwrap(), u32::MAX);
        assert_eq!(r.bit_position(), 40);
    }

    #[test]
    fn decode_out_of_data() {
        let mut r = BitReader::new(&[]);
        assert!(matches!(
            decode(&mut r, 6),
            Err(crate::Error::OutOfData { needed: 6, available: 0 })
        ));
    }
}
