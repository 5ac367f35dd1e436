//! Natural bit widths of `u32` values.
//!
//! The natural width of a value is the minimum number of bits needed to
//! represent it: the position of the highest set bit plus one, and 0 for the
//! value 0. A field of width `w` can address natural widths `0..=2^w - 1`.

/// Largest natural width a `u32` can have.
pub const MAX_NATURAL_WIDTH: u8 = 32;

/// Returns the natural width of `x`: highest set bit + 1, or 0 for `x = 0`.
///
/// - `x = 0`: 0
/// - `x = 1`: 1
/// - `x = 2..3`: 2
/// - `x = 4..7`: 3
/// - `x >= 2^31`: 32
#[inline]
pub fn natural(x: u32) -> u8 {
    if x == 0 {
        return 0;
    }
    // Binäre Halbierung: obere Hälfte leer -> Breite verringern, nach oben schieben.
    let mut x = x;
    let mut width = 32u8;
    if x & 0xFFFF_0000 == 0 {
        width -= 16;
        x <<= 16;
    }
    if x & 0xFF00_0000 == 0 {
        width -= 8;
        x <<= 8;
    }
    if x & 0xF000_0000 == 0 {
        width -= 4;
        x <<= 4;
    }
    if x & 0xC000_0000 == 0 {
        width -= 2;
        x <<= 2;
    }
    if x & 0x8000_0000 == 0 {
        width -= 1;
    }
    width
}

/// Largest length specifier a field of `field_width` bits can hold: `2^w - 1`.
///
/// Saturates at `u32::MAX` for `field_width >= 32`.
#[inline]
pub fn max_specifier(field_width: u8) -> u32 {
    if field_width >= 32 {
        u32::MAX
    } else {
        (1u32 << field_width) - 1
    }
}

/// Returns `true` if the natural width of `value` is addressable by a field
/// of `field_width` bits.
#[inline]
pub fn fits(value: u32, field_width: u8) -> bool {
    u32::from(natural(value)) <= max_specifier(field_width)
}
