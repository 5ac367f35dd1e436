//! Bit-level stream reader and writer.
//!
//! Bits are packed MSB first: within each byte, bit 7 is written and read
//! first. Both sides keep a cursor made of the byte currently being filled
//! (or consumed) and the number of bits of that byte already used, so that
//! consecutive appends pack tightly and runs may span any number of byte
//! boundaries.

use crate::{Error, Result};

/// Appends variable-width bit runs to a growable byte buffer, MSB first.
///
/// Noch nicht vollständige Bytes werden in `pending` gesammelt und erst bei
/// 8 belegten Bits in `buf` übernommen.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    /// Teilweise gefülltes Byte, belegt von Bit 7 abwärts.
    pending: u8,
    /// Anzahl belegter Bits in `pending` (0..8).
    bit_offset: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer whose buffer can hold `bytes` completed bytes without
    /// reallocating.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            pending: 0,
            bit_offset: 0,
        }
    }

    /// Writes the `width` least significant bits of `value`, MSB first.
    /// When `width` is 0 this is a no-op. Higher bits of `value` are ignored.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `width > 32`.
    #[inline]
    pub fn append_bits(&mut self, value: u32, width: u8) {
        debug_assert!(width <= 32, "bit count must be 0..=32, got {width}");
        let mut remaining = width;
        while remaining > 0 {
            let free = 8 - self.bit_offset;
            let take = remaining.min(free);
            // Die nächsten `take` Bits von oben aus dem verbleibenden Lauf.
            let chunk = ((value >> (remaining - take)) & ((1u32 << take) - 1)) as u8;
            self.pending |= chunk << (free - take);
            self.bit_offset += take;
            remaining -= take;
            if self.bit_offset == 8 {
                self.buf.push(self.pending);
                self.pending = 0;
                self.bit_offset = 0;
            }
        }
    }

    /// Writes the low `width - 1` bits of `value`, treating bit `width - 1`
    /// as an implicit, unstored one. Writes nothing when `width <= 1`: a zero
    /// value has no payload, and the single bit of the value 1 is implicit.
    ///
    /// The caller guarantees that bit `width - 1` of `value` is set whenever
    /// `width >= 2`, which holds when `width` is the natural width of `value`.
    #[inline]
    pub fn append_bits_dropping_leading_one(&mut self, value: u32, width: u8) {
        if width <= 1 {
            return;
        }
        debug_assert!(
            (value >> (width - 1)) & 1 == 1,
            "leading bit {} of {value:#x} is not set",
            width - 1
        );
        self.append_bits(value, width - 1);
    }

    /// Re-emits the first `bits` bits of an already finished buffer at the
    /// current cursor. Padding bits past `bits` are not copied, which lets two
    /// logical streams be joined bit-for-bit rather than byte-for-byte.
    pub fn append_stream(&mut self, bytes: &[u8], bits: usize) {
        debug_assert!(
            bits <= bytes.len() * 8,
            "{bits} bits requested from a {}-byte stream",
            bytes.len()
        );
        let mut remaining = bits;
        for &byte in bytes {
            if remaining == 0 {
                break;
            }
            if remaining >= 8 {
                self.append_bits(u32::from(byte), 8);
                remaining -= 8;
            } else {
                // Letztes, nur teilweise gültiges Byte: Padding abschneiden.
                self.append_bits(u32::from(byte >> (8 - remaining)), remaining as u8);
                remaining = 0;
            }
        }
    }

    /// Returns the number of bits written so far.
    pub fn bit_position(&self) -> usize {
        self.buf.len() * 8 + self.bit_offset as usize
    }

    /// Returns the number of bits held in the partial byte (0..8).
    pub fn pending_bits(&self) -> u8 {
        self.bit_offset
    }

    /// Returns `true` if the cursor sits on a byte boundary.
    pub fn is_aligned(&self) -> bool {
        self.bit_offset == 0
    }

    /// Finalises the writer, padding the partial byte with zero bits, and
    /// returns the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_offset > 0 {
            self.buf.push(self.pending);
        }
        self.buf
    }
}

/// Consumes variable-width bit runs from a byte slice, MSB first.
///
/// Mirror image of [`BitWriter`]: `byte_pos` addresses the byte currently
/// being consumed and `bit_offset` counts its bits already read.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index des aktuell gelesenen Bytes in `data`.
    byte_pos: usize,
    /// Bereits gelesene Bits von `data[byte_pos]` (0..8).
    bit_offset: u8,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_offset: 0,
        }
    }

    /// Reads `width` bits and returns them as a `u32`, MSB first.
    /// When `width` is 0 this is a no-op returning 0.
    ///
    /// On [`Error::OutOfData`] the cursor is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `width > 32`.
    #[inline]
    pub fn take_bits(&mut self, width: u8) -> Result<u32> {
        debug_assert!(width <= 32, "bit count must be 0..=32, got {width}");
        if width == 0 {
            return Ok(0);
        }
        let available = self.remaining_bits();
        if width as usize > available {
            return Err(Error::OutOfData {
                needed: width as usize,
                available,
            });
        }

        let mut value = 0u32;
        let mut remaining = width;
        while remaining > 0 {
            let current = self.data[self.byte_pos];
            let left = 8 - self.bit_offset;
            let take = remaining.min(left);
            let chunk = (current >> (left - take)) & ((1u16 << take) - 1) as u8;
            value = (value << take) | u32::from(chunk);
            self.bit_offset += take;
            remaining -= take;
            if self.bit_offset == 8 {
                self.byte_pos += 1;
                self.bit_offset = 0;
            }
        }
        Ok(value)
    }

    /// Reads `width - 1` bits and sets bit `width - 1` of the result,
    /// restoring the leading one dropped by
    /// [`BitWriter::append_bits_dropping_leading_one`]. Returns 0 without
    /// consuming anything when `width` is 0.
    #[inline]
    pub fn take_bits_with_implied_leading_one(&mut self, width: u8) -> Result<u32> {
        if width == 0 {
            return Ok(0);
        }
        debug_assert!(width <= 32, "bit count must be 0..=32, got {width}");
        let low = self.take_bits(width - 1)?;
        Ok(low | (1u32 << (width - 1)))
    }

    /// Returns the current bit position.
    pub fn bit_position(&self) -> usize {
        self.byte_pos * 8 + self.bit_offset as usize
    }

    /// Returns the number of bits remaining to be read.
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() - self.byte_pos) * 8 - self.bit_offset as usize
    }
}
