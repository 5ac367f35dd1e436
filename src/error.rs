//! Central error type for encoding and decoding field-width varints.
//!
//! Every failure is reported synchronously and the call produces no partial
//! output. Variants carry the field index so that a schema mismatch can be
//! traced back to a position in the descriptor.

use core::fmt;

/// All errors produced by [`encode`](crate::encode) and [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The number of field widths differs from the number of values.
    CountMismatch {
        /// Anzahl der Feldbreiten im Deskriptor.
        fields: usize,
        /// Anzahl der übergebenen Werte.
        values: usize,
    },
    /// A field width of 0 was supplied. Every field needs at least one bit
    /// for its length specifier.
    ZeroFieldWidth { index: usize },
    /// A field width above 32 was supplied while wide fields are rejected
    /// (see [`WideFieldPolicy`](crate::WideFieldPolicy)).
    FieldWidthTooLarge { index: usize, width: u8 },
    /// The natural width of a value exceeds `2^field_width - 1`, so its
    /// length specifier cannot be stored in the field.
    ValueTooLarge {
        index: usize,
        value: u32,
        field_width: u8,
    },
    /// The input ended before the bit layout implied by the descriptor was
    /// fully read. Truncated input or a descriptor that does not match the
    /// one used for encoding.
    OutOfData {
        /// Angeforderte Bits.
        needed: usize,
        /// Noch verfügbare Bits im Puffer.
        available: usize,
    },
    /// A decoded length specifier is larger than 32, which no `u32` value can
    /// produce. Saturated at `u32::MAX` for fields wider than 32 bits.
    InvalidLengthSpecifier { index: usize, specifier: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch { fields, values } => write!(
                f,
                "mismatched field and value count, got {fields} fields and {values} values"
            ),
            Self::ZeroFieldWidth { index } => write!(f, "invalid zero field width at field {index}"),
            Self::FieldWidthTooLarge { index, width } => write!(
                f,
                "field width {width} at field {index} exceeds the maximum of 32 bits"
            ),
            Self::ValueTooLarge { index, value, field_width } => write!(
                f,
                "value {value} too large for field width {field_width} (field {index})"
            ),
            Self::OutOfData { needed, available } => write!(
                f,
                "ran out of data: needed {needed} bits, {available} bits remaining"
            ),
            Self::InvalidLengthSpecifier { index, specifier } => {
                if *specifier == u32::MAX {
                    write!(f, "length specifier of field {index} does not fit in 32 bits")
                } else {
                    write!(
                        f,
                        "length specifier {specifier} of field {index} exceeds 32 bits"
                    )
                }
            }
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
