//! fwvarint – field-width varints for small, skewed integer records
//!
//! Every field of a record reserves a fixed number of bits, its width budget,
//! for a length specifier: the natural bit width of the value. The value
//! follows with that many bits minus its leading one, which is implicit. A
//! zero costs only the specifier bits.
//!
//! The encoded buffer holds all specifiers in field order, then all payloads
//! in field order, zero-padded to a byte boundary. It carries no header; the
//! same field-width descriptor must be supplied to decode it.
//!
//! # Example
//!
//! ```
//! // Aktionstyp, Akteurtyp, Akteur-ID, Objekttyp, Objekt-ID
//! let fields = [3, 3, 6, 3, 6];
//! let values = [1, 5, 1_128_411, 2, 123_456_789];
//!
//! let bytes = fwvarint::encode(&fields, &values).unwrap();
//! assert_eq!(bytes.len(), 9);
//!
//! let decoded = fwvarint::decode(&fields, &bytes).unwrap();
//! assert_eq!(decoded, values);
//! ```

pub mod bit_width;
pub mod bitstream;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod field_widths;
pub mod length_specifier;
pub mod options;

pub use error::{Error, Result};

// Public API: Encoder/Decoder
pub use decoder::{decode, decode_with_options};
pub use encoder::{encode, encode_with_options, encoded_bit_len};

// Public API: Configuration
pub use field_widths::FieldWidths;
pub use options::{CodecOptions, WideFieldPolicy, MAX_FIELD_WIDTH};
