//! Field-width descriptors.
//!
//! A descriptor is the ordered list of width budgets, one per field. It is
//! never written to the output, so encoder and decoder must agree on it out
//! of band. [`FieldWidths`] validates a descriptor once for callers with a
//! fixed record layout; the free functions accept plain slices and validate
//! on every call.

use std::ops::Deref;

use crate::options::{CodecOptions, MAX_FIELD_WIDTH};
use crate::{Error, Result};

/// Checks a single field width against the options.
#[inline]
pub(crate) fn check(index: usize, width: u8, options: &CodecOptions) -> Result<()> {
    if width == 0 {
        return Err(Error::ZeroFieldWidth { index });
    }
    if width > MAX_FIELD_WIDTH && !options.allows_wide_fields() {
        return Err(Error::FieldWidthTooLarge { index, width });
    }
    Ok(())
}

/// A validated, owned field-width descriptor.
///
/// Dereferences to `[u8]`, so it can be passed wherever a descriptor slice is
/// expected:
///
/// ```
/// use fwvarint::FieldWidths;
///
/// let layout = FieldWidths::new(vec![4u8, 5]).unwrap();
/// let bytes = fwvarint::encode(&layout, &[1, 12345]).unwrap();
/// assert_eq!(bytes, [0x17, 0x40, 0xE4]);
/// assert_eq!(fwvarint::decode(&layout, &bytes).unwrap(), [1, 12345]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldWidths(Vec<u8>);

impl FieldWidths {
    /// Validates `widths` under the default options (`1..=32`).
    pub fn new(widths: impl Into<Vec<u8>>) -> Result<Self> {
        Self::with_options(widths, &CodecOptions::default())
    }

    /// Validates `widths` under the given options.
    pub fn with_options(widths: impl Into<Vec<u8>>, options: &CodecOptions) -> Result<Self> {
        let widths = widths.into();
        for (index, &width) in widths.iter().enumerate() {
            check(index, width, options)?;
        }
        Ok(Self(widths))
    }

    /// Returns the widths as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Total number of length-specifier bits, the minimum encoded size of a
    /// record using this layout.
    pub fn specifier_bits(&self) -> usize {
        self.0.iter().map(|&w| w as usize).sum()
    }

    /// Consumes the descriptor and returns the widths.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for FieldWidths {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for FieldWidths {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for FieldWidths {
    type Error = Error;

    fn try_from(widths: Vec<u8>) -> Result<Self> {
        Self::new(widths)
    }
}

impl TryFrom<&[u8]> for FieldWidths {
    type Error = Error;

    fn try_from(widths: &[u8]) -> Result<Self> {
        Self::new(widths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_descriptor() {
        let fw = FieldWidths::new(vec![3u8, 3, 6, 3, 6]).unwrap();
        assert_eq!(fw.len(), 5);
        assert_eq!(fw.as_slice(), &[3, 3, 6, 3, 6]);
        assert_eq!(fw.specifier_bits(), 21);
    }

    #[test]
    fn empty_descriptor_is_valid() {
        let fw = FieldWidths::new(Vec::<u8>::new()).unwrap();
        assert!(fw.is_empty());
        assert_eq!(fw.specifier_bits(), 0);
    }

    #[test]
    fn zero_width_rejected_with_index() {
        assert_eq!(
            FieldWidths::new(vec![4u8, 0, 2]).unwrap_err(),
            Error::ZeroFieldWidth { index: 1 }
        );
    }

    #[test]
    fn wide_width_rejected_by_default() {
        assert_eq!(
            FieldWidths::new(vec![32u8, 33]).unwrap_err(),
            Error::FieldWidthTooLarge { index: 1, width: 33 }
        );
    }

    #[test]
    fn wide_width_allowed_when_permissive() {
        let fw = FieldWidths::with_options(vec![40u8, 255], &CodecOptions::permissive()).unwrap();
        assert_eq!(fw.specifier_bits(), 295);
    }

    #[test]
    fn zero_width_rejected_even_when_permissive() {
        assert_eq!(
            FieldWidths::with_options(vec![0u8], &CodecOptions::permissive()).unwrap_err(),
            Error::ZeroFieldWidth { index: 0 }
        );
    }

    #[test]
    fn try_from_conversions() {
        let fw = FieldWidths::try_from(vec![1u8, 2]).unwrap();
        assert_eq!(fw.into_inner(), vec![1, 2]);
        assert!(FieldWidths::try_from(&[0u8][..]).is_err());
    }
}
