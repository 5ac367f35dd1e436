//! Codec options.
//!
//! The default options accept field widths `1..=32` only. A width above 32
//! can never be exhausted by a `u32` value, so it only wastes bits; callers
//! carrying descriptors from older producers can opt into accepting them.

/// Largest field width accepted under [`WideFieldPolicy::Reject`].
pub const MAX_FIELD_WIDTH: u8 = 32;

/// How field widths above [`MAX_FIELD_WIDTH`] are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WideFieldPolicy {
    /// Widths above 32 fail with [`Error::FieldWidthTooLarge`](crate::Error::FieldWidthTooLarge).
    #[default]
    Reject,
    /// Widths up to 255 are accepted. The length specifier is stored in the
    /// full width with zero high bits; on decode those bits must read back
    /// as zero.
    Allow,
}

/// Options shared by encoder and decoder.
///
/// Both sides must use the same options, like the field-width descriptor
/// itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodecOptions {
    /// Behandlung von Feldbreiten > 32.
    pub wide_fields: WideFieldPolicy,
}

impl CodecOptions {
    /// Options accepting any non-zero field width.
    pub fn permissive() -> Self {
        Self {
            wide_fields: WideFieldPolicy::Allow,
        }
    }

    /// Returns a copy with the given wide-field policy.
    pub fn with_wide_fields(mut self, policy: WideFieldPolicy) -> Self {
        self.wide_fields = policy;
        self
    }

    /// Returns `true` if widths above 32 are accepted.
    pub fn allows_wide_fields(&self) -> bool {
        self.wide_fields == WideFieldPolicy::Allow
    }
}
