//! Decoder configuration.

/// Largest auxiliary buffer MAPI/HTTP allows in a response body.
pub const MAX_AUXILIARY_BUFFER_SIZE: u32 = 0x1008;

/// Limits applied to length-prefixed fields while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeLimits {
    /// Maximum accepted `AuxiliaryBufferSize`.
    pub max_auxiliary_buffer_size: u32,
}

impl DecodeLimits {
    /// Creates limits matching the protocol maximums.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_auxiliary_buffer_size: MAX_AUXILIARY_BUFFER_SIZE,
        }
    }

    /// Creates limits that only reject lengths running past the buffer.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_auxiliary_buffer_size: u32::MAX,
        }
    }

    /// Sets the maximum auxiliary buffer size.
    #[must_use]
    pub const fn max_auxiliary_buffer_size(mut self, size: u32) -> Self {
        self.max_auxiliary_buffer_size = size;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::new()
    }
}
