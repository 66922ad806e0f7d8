use crate::dictionary::{TokenId, DYNAMIC_ID_OFFSET};
use crate::error::ConfigError;

/// Codec configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// added to the character-code sum of an unseen string; at least
    /// `DYNAMIC_ID_OFFSET` so learned IDs never land on dictionary IDs
    pub dynamic_id_offset: TokenId,
    /// retry dictionary lookups with the lowercase form
    pub case_fold: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            dynamic_id_offset: DYNAMIC_ID_OFFSET,
            case_fold: true,
        }
    }
}

impl CodecConfig {
    /// Check that learned IDs stay clear of the static dictionary range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dynamic_id_offset < DYNAMIC_ID_OFFSET {
            return Err(ConfigError::OffsetTooLow(self.dynamic_id_offset));
        }
        Ok(())
    }
}
