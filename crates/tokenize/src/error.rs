/// Why one comma-separated piece of a decode request was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeEntryError {
    /// piece has no leading integer
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    /// digits present but the value does not fit in an i64
    #[error("integer out of range: {0:?}")]
    OutOfRange(String),
}

/// Rejected codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// dynamic IDs would overlap the static dictionary range
    #[error("dynamic id offset {0} is below 1000")]
    OffsetTooLow(crate::dictionary::TokenId),
}
