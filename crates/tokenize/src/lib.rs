#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Reversible text <-> token ID codec.
//!
//! Text is split on whitespace runs and a fixed set of punctuation marks.
//! Each piece gets an ID from a built-in dictionary (below 1000) or, when
//! unknown, from the sum of its UTF-16 code units plus 1000. Unknown pieces
//! are remembered so `decode` can turn the IDs back into text.
//!
//! Contract: identical vocabulary state + identical input -> identical output.
//!
//! Layout:
//! - `dictionary.rs` - static word table shared by the process
//! - `segment.rs` - lossless regex segmentation
//! - `codec.rs` - `Codec` (learned vocabulary, reverse index) and `SharedCodec`
//! - `decode.rs` - comma-separated ID list parsing
//! - `token.rs` - `Token`, display colours, ID rendering

/// Codec configuration.
pub mod config;
/// Static dictionary and ID constants.
pub mod dictionary;
/// Error types.
pub mod error;
/// Lossless text segmentation.
pub mod segment;
/// Encode output records.
pub mod token;
/// Decode request parsing.
pub mod decode;
/// The codec itself.
pub mod codec;

pub use codec::{Codec, EncodeStats, SharedCodec, VocabularySnapshot};
pub use config::CodecConfig;
pub use decode::parse_id_list;
pub use dictionary::{StaticDictionary, TokenId, DYNAMIC_ID_OFFSET};
pub use error::{ConfigError, DecodeEntryError};
pub use segment::tokenize;
pub use token::{ids_to_string, DisplayColor, Token};
