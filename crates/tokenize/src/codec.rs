use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::config::CodecConfig;
use crate::decode::parse_id_list;
use crate::dictionary::{StaticDictionary, TokenId};
use crate::error::ConfigError;
use crate::segment::tokenize;
use crate::token::{ids_to_string, DisplayColor, Token};

/// Text <-> token ID codec.
///
/// Owns the runtime-learned vocabulary and the reverse index used by
/// [`Codec::decode`]. The static dictionary is shared process-wide and never
/// mutated. Learned entries grow monotonically until [`Codec::reset`].
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    dictionary: &'static StaticDictionary,
    dynamic: HashMap<String, TokenId>,
    reverse: HashMap<TokenId, String>,
}

/// Copy of every vocabulary tier, ordered for stable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularySnapshot {
    /// static dictionary entries
    pub common: BTreeMap<String, TokenId>,
    /// entries learned since the last reset
    pub dynamic: BTreeMap<String, TokenId>,
    /// ID -> text as used by decode
    pub reverse: BTreeMap<TokenId, String>,
}

/// Counters describing one encode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    /// characters (Unicode scalar values) in the input
    pub characters: usize,
    /// tokens produced
    pub tokens: usize,
    /// tokens resolved through the static dictionary
    pub common: usize,
    /// tokens resolved through the dynamic vocabulary
    pub dynamic: usize,
}

impl EncodeStats {
    /// Count `tokens` produced from `text`.
    pub fn from_tokens(text: &str, tokens: &[Token]) -> Self {
        let common = tokens.iter().filter(|t| t.is_common).count();
        Self {
            characters: text.chars().count(),
            tokens: tokens.len(),
            common,
            dynamic: tokens.len() - common,
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// Codec with the default configuration and an empty learned vocabulary.
    pub fn new() -> Self {
        Self::from_valid_config(CodecConfig::default())
    }

    /// Codec with an explicit configuration.
    ///
    /// Fails when the dynamic ID offset would let learned IDs overwrite
    /// dictionary IDs in the reverse index.
    pub fn with_config(config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CodecConfig) -> Self {
        let dictionary = StaticDictionary::global();
        Self {
            config,
            dictionary,
            dynamic: HashMap::new(),
            reverse: static_reverse(dictionary),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// ID derived from content alone: sum of UTF-16 code units plus the offset.
    ///
    /// Anagrams and other equal-sum strings collide.
    pub fn generate_id(&self, text: &str) -> TokenId {
        text.encode_utf16()
            .map(TokenId::from)
            .sum::<TokenId>()
            .saturating_add(self.config.dynamic_id_offset)
    }

    /// Resolve the ID of one token, learning it if it has never been seen.
    ///
    /// Order: exact dictionary match, lowercase dictionary match, learned
    /// entry, then a freshly generated ID which is recorded in both the
    /// learned vocabulary and the reverse index.
    pub fn token_id(&mut self, text: &str) -> TokenId {
        if let Some(id) = self.dictionary.get_folded(text, self.config.case_fold) {
            return id;
        }
        if let Some(id) = self.dynamic.get(text) {
            return *id;
        }
        let id = self.generate_id(text);
        if let Some(prev) = self.reverse.get(&id) {
            log::warn!("dynamic id {} collides: {:?} replaces {:?}", id, text, prev);
        }
        log::debug!("learned {:?} -> {}", text, id);
        self.dynamic.insert(text.to_string(), id);
        self.reverse.insert(id, text.to_string());
        id
    }

    /// Dictionary membership, exact or lowercase.
    pub fn is_in_dictionary(&self, text: &str) -> bool {
        self.dictionary.get_folded(text, self.config.case_fold).is_some()
    }

    /// Segment `text` and assign every segment an ID, in input order.
    pub fn encode(&mut self, text: &str) -> Vec<Token> {
        tokenize(text)
            .into_iter()
            .enumerate()
            .map(|(index, segment)| Token {
                id: self.token_id(segment),
                text: segment.to_string(),
                is_common: self.is_in_dictionary(segment),
                color: DisplayColor::for_index(index),
            })
            .collect()
    }

    /// Encode and render the IDs as a `", "`-joined list.
    pub fn encode_ids(&mut self, text: &str) -> String {
        ids_to_string(&self.encode(text))
    }

    /// Encode and count what happened.
    pub fn encode_with_stats(&mut self, text: &str) -> (Vec<Token>, EncodeStats) {
        let tokens = self.encode(text);
        let stats = EncodeStats::from_tokens(text, &tokens);
        (tokens, stats)
    }

    /// Rebuild text from a comma-separated ID list.
    ///
    /// Pieces that are not integers are dropped. IDs missing from the
    /// reverse index come back as `[id]`. Never fails.
    pub fn decode(&self, ids: &str) -> String {
        let mut out = String::new();
        for entry in parse_id_list(ids) {
            let id = match entry {
                Ok(id) => id,
                Err(e) => {
                    log::trace!("skipping decode entry: {}", e);
                    continue;
                }
            };
            match self.lookup(id) {
                Some(text) => out.push_str(text),
                None => {
                    out.push('[');
                    out.push_str(&id.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    /// Reverse-index lookup; negative IDs never resolve.
    pub fn lookup(&self, id: i64) -> Option<&str> {
        let id = TokenId::try_from(id).ok()?;
        self.reverse.get(&id).map(String::as_str)
    }

    /// Drop every learned entry and rebuild the reverse index from the dictionary.
    pub fn reset(&mut self) {
        log::info!("reset: dropping {} learned entries", self.dynamic.len());
        self.dynamic.clear();
        self.reverse = static_reverse(self.dictionary);
    }

    /// Number of static dictionary entries.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Dictionary entries plus learned entries.
    pub fn total_vocab_size(&self) -> usize {
        self.dictionary.len() + self.dynamic.len()
    }

    /// Number of learned entries.
    pub fn dynamic_size(&self) -> usize {
        self.dynamic.len()
    }

    /// Copy of all three tables.
    pub fn vocabulary(&self) -> VocabularySnapshot {
        VocabularySnapshot {
            common: self
                .dictionary
                .iter()
                .map(|(text, id)| (text.to_string(), id))
                .collect(),
            dynamic: self.dynamic.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            reverse: self.reverse.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }
}

fn static_reverse(dictionary: &StaticDictionary) -> HashMap<TokenId, String> {
    dictionary.iter().map(|(text, id)| (id, text.to_string())).collect()
}

/// A [`Codec`] behind a mutex, for hosts that encode from several threads.
///
/// Every call holds the lock for its whole duration, so the lookup and
/// insert inside [`Codec::token_id`] never interleave.
#[derive(Debug, Default)]
pub struct SharedCodec {
    inner: Mutex<Codec>,
}

impl SharedCodec {
    /// Wrap an existing codec.
    pub fn new(codec: Codec) -> Self {
        Self {
            inner: Mutex::new(codec),
        }
    }

    /// Run `f` with exclusive access to the codec.
    pub fn with<R>(&self, f: impl FnOnce(&mut Codec) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// See [`Codec::encode`].
    pub fn encode(&self, text: &str) -> Vec<Token> {
        self.with(|c| c.encode(text))
    }

    /// See [`Codec::decode`].
    pub fn decode(&self, ids: &str) -> String {
        self.with(|c| c.decode(ids))
    }

    /// See [`Codec::reset`].
    pub fn reset(&self) {
        self.with(Codec::reset)
    }
}
