use serde::{Deserialize, Serialize};
use tokenize::{ids_to_string, EncodeStats, SharedCodec, Token, VocabularySnapshot};

use crate::error::ServerError;

#[derive(Deserialize)]
struct EncodeRequest {
    text: String,
}

#[derive(Serialize)]
struct EncodeResponse {
    tokens: Vec<Token>,
    ids: String,
    stats: EncodeStats,
}

#[derive(Deserialize)]
struct DecodeRequest {
    ids: String,
}

#[derive(Serialize)]
struct DecodeResponse {
    text: String,
}

#[derive(Serialize)]
struct SizeResponse {
    dictionary_size: usize,
    total_vocab_size: usize,
}

/// Result of routing one request.
#[derive(Debug, PartialEq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// response body
    pub body: String,
    /// true when `body` is JSON
    pub json: bool,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            json: false,
        }
    }

    fn json<T: Serialize>(value: &T) -> Result<Self, ServerError> {
        Ok(Self {
            status: 200,
            body: serde_json::to_string(value)?,
            json: true,
        })
    }
}

/// Turn a raw request body into text, or the error reply to send instead.
///
/// Bodies over `limit` bytes get 413; bodies that are not UTF-8 get 400.
pub fn body_text(raw: Vec<u8>, limit: u64) -> Result<String, Reply> {
    if raw.len() as u64 > limit {
        return Err(Reply::text(413, "Payload Too Large"));
    }
    String::from_utf8(raw).map_err(|_| Reply::text(400, "Bad Request"))
}

fn sizes(codec: &SharedCodec) -> SizeResponse {
    codec.with(|c| SizeResponse {
        dictionary_size: c.dictionary_size(),
        total_vocab_size: c.total_vocab_size(),
    })
}

/// Dispatch `method` + `url` with `body` against the shared codec.
pub fn route(codec: &SharedCodec, method: &str, url: &str, body: &str) -> Reply {
    let result = match (method, url) {
        ("GET", "/health") => Ok(Reply::text(200, "OK")),
        ("POST", "/encode") => serde_json::from_str::<EncodeRequest>(body)
            .map_err(ServerError::from)
            .and_then(|req| {
                let (tokens, stats) = codec.with(|c| c.encode_with_stats(&req.text));
                let ids = ids_to_string(&tokens);
                Reply::json(&EncodeResponse { tokens, ids, stats })
            }),
        ("POST", "/decode") => serde_json::from_str::<DecodeRequest>(body)
            .map_err(ServerError::from)
            .and_then(|req| Reply::json(&DecodeResponse {
                text: codec.decode(&req.ids),
            })),
        ("POST", "/reset") => {
            codec.reset();
            Reply::json(&sizes(codec))
        }
        ("GET", "/stats") => Reply::json(&sizes(codec)),
        ("GET", "/vocab") => {
            let snapshot: VocabularySnapshot = codec.with(|c| c.vocabulary());
            Reply::json(&snapshot)
        }
        _ => return Reply::text(404, "Not Found"),
    };
    result.unwrap_or_else(|e| {
        log::warn!("{} {}: {}", method, url, e);
        Reply::text(400, "Bad Request")
    })
}
