/// Errors raised while serving codec requests.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// listener could not be bound
    #[error("server bind error: {0}")]
    Bind(String),
    /// reading a request or writing a response failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// request body was not the expected JSON, or a reply failed to serialize
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// header construction failed
    #[error("invalid header")]
    Header,
}
