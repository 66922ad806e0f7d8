#![forbid(unsafe_code)]

//! HTTP front end: one shared codec, one thread per request.

use std::io::Read;
use std::sync::Arc;
use std::thread;

use env_logger::Env;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tokenize::SharedCodec;

mod error;
mod routes;

use error::ServerError;
use routes::Reply;

const DEFAULT_ADDR: &str = "0.0.0.0:3030";

/// Largest request body accepted, in bytes.
const MAX_BODY: u64 = 1 << 20;

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn bind_addr() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TOKENIZE_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

fn header(name: &str, value: &str) -> Result<Header, ServerError> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).map_err(|_| ServerError::Header)
}

fn serve(codec: &SharedCodec, mut req: Request) -> Result<(), ServerError> {
    let method = req.method().as_str().to_string();
    let url = req.url().to_string();
    let mut raw = Vec::new();
    Read::take(req.as_reader(), MAX_BODY + 1).read_to_end(&mut raw)?;

    let reply = match routes::body_text(raw, MAX_BODY) {
        Ok(body) => routes::route(codec, &method, &url, &body),
        Err(reply) => {
            log::warn!("{} {}: rejected body ({})", method, url, reply.status);
            reply
        }
    };
    respond(req, reply)
}

fn respond(req: Request, reply: Reply) -> Result<(), ServerError> {
    let content_type = if reply.json { "application/json" } else { "text/plain; charset=utf-8" };
    let response = Response::from_string(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(header("Content-Type", content_type)?)
        .with_header(header("Access-Control-Allow-Origin", "*")?);
    req.respond(response)?;
    Ok(())
}

fn main() -> Result<(), ServerError> {
    init_logging();
    let codec = Arc::new(SharedCodec::default());
    let addr = bind_addr();

    let server = Server::http(&addr).map_err(|e| ServerError::Bind(e.to_string()))?;
    log::info!("Server running on http://{}", addr);

    for request in server.incoming_requests() {
        let codec = codec.clone();
        thread::spawn(move || {
            if let Err(e) = serve(&codec, request) {
                log::error!("request failed: {}", e);
            }
        });
    }

    Ok(())
}
