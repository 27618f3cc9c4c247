use std::fmt::Display;

use serde::Serialize;
use worker::{Request, Response, Result};

use crate::api::{ApiError, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS};

/// Attach CORS headers. The request Origin is reflected so the web vault and
/// browser extensions can read the response.
pub fn with_cors(req: &Request, mut resp: Response) -> Result<Response> {
    let origin = req
        .headers()
        .get("Origin")?
        .unwrap_or_else(|| "*".to_string());

    let headers = resp.headers_mut();
    headers.set("Access-Control-Allow-Origin", &origin)?;
    headers.set("Vary", "Origin")?;
    headers.set("Access-Control-Allow-Credentials", "true")?;
    headers.set("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)?;
    headers.set("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)?;

    Ok(resp)
}

pub fn json<T: Serialize>(req: &Request, body: &T) -> Result<Response> {
    with_cors(req, Response::from_json(body)?)
}

pub fn api_error(req: &Request, err: &ApiError) -> Result<Response> {
    let resp = Response::from_json(&err.body())?.with_status(err.status);
    with_cors(req, resp)
}

/// Log the cause and answer with the generic 500 body.
pub fn internal(req: &Request, context: &str, err: &impl Display) -> Result<Response> {
    worker::console_error!("{context}: {err}");
    api_error(req, &ApiError::internal())
}
