use worker::{Request, Result};

use crate::api::{check_admin_token, ApiError};
use crate::config::WorkerConfig;
use crate::token::bearer_token;

pub fn request_bearer(req: &Request) -> Result<Option<String>> {
    let header = req.headers().get("Authorization")?;
    Ok(bearer_token(header.as_deref()))
}

/// `Ok(Err(_))` carries the rejection to send back.
pub fn authorize_admin(req: &Request, cfg: &WorkerConfig) -> Result<std::result::Result<(), ApiError>> {
    let presented = request_bearer(req)?;
    Ok(check_admin_token(
        cfg.migrations_token.as_deref(),
        presented.as_deref(),
    ))
}
