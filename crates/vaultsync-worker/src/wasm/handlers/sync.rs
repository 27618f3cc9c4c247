use worker::{Env, Request, Response, Result};

use crate::api::ApiError;
use crate::error::SyncError;
use crate::store::SeaOrmStore;
use crate::sync::assemble_sync;
use crate::token::validate_access_token;
use crate::util::now_ts;
use crate::worker_wasm::db::db_connect;
use crate::worker_wasm::env::load_config;
use crate::worker_wasm::http;

use super::admin_auth::request_bearer;

/// GET /api/sync
pub async fn handle_sync(req: &Request, env: &Env) -> Result<Response> {
    let cfg = match load_config(env) {
        Ok(cfg) => cfg,
        Err(e) => return http::internal(req, "worker configuration", &e),
    };

    let Some(token) = request_bearer(req)? else {
        return http::api_error(req, &ApiError::missing_bearer());
    };
    let user_id = match validate_access_token(&cfg.jwt_secret, &token, now_ts()) {
        Ok(id) => id,
        Err(e) => {
            worker::console_warn!("sync: rejected access token: {e}");
            return http::api_error(req, &ApiError::from(&e));
        }
    };

    let db = match db_connect(&cfg).await {
        Ok(db) => db,
        Err(e) => return http::internal(req, "libSQL connect", &e),
    };

    // One store per request; it goes away with the connection.
    let store = SeaOrmStore::new(db);

    match assemble_sync(&store, &user_id).await {
        Ok(snapshot) => http::json(req, &snapshot),
        Err(e @ SyncError::UserNotFound(_)) => http::api_error(req, &ApiError::from(&e)),
        Err(e) => http::internal(req, "sync assembly", &e),
    }
}
