use worker::{event, Context, Env, Request, Response, Result};

#[path = "wasm/db.rs"]
pub mod db;
#[path = "wasm/env.rs"]
pub mod env;
#[path = "wasm/handlers/mod.rs"]
pub mod handlers;
#[path = "wasm/http.rs"]
pub mod http;

use crate::api::{ApiError, Health, Route};
use crate::logging;

#[event(fetch)]
pub async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();
    logging::init(
        env::binding(&env, "LOG_LEVEL").as_deref(),
        tracing_web::MakeConsoleWriter,
    );

    let url = req.url()?;
    let method = req.method();

    match Route::resolve(method.as_ref(), url.path()) {
        Route::Preflight => http::with_cors(&req, Response::empty()?.with_status(204)),
        Route::Health => http::json(&req, &Health::up()),
        Route::Sync => handlers::sync::handle_sync(&req, &env).await,
        Route::MigrationsUp => handlers::migrations::handle_migrations_up(&req, &env).await,
        Route::NotFound => http::api_error(&req, &ApiError::not_found()),
    }
}
