use sea_orm::{DatabaseConnection, DbErr};
use worker::{Env, Request, Response, Result};

use migration::{Migrator, MigratorTrait};

use crate::api::{migration_steps, MigrationReport, MigrationResponse};
use crate::worker_wasm::db::db_connect;
use crate::worker_wasm::env::load_config;
use crate::worker_wasm::http;

use super::admin_auth::authorize_admin;

async fn pending_names(db: &DatabaseConnection) -> std::result::Result<Vec<String>, DbErr> {
    Ok(Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect())
}

async fn apply(db: &DatabaseConnection, steps: u32) -> std::result::Result<MigrationReport, DbErr> {
    let before = pending_names(db).await?;
    let count = steps.min(u32::try_from(before.len()).unwrap_or(u32::MAX));
    if count > 0 {
        Migrator::up(db, Some(count)).await?;
    }

    let after = pending_names(db).await?;
    Ok(MigrationReport::new(before.len(), &after))
}

/// POST /v1/admin/migrations/up?steps=N
pub async fn handle_migrations_up(req: &Request, env: &Env) -> Result<Response> {
    let cfg = match load_config(env) {
        Ok(cfg) => cfg,
        Err(e) => return http::internal(req, "worker configuration", &e),
    };
    if let Err(denied) = authorize_admin(req, &cfg)? {
        return http::api_error(req, &denied);
    }

    let url = req.url()?;
    let query: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let steps = migration_steps(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let db = match db_connect(&cfg).await {
        Ok(db) => db,
        Err(e) => return http::internal(req, "libSQL connect", &e),
    };

    match apply(&db, steps).await {
        Ok(report) => {
            tracing::info!(applied = report.applied, pending = report.pending, "migrations applied");
            http::json(
                req,
                &MigrationResponse {
                    success: true,
                    migrations: report,
                },
            )
        }
        Err(e) => http::internal(req, "migrations", &e),
    }
}
