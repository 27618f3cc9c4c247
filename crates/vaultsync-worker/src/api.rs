//! Platform-independent pieces of the HTTP surface: routing, error bodies,
//! the admin token check and the migration report. The Worker glue only
//! moves bytes between these and `worker::Request`/`Response`.

use serde::Serialize;
use subtle::ConstantTimeEq;

use crate::error::SyncError;
use crate::token::TokenError;

pub const SERVICE_NAME: &str = "vaultsync";

pub const CORS_ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Authorization,Content-Type,Accept,X-Requested-With";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Preflight,
    Health,
    Sync,
    MigrationsUp,
    NotFound,
}

impl Route {
    pub fn resolve(method: &str, path: &str) -> Self {
        match (method, path) {
            ("OPTIONS", _) => Route::Preflight,
            ("GET", "/health") => Route::Health,
            ("GET", "/api/sync") => Route::Sync,
            ("POST", "/v1/admin/migrations/up") => Route::MigrationsUp,
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
}

impl Health {
    pub fn up() -> Self {
        Self {
            ok: true,
            service: SERVICE_NAME,
        }
    }
}

/// A failed request as clients see it: a status plus a machine-readable code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
}

impl ApiError {
    pub const fn new(status: u16, code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub const fn not_found() -> Self {
        Self::new(404, "not_found", "Not found")
    }

    /// Internal causes are logged, never sent.
    pub const fn internal() -> Self {
        Self::new(500, "internal_error", "Internal server error")
    }

    pub const fn missing_bearer() -> Self {
        Self::new(401, "unauthorized", "Missing bearer token")
    }

    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            success: false,
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        }
    }
}

impl From<&SyncError> for ApiError {
    fn from(e: &SyncError) -> Self {
        match e {
            SyncError::UserNotFound(_) => Self::new(e.status(), "not_found", "User not found"),
            SyncError::Store(_) => Self::internal(),
        }
    }
}

impl From<&TokenError> for ApiError {
    fn from(_: &TokenError) -> Self {
        Self::new(401, "unauthorized", "Invalid token")
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail<'a> {
    pub code: &'a str,
    pub message: &'a str,
}

/// Gate for admin routes. Without a configured `MIGRATIONS_TOKEN` they are
/// disabled outright.
pub fn check_admin_token(configured: Option<&str>, presented: Option<&str>) -> Result<(), ApiError> {
    let Some(required) = configured else {
        return Err(ApiError::new(
            403,
            "admin_disabled",
            "MIGRATIONS_TOKEN is not configured",
        ));
    };
    let Some(presented) = presented else {
        return Err(ApiError::new(
            401,
            "missing_token",
            "Missing Authorization Bearer token",
        ));
    };
    if !bool::from(presented.as_bytes().ct_eq(required.as_bytes())) {
        return Err(ApiError::new(401, "unauthorized", "Invalid migrations token"));
    }
    Ok(())
}

/// `steps` query parameter of the migrations route. libSQL over HTTP spends a
/// Worker subrequest per statement, so one migration per call is the default.
pub fn migration_steps<'a, I>(query: I) -> u32
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    query
        .into_iter()
        .find(|(k, _)| *k == "steps")
        .and_then(|(_, v)| v.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MigrationReport {
    pub applied: usize,
    pub pending: usize,
    pub done: bool,
    pub next: Option<String>,
}

impl MigrationReport {
    pub fn new(pending_before: usize, pending_after: &[String]) -> Self {
        Self {
            applied: pending_before.saturating_sub(pending_after.len()),
            pending: pending_after.len(),
            done: pending_after.is_empty(),
            next: pending_after.first().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MigrationResponse {
    pub success: bool,
    pub migrations: MigrationReport,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::StoreError;

    #[test]
    fn routes_resolve_by_method_and_path() {
        assert_eq!(Route::resolve("OPTIONS", "/anything"), Route::Preflight);
        assert_eq!(Route::resolve("GET", "/health"), Route::Health);
        assert_eq!(Route::resolve("GET", "/api/sync"), Route::Sync);
        assert_eq!(Route::resolve("POST", "/api/sync"), Route::NotFound);
        assert_eq!(
            Route::resolve("POST", "/v1/admin/migrations/up"),
            Route::MigrationsUp
        );
        assert_eq!(Route::resolve("GET", "/api/sync/"), Route::NotFound);
    }

    #[test]
    fn error_body_shape() {
        let err = ApiError::not_found();
        assert_eq!(
            serde_json::to_value(err.body()).unwrap(),
            json!({"success": false, "error": {"code": "not_found", "message": "Not found"}})
        );
    }

    #[test]
    fn sync_errors_map_to_statuses() {
        let missing = ApiError::from(&SyncError::UserNotFound("u1".to_string()));
        assert_eq!(missing.status, 404);
        assert_eq!(missing.message, "User not found");

        let failed = ApiError::from(&SyncError::Store(StoreError("boom".to_string())));
        assert_eq!(failed, ApiError::internal());
    }

    #[test]
    fn token_errors_are_unauthorized() {
        assert_eq!(ApiError::from(&TokenError::Expired).status, 401);
        assert_eq!(ApiError::from(&TokenError::Signature).code, "unauthorized");
    }

    #[test]
    fn admin_token_gate() {
        assert_eq!(check_admin_token(None, Some("t")).unwrap_err().status, 403);
        assert_eq!(
            check_admin_token(Some("t"), None).unwrap_err().code,
            "missing_token"
        );
        assert_eq!(
            check_admin_token(Some("t"), Some("x")).unwrap_err().code,
            "unauthorized"
        );
        assert!(check_admin_token(Some("t"), Some("t")).is_ok());
    }

    #[test]
    fn admin_token_must_match_exactly() {
        let required = Some("migrate-0123456789");
        for presented in ["migrate-012345678", "migrate-01234567890", "MIGRATE-0123456789", ""] {
            assert_eq!(
                check_admin_token(required, Some(presented)).unwrap_err().code,
                "unauthorized",
                "{presented:?} must be rejected"
            );
        }
        assert!(check_admin_token(required, Some("migrate-0123456789")).is_ok());
    }

    #[test]
    fn steps_default_to_one() {
        assert_eq!(migration_steps(Vec::<(&str, &str)>::new()), 1);
        assert_eq!(migration_steps([("steps", "3")]), 3);
        assert_eq!(migration_steps([("steps", "0")]), 1);
        assert_eq!(migration_steps([("steps", "lots")]), 1);
        assert_eq!(migration_steps([("other", "9"), ("steps", "2")]), 2);
    }

    #[test]
    fn migration_report_counts() {
        let pending = vec!["m20260301_000003_attachments".to_string()];
        assert_eq!(
            MigrationReport::new(3, &pending),
            MigrationReport {
                applied: 2,
                pending: 1,
                done: false,
                next: Some("m20260301_000003_attachments".to_string()),
            }
        );

        let report = MigrationReport::new(1, &[]);
        assert!(report.done);
        assert_eq!(report.next, None);
    }
}
