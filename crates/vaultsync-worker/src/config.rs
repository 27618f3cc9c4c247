//! Worker configuration read from environment bindings.

use thiserror::Error;

/// Placeholder secret shipped in `.dev.vars.example`. A deployment still
/// using it is treated as unconfigured.
pub const DEFAULT_DEV_SECRET: &str = "Enter-your-JWT-key-here-at-least-32-characters";

pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("JWT_SECRET is still the sample value; set a real secret")]
    DefaultSecret,

    #[error("JWT_SECRET must be at least 32 characters")]
    WeakSecret,
}

#[derive(Clone, Debug)]
pub struct WorkerConfig {
    pub libsql_url: String,
    pub libsql_auth_token: Option<String>,
    pub jwt_secret: String,
    pub migrations_token: Option<String>,
}

/// Strip surrounding whitespace and one pair of matching quotes, which
/// dashboard-pasted secrets often carry.
pub fn normalize_env_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| trimmed.strip_prefix(*q)?.strip_suffix(*q))
        .map(str::trim);

    unquoted.unwrap_or(trimmed).to_string()
}

impl WorkerConfig {
    /// Build from a key lookup (the Worker passes its `Env` vars). Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| normalize_env_value(&v))
                .filter(|s| !s.is_empty())
        };

        let libsql_url = get("LIBSQL_URL").ok_or(ConfigError::Missing("LIBSQL_URL"))?;
        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        validate_jwt_secret(&jwt_secret)?;

        Ok(Self {
            libsql_url,
            libsql_auth_token: get("LIBSQL_AUTH_TOKEN"),
            jwt_secret,
            migrations_token: get("MIGRATIONS_TOKEN"),
        })
    }
}

pub fn validate_jwt_secret(secret: &str) -> Result<(), ConfigError> {
    if secret == DEFAULT_DEV_SECRET {
        return Err(ConfigError::DefaultSecret);
    }
    if secret.chars().count() < MIN_JWT_SECRET_LEN {
        return Err(ConfigError::WeakSecret);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const GOOD_SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn normalizes_quotes_and_whitespace() {
        assert_eq!(normalize_env_value("  value "), "value");
        assert_eq!(normalize_env_value("\" quoted \""), "quoted");
        assert_eq!(normalize_env_value("'single'"), "single");
        assert_eq!(normalize_env_value("\"unbalanced"), "\"unbalanced");
    }

    #[test]
    fn loads_required_and_optional_keys() {
        let cfg = WorkerConfig::from_lookup(lookup(&[
            ("LIBSQL_URL", "libsql://vault.example.turso.io"),
            ("JWT_SECRET", GOOD_SECRET),
            ("LIBSQL_AUTH_TOKEN", "   "),
            ("MIGRATIONS_TOKEN", "'admin'"),
        ]))
        .unwrap();

        assert_eq!(cfg.libsql_url, "libsql://vault.example.turso.io");
        assert_eq!(cfg.libsql_auth_token, None);
        assert_eq!(cfg.migrations_token.as_deref(), Some("admin"));
    }

    #[test]
    fn missing_keys_are_reported() {
        let err = WorkerConfig::from_lookup(lookup(&[("JWT_SECRET", GOOD_SECRET)])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("LIBSQL_URL"));

        let err = WorkerConfig::from_lookup(lookup(&[("LIBSQL_URL", "libsql://x")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn rejects_sample_and_short_secrets() {
        assert_eq!(validate_jwt_secret(DEFAULT_DEV_SECRET), Err(ConfigError::DefaultSecret));
        assert_eq!(validate_jwt_secret("short"), Err(ConfigError::WeakSecret));
        assert_eq!(validate_jwt_secret(GOOD_SECRET), Ok(()));
    }
}
