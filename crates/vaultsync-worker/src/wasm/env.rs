use worker::Env;

use crate::config::{ConfigError, WorkerConfig};

/// Read a binding as either a secret or a plain var.
pub fn binding(env: &Env, key: &str) -> Option<String> {
    env.secret(key)
        .map(|v| v.to_string())
        .or_else(|_| env.var(key).map(|v| v.to_string()))
        .ok()
}

pub fn load_config(env: &Env) -> Result<WorkerConfig, ConfigError> {
    WorkerConfig::from_lookup(|key| binding(env, key))
}
