//! Bitwarden-compatible `GET /api/sync` for Cloudflare Workers.
//!
//! The snapshot core (store gateway, projections, assembly) is platform
//! independent and builds natively; the Worker entrypoint only exists on
//! `wasm32-unknown-unknown`.

pub mod api;
pub mod coerce;
pub mod config;
pub mod error;
pub mod logging;
pub mod project;
pub mod store;
pub mod sync;
pub mod token;
pub mod util;

pub use error::{StoreError, SyncError};
pub use store::{SeaOrmStore, VaultStore};
pub use sync::{assemble_sync, SyncResponse};

#[cfg(target_arch = "wasm32")]
mod worker_wasm;

#[cfg(target_arch = "wasm32")]
pub use worker_wasm::*;
