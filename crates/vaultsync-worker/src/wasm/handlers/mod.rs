pub mod admin_auth;
pub mod migrations;
pub mod sync;
