//! Read-only gateway to persisted vault entities.
//!
//! The shapes here mirror what storage actually holds: optional fields,
//! loosely typed numbers and raw JSON payloads. Normalization to the client
//! contract happens in [`crate::project`].

use serde_json::Value;

use crate::error::StoreError;

mod sea;

#[cfg(test)]
pub(crate) mod memory;

pub use sea::SeaOrmStore;

#[derive(Clone, Debug, PartialEq)]
pub struct StoredUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// Master-key-encrypted user key.
    pub key: Option<String>,
    pub private_key: Option<String>,
    pub security_stamp: Option<String>,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    pub kdf_type: i32,
    pub kdf_iterations: i32,
    pub kdf_memory: Option<i32>,
    pub kdf_parallelism: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredCipher {
    pub id: String,
    pub folder_id: Option<String>,
    /// Whatever the writer stored: number, numeric string, garbage or nothing.
    pub r#type: Option<Value>,
    pub name: String,
    pub notes: Option<String>,
    pub favorite: bool,
    pub reprompt: Option<i32>,
    pub login: Option<Value>,
    pub card: Option<Value>,
    pub identity: Option<Value>,
    pub secure_note: Option<Value>,
    pub ssh_key: Option<Value>,
    pub fields: Option<Value>,
    pub password_history: Option<Value>,
    pub key: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredFolder {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredAttachment {
    pub id: String,
    pub cipher_id: String,
    pub file_name: String,
    /// Byte count, as a string or a number.
    pub size: Option<Value>,
    pub size_name: Option<String>,
    pub key: Option<String>,
}

/// The four reads the sync endpoint needs.
///
/// Absence of a user is the only checked outcome; every other failure is an
/// opaque [`StoreError`].
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait VaultStore {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<StoredUser>, StoreError>;

    /// All ciphers owned by the user, in a stable storage order.
    async fn fetch_ciphers(&self, user_id: &str) -> Result<Vec<StoredCipher>, StoreError>;

    async fn fetch_folders(&self, user_id: &str) -> Result<Vec<StoredFolder>, StoreError>;

    async fn fetch_attachments(&self, cipher_id: &str) -> Result<Vec<StoredAttachment>, StoreError>;
}
