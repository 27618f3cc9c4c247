//! In-memory [`VaultStore`] test double with read-failure injection.

use std::collections::{HashMap, HashSet};

use super::{StoredAttachment, StoredCipher, StoredFolder, StoredUser, VaultStore};
use crate::error::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    pub users: Vec<StoredUser>,
    /// Keyed by owning user id; insertion order is the storage order.
    pub ciphers: HashMap<String, Vec<StoredCipher>>,
    pub folders: HashMap<String, Vec<StoredFolder>>,
    pub attachments: HashMap<String, Vec<StoredAttachment>>,
    /// Cipher ids whose attachment read fails.
    pub failing_attachments: HashSet<String>,
    pub fail_folders: bool,
}

impl MemoryStore {
    pub fn with_user(mut self, user: StoredUser) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_cipher(mut self, user_id: &str, cipher: StoredCipher) -> Self {
        self.ciphers.entry(user_id.to_string()).or_default().push(cipher);
        self
    }

    pub fn with_folder(mut self, user_id: &str, folder: StoredFolder) -> Self {
        self.folders.entry(user_id.to_string()).or_default().push(folder);
        self
    }

    pub fn with_attachment(mut self, attachment: StoredAttachment) -> Self {
        self.attachments
            .entry(attachment.cipher_id.clone())
            .or_default()
            .push(attachment);
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl VaultStore for MemoryStore {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<StoredUser>, StoreError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn fetch_ciphers(&self, user_id: &str) -> Result<Vec<StoredCipher>, StoreError> {
        Ok(self.ciphers.get(user_id).cloned().unwrap_or_default())
    }

    async fn fetch_folders(&self, user_id: &str) -> Result<Vec<StoredFolder>, StoreError> {
        if self.fail_folders {
            return Err(StoreError("folders unavailable".to_string()));
        }
        Ok(self.folders.get(user_id).cloned().unwrap_or_default())
    }

    async fn fetch_attachments(&self, cipher_id: &str) -> Result<Vec<StoredAttachment>, StoreError> {
        if self.failing_attachments.contains(cipher_id) {
            return Err(StoreError(format!("attachments unavailable for {cipher_id}")));
        }
        Ok(self.attachments.get(cipher_id).cloned().unwrap_or_default())
    }
}
