//! Full-state snapshot assembly for `GET /api/sync`.

use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

use crate::error::SyncError;
use crate::project::{
    project_cipher, project_folder, project_profile, user_decryption, CipherDoc, FolderDoc,
    ProfileDoc, UserDecryptionDoc,
};
use crate::store::VaultStore;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainsDoc {
    pub equivalent_domains: Vec<Value>,
    pub global_equivalent_domains: Vec<Value>,
    pub object: &'static str,
}

impl DomainsDoc {
    /// Equivalent-domain rules are not modeled; clients still expect the block.
    pub fn empty() -> Self {
        Self {
            equivalent_domains: Vec::new(),
            global_equivalent_domains: Vec::new(),
            object: "domains",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub profile: ProfileDoc,
    pub folders: Vec<FolderDoc>,
    pub collections: Vec<Value>,
    pub ciphers: Vec<CipherDoc>,
    pub domains: DomainsDoc,
    pub policies: Vec<Value>,
    pub sends: Vec<Value>,
    pub user_decryption: UserDecryptionDoc,
    pub object: &'static str,
}

/// Build the sync snapshot for `user_id`.
///
/// Fails fast: a missing user or any failed read aborts the whole snapshot,
/// because clients treat the response as their complete vault state.
/// Nothing is cached; every call reads storage afresh.
pub async fn assemble_sync<S>(store: &S, user_id: &str) -> Result<SyncResponse, SyncError>
where
    S: VaultStore + ?Sized,
{
    let user = store
        .fetch_user(user_id)
        .await?
        .ok_or_else(|| SyncError::UserNotFound(user_id.to_string()))?;

    let (ciphers, folders) =
        futures::try_join!(store.fetch_ciphers(&user.id), store.fetch_folders(&user.id))?;

    // One read per cipher, issued together; results keep storage order.
    let attachments =
        try_join_all(ciphers.iter().map(|c| store.fetch_attachments(&c.id))).await?;

    let cipher_docs: Vec<CipherDoc> = ciphers
        .iter()
        .zip(attachments.iter())
        .map(|(c, a)| project_cipher(c, a))
        .collect();

    let folder_docs: Vec<FolderDoc> = folders.iter().map(project_folder).collect();

    tracing::info!(
        user_id = %user.id,
        ciphers = cipher_docs.len(),
        folders = folder_docs.len(),
        "assembled sync snapshot"
    );

    Ok(SyncResponse {
        profile: project_profile(&user),
        folders: folder_docs,
        collections: Vec::new(),
        ciphers: cipher_docs,
        domains: DomainsDoc::empty(),
        policies: Vec::new(),
        sends: Vec::new(),
        user_decryption: user_decryption(&user),
        object: "sync",
    })
}
