use serde::Serialize;
use serde_json::Value;

use super::attachment::{project_attachments, AttachmentDoc};
use crate::coerce;
use crate::store::{StoredAttachment, StoredCipher};

/// Single-tenant deployment: the owner may always delete and restore.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Permissions {
    pub delete: bool,
    pub restore: bool,
}

impl Permissions {
    pub const FULL: Permissions = Permissions {
        delete: true,
        restore: true,
    };
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherDoc {
    pub id: String,
    pub organization_id: Option<String>,
    pub folder_id: Option<String>,
    pub r#type: i64,
    pub name: String,
    pub notes: Option<String>,
    pub favorite: bool,
    pub login: Option<Value>,
    pub card: Option<Value>,
    pub identity: Option<Value>,
    pub secure_note: Option<Value>,
    pub ssh_key: Option<Value>,
    pub fields: Option<Value>,
    pub password_history: Option<Value>,
    pub reprompt: i32,
    pub organization_use_totp: bool,
    pub creation_date: String,
    pub revision_date: String,
    pub deleted_date: Option<String>,
    pub archived_date: Option<String>,
    pub edit: bool,
    pub view_password: bool,
    pub permissions: Permissions,
    pub object: &'static str,
    pub collection_ids: Vec<String>,
    pub attachments: Option<Vec<AttachmentDoc>>,
    pub key: Option<String>,
    pub encrypted_for: Option<String>,
}

/// Build the client document for one item.
///
/// Payload blocks are forwarded untouched whatever the discriminator says; a
/// login item that also carries a `card` block sends both.
pub fn project_cipher(c: &StoredCipher, attachments: &[StoredAttachment]) -> CipherDoc {
    CipherDoc {
        id: c.id.clone(),
        organization_id: None,
        folder_id: c.folder_id.clone(),
        r#type: coerce::cipher_type(c.r#type.as_ref()),
        name: c.name.clone(),
        notes: c.notes.clone(),
        favorite: c.favorite,
        login: c.login.clone(),
        card: c.card.clone(),
        identity: c.identity.clone(),
        secure_note: c.secure_note.clone(),
        ssh_key: c.ssh_key.clone(),
        fields: c.fields.clone(),
        password_history: c.password_history.clone(),
        reprompt: coerce::reprompt(c.reprompt),
        organization_use_totp: false,
        creation_date: coerce::timestamp(c.created_at),
        revision_date: coerce::timestamp(c.updated_at),
        deleted_date: coerce::optional_timestamp(c.deleted_at),
        archived_date: None,
        edit: true,
        view_password: true,
        permissions: Permissions::FULL,
        object: "cipher",
        collection_ids: Vec::new(),
        attachments: project_attachments(attachments),
        key: c.key.clone(),
        encrypted_for: None,
    }
}
