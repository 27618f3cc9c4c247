use serde::Serialize;

use crate::coerce;
use crate::store::StoredAttachment;

/// Prefix of the download route served by the API.
pub const ATTACHMENT_URL_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentDoc {
    pub id: String,
    pub file_name: String,
    pub size: i64,
    pub size_name: String,
    pub key: Option<String>,
    pub url: String,
    pub object: &'static str,
}

/// Download URL for one attachment. Mobile clients require it to be non-null.
pub fn attachment_url(cipher_id: &str, attachment_id: &str) -> String {
    format!("{ATTACHMENT_URL_BASE}/ciphers/{cipher_id}/attachment/{attachment_id}")
}

/// `None` (serialized as `null`) when the item has no attachments. Clients
/// render an empty list differently from `null`, so an empty list is never
/// returned.
pub fn project_attachments(attachments: &[StoredAttachment]) -> Option<Vec<AttachmentDoc>> {
    if attachments.is_empty() {
        return None;
    }

    Some(attachments.iter().map(project_attachment).collect())
}

fn project_attachment(a: &StoredAttachment) -> AttachmentDoc {
    let size = coerce::attachment_size(a.size.as_ref());
    AttachmentDoc {
        id: a.id.clone(),
        file_name: a.file_name.clone(),
        size,
        size_name: a
            .size_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| coerce::display_size(size)),
        key: a.key.clone(),
        url: attachment_url(&a.cipher_id, &a.id),
        object: "attachment",
    }
}
