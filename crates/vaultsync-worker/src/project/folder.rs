use serde::Serialize;

use crate::coerce;
use crate::store::StoredFolder;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDoc {
    pub id: String,
    pub name: String,
    pub revision_date: String,
    pub object: &'static str,
}

/// A never-renamed folder reports its creation time as the revision date.
pub fn project_folder(f: &StoredFolder) -> FolderDoc {
    FolderDoc {
        id: f.id.clone(),
        name: f.name.clone(),
        revision_date: coerce::timestamp(f.updated_at.unwrap_or(f.created_at)),
        object: "folder",
    }
}
