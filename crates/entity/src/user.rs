use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account record as read by the sync endpoint.
///
/// Key material (`akey`, `private_key`) is opaque client-encrypted text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub email: String,

    pub name: Option<String>,

    /// Master-key-encrypted user key.
    pub akey: Option<String>,

    pub private_key: Option<String>,

    /// Rotated on credential changes; may be missing on legacy rows.
    pub security_stamp: Option<String>,

    /// 0=PBKDF2, 1=Argon2id.
    pub client_kdf_type: i32,
    pub client_kdf_iter: i32,
    pub client_kdf_memory: Option<i32>,
    pub client_kdf_parallelism: Option<i32>,

    /// Unix timestamp (seconds).
    pub created_at: i64,

    /// Unix timestamp (seconds).
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cipher::Entity")]
    Cipher,
    #[sea_orm(has_many = "super::folder::Entity")]
    Folder,
}

impl Related<super::cipher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cipher.def()
    }
}

impl Related<super::folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Folder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
