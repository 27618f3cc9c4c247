use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cipher attachment metadata. The file bytes live outside the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attachments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub cipher_id: String,

    pub file_name: String,

    /// Byte count as written by the uploader; historically either a number or
    /// a numeric string.
    pub file_size: Option<String>,

    /// Display label such as "1.5 MB".
    pub size_name: Option<String>,

    pub akey: Option<String>,

    /// Unix timestamp (seconds).
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cipher::Entity",
        from = "Column::CipherId",
        to = "super::cipher::Column::Id"
    )]
    Cipher,
}

impl Related<super::cipher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cipher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
