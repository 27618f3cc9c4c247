use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Folder placement of a cipher. A cipher sits in at most one folder; extra
/// rows are tolerated and resolved by the reader.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "folders_ciphers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,

    pub folder_id: String,
    pub cipher_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::folder::Entity",
        from = "Column::FolderId",
        to = "super::folder::Column::Id"
    )]
    Folder,
    #[sea_orm(
        belongs_to = "super::cipher::Entity",
        from = "Column::CipherId",
        to = "super::cipher::Column::Id"
    )]
    Cipher,
}

impl ActiveModelBehavior for ActiveModel {}
