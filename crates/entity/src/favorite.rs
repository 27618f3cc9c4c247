use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-user favorite marks. A row means the cipher is starred for that user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub cipher_id: String,
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

impl ActiveModelBehavior for ActiveModel {}
