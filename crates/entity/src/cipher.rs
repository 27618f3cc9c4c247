use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Encrypted vault item.
///
/// Columns are loose: rows written by older clients may carry a
/// non-numeric `type`, and the payload blocks are raw JSON text that is
/// forwarded to clients without interpretation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ciphers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,

    /// 1=Login, 2=SecureNote, 3=Card, 4=Identity, 5=SshKey.
    pub r#type: Option<String>,

    pub name: String,
    pub notes: Option<String>,

    /// JSON text of each typed payload block.
    pub login: Option<String>,
    pub card: Option<String>,
    pub identity: Option<String>,
    pub secure_note: Option<String>,
    pub ssh_key: Option<String>,

    /// JSON array text.
    pub fields: Option<String>,
    /// JSON array text.
    pub password_history: Option<String>,

    pub reprompt: Option<i32>,

    /// Cipher-specific key (optional).
    pub key: Option<String>,

    /// Unix timestamp (seconds).
    pub created_at: i64,

    /// Unix timestamp (seconds).
    pub updated_at: i64,

    /// Unix timestamp (seconds). Set when the item is in the trash.
    pub deleted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::attachment::Entity")]
    Attachment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
