use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde_json::Value;

use entity::{attachment, cipher, favorite, folder, folder_cipher, user};

use super::{StoredAttachment, StoredCipher, StoredFolder, StoredUser, VaultStore};
use crate::error::StoreError;

/// [`VaultStore`] over a SeaORM connection (libSQL on Workers).
///
/// Cheap to build; the worker creates one per request and drops it with the
/// connection.
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Parse a JSON text column. Unparseable text is forwarded as null rather
/// than failing the whole sync.
fn json_column(column: &str, cipher_id: &str, raw: Option<String>) -> Option<Value> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(cipher_id, column, error = %e, "malformed JSON column, sending null");
            None
        }
    }
}

fn user_from_model(u: user::Model) -> StoredUser {
    StoredUser {
        id: u.id,
        email: u.email,
        name: u.name,
        key: u.akey,
        private_key: u.private_key,
        security_stamp: u.security_stamp,
        created_at: u.created_at,
        kdf_type: u.client_kdf_type,
        kdf_iterations: u.client_kdf_iter,
        kdf_memory: u.client_kdf_memory,
        kdf_parallelism: u.client_kdf_parallelism,
    }
}

fn cipher_from_model(c: cipher::Model, folder_id: Option<String>, favorite: bool) -> StoredCipher {
    let id = c.id;
    StoredCipher {
        folder_id,
        r#type: c.r#type.map(Value::String),
        name: c.name,
        notes: c.notes,
        favorite,
        reprompt: c.reprompt,
        login: json_column("login", &id, c.login),
        card: json_column("card", &id, c.card),
        identity: json_column("identity", &id, c.identity),
        secure_note: json_column("secure_note", &id, c.secure_note),
        ssh_key: json_column("ssh_key", &id, c.ssh_key),
        fields: json_column("fields", &id, c.fields),
        password_history: json_column("password_history", &id, c.password_history),
        key: c.key,
        created_at: c.created_at,
        updated_at: c.updated_at,
        deleted_at: c.deleted_at,
        id,
    }
}

fn folder_from_model(f: folder::Model) -> StoredFolder {
    StoredFolder {
        id: f.id,
        name: f.name,
        created_at: f.created_at,
        updated_at: f.updated_at,
    }
}

fn attachment_from_model(a: attachment::Model) -> StoredAttachment {
    StoredAttachment {
        id: a.id,
        cipher_id: a.cipher_id,
        file_name: a.file_name,
        size: a.file_size.map(Value::String),
        size_name: a.size_name,
        key: a.akey,
    }
}

async fn folder_map_for_ciphers(
    db: &DatabaseConnection,
    cipher_ids: &[String],
) -> Result<HashMap<String, String>, StoreError> {
    if cipher_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mappings = folder_cipher::Entity::find()
        .filter(folder_cipher::Column::CipherId.is_in(cipher_ids.to_vec()))
        .order_by_asc(folder_cipher::Column::Id)
        .all(db)
        .await?;

    let mut map = HashMap::new();
    for m in mappings {
        // Oldest mapping wins if a cipher ended up in several folders.
        map.entry(m.cipher_id).or_insert(m.folder_id);
    }

    Ok(map)
}

async fn favorite_set(db: &DatabaseConnection, user_id: &str) -> Result<HashSet<String>, StoreError> {
    let rows = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|f| f.cipher_id).collect())
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl VaultStore for SeaOrmStore {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<StoredUser>, StoreError> {
        let found = user::Entity::find_by_id(user_id.to_string()).one(&self.db).await?;
        Ok(found.map(user_from_model))
    }

    async fn fetch_ciphers(&self, user_id: &str) -> Result<Vec<StoredCipher>, StoreError> {
        let ciphers = cipher::Entity::find()
            .filter(cipher::Column::UserId.eq(user_id))
            .order_by_asc(cipher::Column::CreatedAt)
            .order_by_asc(cipher::Column::Id)
            .all(&self.db)
            .await?;

        if ciphers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = ciphers.iter().map(|c| c.id.clone()).collect();
        let mut folder_map = folder_map_for_ciphers(&self.db, &ids).await?;
        let favorites = favorite_set(&self.db, user_id).await?;

        Ok(ciphers
            .into_iter()
            .map(|c| {
                let folder_id = folder_map.remove(&c.id);
                let favorite = favorites.contains(&c.id);
                cipher_from_model(c, folder_id, favorite)
            })
            .collect())
    }

    async fn fetch_folders(&self, user_id: &str) -> Result<Vec<StoredFolder>, StoreError> {
        let folders = folder::Entity::find()
            .filter(folder::Column::UserId.eq(user_id))
            .order_by_asc(folder::Column::CreatedAt)
            .order_by_asc(folder::Column::Id)
            .all(&self.db)
            .await?;

        Ok(folders.into_iter().map(folder_from_model).collect())
    }

    async fn fetch_attachments(&self, cipher_id: &str) -> Result<Vec<StoredAttachment>, StoreError> {
        let attachments = attachment::Entity::find()
            .filter(attachment::Column::CipherId.eq(cipher_id))
            .order_by_asc(attachment::Column::CreatedAt)
            .order_by_asc(attachment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(attachments.into_iter().map(attachment_from_model).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::json;

    use super::*;
    use crate::logging::{self, capture::Captured};

    fn cipher_row(id: &str, ty: Option<&str>) -> cipher::Model {
        cipher::Model {
            id: id.to_string(),
            user_id: "u1".to_string(),
            r#type: ty.map(str::to_string),
            name: format!("2.{id}-name"),
            notes: None,
            login: Some(r#"{"username":"2.user","uris":[]}"#.to_string()),
            card: None,
            identity: None,
            secure_note: Some("{not json".to_string()),
            ssh_key: None,
            fields: Some("[]".to_string()),
            password_history: None,
            reprompt: None,
            key: None,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_100,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn fetch_user_maps_columns() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![user::Model {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
                name: Some("Alice".to_string()),
                akey: Some("2.akey".to_string()),
                private_key: None,
                security_stamp: None,
                client_kdf_type: 1,
                client_kdf_iter: 3,
                client_kdf_memory: Some(64),
                client_kdf_parallelism: Some(4),
                created_at: 1_700_000_000,
                updated_at: 1_700_000_000,
            }]])
            .into_connection();

        let user = SeaOrmStore::new(db).fetch_user("u1").await.unwrap().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.key.as_deref(), Some("2.akey"));
        assert_eq!(user.kdf_type, 1);
        assert_eq!(user.kdf_memory, Some(64));
    }

    #[tokio::test]
    async fn fetch_user_absent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        assert!(SeaOrmStore::new(db).fetch_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fetch_ciphers_resolves_folder_and_favorite() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![cipher_row("c1", Some("2")), cipher_row("c2", None)]])
            .append_query_results([vec![
                folder_cipher::Model {
                    id: 1,
                    folder_id: "f1".to_string(),
                    cipher_id: "c1".to_string(),
                },
                folder_cipher::Model {
                    id: 2,
                    folder_id: "f2".to_string(),
                    cipher_id: "c1".to_string(),
                },
            ]])
            .append_query_results([vec![favorite::Model {
                user_id: "u1".to_string(),
                cipher_id: "c2".to_string(),
            }]])
            .into_connection();

        let ciphers = SeaOrmStore::new(db).fetch_ciphers("u1").await.unwrap();
        assert_eq!(ciphers.len(), 2);

        assert_eq!(ciphers[0].id, "c1");
        assert_eq!(ciphers[0].folder_id.as_deref(), Some("f1"));
        assert!(!ciphers[0].favorite);
        assert_eq!(ciphers[0].r#type, Some(json!("2")));
        assert_eq!(ciphers[0].login, Some(json!({"username": "2.user", "uris": []})));
        assert_eq!(ciphers[0].fields, Some(json!([])));
        // Malformed payload text degrades to null instead of failing.
        assert_eq!(ciphers[0].secure_note, None);

        assert_eq!(ciphers[1].id, "c2");
        assert_eq!(ciphers[1].folder_id, None);
        assert!(ciphers[1].favorite);
        assert_eq!(ciphers[1].r#type, None);
    }

    #[tokio::test]
    async fn fetch_ciphers_empty_skips_lookups() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<cipher::Model>::new()])
            .into_connection();

        assert!(SeaOrmStore::new(db).fetch_ciphers("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_attachments_keeps_size_loose() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![attachment::Model {
                id: "a1".to_string(),
                cipher_id: "c1".to_string(),
                file_name: "2.file".to_string(),
                file_size: Some("2048".to_string()),
                size_name: None,
                akey: Some("2.key".to_string()),
                created_at: 1_700_000_000,
            }]])
            .into_connection();

        let attachments = SeaOrmStore::new(db).fetch_attachments("c1").await.unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].size, Some(json!("2048")));
        assert_eq!(attachments[0].key.as_deref(), Some("2.key"));
    }

    #[test]
    fn malformed_column_warning_is_logged() {
        let out = Captured::default();
        let parsed = tracing::subscriber::with_default(
            logging::subscriber(None, out.clone()),
            || json_column("secure_note", "c7", Some("{not json".to_string())),
        );

        assert_eq!(parsed, None);
        let text = out.contents();
        assert!(text.contains("WARN"));
        assert!(text.contains("malformed JSON column"));
        assert!(text.contains("c7"));
        assert!(text.contains("secure_note"));
    }

    #[tokio::test]
    async fn db_errors_surface_as_store_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = SeaOrmStore::new(db).fetch_folders("u1").await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
