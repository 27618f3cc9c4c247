use serde::Serialize;
use serde_json::Value;

use crate::coerce;
use crate::store::StoredUser;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDoc {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub email_verified: bool,
    pub premium: bool,
    pub premium_from_organization: bool,
    pub uses_key_connector: bool,
    pub master_password_hint: Option<String>,
    pub culture: &'static str,
    pub two_factor_enabled: bool,
    pub key: Option<String>,
    pub private_key: Option<String>,
    pub account_keys: Option<Value>,
    pub security_stamp: String,
    pub organizations: Vec<Value>,
    pub providers: Vec<Value>,
    pub provider_organizations: Vec<Value>,
    pub force_password_reset: bool,
    pub avatar_color: Option<String>,
    pub creation_date: String,
    pub object: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KdfDoc {
    pub kdf_type: i32,
    pub iterations: i32,
    pub memory: Option<i32>,
    pub parallelism: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterPasswordUnlockDoc {
    pub salt: String,
    pub kdf: KdfDoc,
    pub master_key_encrypted_user_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDecryptionDoc {
    pub master_password_unlock: MasterPasswordUnlockDoc,
}

/// Profile block of the sync response.
///
/// Premium, verification and 2FA flags are constants: this deployment has a
/// single tier and no organizations.
pub fn project_profile(u: &StoredUser) -> ProfileDoc {
    ProfileDoc {
        id: u.id.clone(),
        name: u.name.clone(),
        email: u.email.clone(),
        email_verified: true,
        premium: true,
        premium_from_organization: false,
        uses_key_connector: false,
        master_password_hint: None,
        culture: "en-US",
        two_factor_enabled: false,
        key: u.key.clone(),
        private_key: u.private_key.clone(),
        account_keys: None,
        security_stamp: coerce::security_stamp(u.security_stamp.as_deref(), &u.id),
        organizations: Vec::new(),
        providers: Vec::new(),
        provider_organizations: Vec::new(),
        force_password_reset: false,
        avatar_color: None,
        creation_date: coerce::timestamp(u.created_at),
        object: "profile",
    }
}

/// Master-password unlock parameters. The salt is the account email.
pub fn user_decryption(u: &StoredUser) -> UserDecryptionDoc {
    UserDecryptionDoc {
        master_password_unlock: MasterPasswordUnlockDoc {
            salt: u.email.clone(),
            kdf: KdfDoc {
                kdf_type: u.kdf_type,
                iterations: u.kdf_iterations,
                memory: coerce::kdf_cost(u.kdf_memory),
                parallelism: coerce::kdf_cost(u.kdf_parallelism),
            },
            master_key_encrypted_user_key: u.key.clone(),
        },
    }
}
