//! Pure transforms from storage shapes to the documents clients deserialize.
//!
//! Every contract key is a struct field, so a key can never be omitted: a
//! missing value serializes as an explicit `null`. Field order follows what
//! the official server emits.

pub mod attachment;
pub mod cipher;
pub mod folder;
pub mod profile;

pub use attachment::{attachment_url, project_attachments, AttachmentDoc};
pub use cipher::{project_cipher, CipherDoc, Permissions};
pub use folder::{project_folder, FolderDoc};
pub use profile::{project_profile, user_decryption, KdfDoc, ProfileDoc, UserDecryptionDoc};
