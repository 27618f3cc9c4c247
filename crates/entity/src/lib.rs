pub mod user;
pub mod folder;
pub mod cipher;
pub mod folder_cipher;
pub mod favorite;
pub mod attachment;

pub use user::Entity as User;
pub use folder::Entity as Folder;
pub use cipher::Entity as Cipher;
pub use folder_cipher::Entity as FolderCipher;
pub use favorite::Entity as Favorite;
pub use attachment::Entity as Attachment;
