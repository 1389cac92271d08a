//! Session state: the in-memory snapshot, the persisted artifact set,
//! and the vault trait that stores it.

pub mod model;
pub mod token;
pub mod vault;

pub use model::{Session, StoredSession};
pub use token::AccessTokenStore;
pub use vault::SessionVault;
