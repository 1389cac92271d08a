//! Infrastructure layer for the Clearfeed client.
//!
//! Owns the durable side of the client: platform paths and the persisted
//! session vault.

pub mod dto;
pub mod paths;
pub mod session_vault;
pub mod storage;

pub use crate::paths::ClearfeedPaths;
pub use crate::session_vault::TomlSessionVault;
