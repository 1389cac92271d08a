//! Unified path management for Clearfeed client files.
//!
//! All durable client-side state lives under one platform config
//! directory so storage stays consistent across Linux, macOS and Windows.

use std::path::PathBuf;

use clearfeed_core::error::{ClearfeedError, Result};

/// Unified path management for the Clearfeed client.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/clearfeed/         # Config directory (XDG on Linux)
/// └── session.toml             # Persisted session artifacts
/// ```
pub struct ClearfeedPaths;

impl ClearfeedPaths {
    /// Returns the Clearfeed configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/clearfeed/`)
    /// - `Err`: The platform config directory could not be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("clearfeed"))
            .ok_or_else(|| ClearfeedError::config("Cannot determine config directory"))
    }

    /// Returns the path to the persisted session document.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}
