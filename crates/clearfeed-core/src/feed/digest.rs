//! Digest and reset endpoint payloads.

use serde::{Deserialize, Serialize};

/// Tallies from one digest run. Ephemeral: shown once, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestOutcome {
    pub scraped: u64,
    pub matched: u64,
    pub summarized: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response of the per-user digest endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestResult {
    pub message: String,
    pub result: DigestOutcome,
}

/// Per-user tallies from the admin-wide digest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDigestOutcome {
    pub user_id: String,
    pub scraped: u64,
    pub matched: u64,
    pub summarized: u64,
    pub error_count: u64,
}

/// Response of the admin run-all digest endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestAllResult {
    pub message: String,
    #[serde(default)]
    pub results: Vec<UserDigestOutcome>,
}

/// Acknowledgement of the group-reset endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetOutcome {
    pub message: String,
}
