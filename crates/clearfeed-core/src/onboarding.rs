//! Onboarding domain model: industry catalog and setup results.

use serde::{Deserialize, Serialize};

use crate::user::IndustryRef;

/// A signal type tracked for an industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// An industry a new account can choose during onboarding. Choosing one
/// seeds the account with curated sources and keywords server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

/// Envelope of the industries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustriesResponse {
    pub industries: Vec<Industry>,
}

/// Result of submitting the chosen industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResult {
    pub message: String,
    pub industry: IndustryRef,
    pub sources_added: u32,
    pub keywords_added: u32,
}
