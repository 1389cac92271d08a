//! Aggregate period report for the grouped feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feed::model::EntityType;
use crate::feed::period::Period;

/// An entity with its mention count across a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMention {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    pub count: u64,
}

/// Aggregate counters for one reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_stories: u64,
    pub total_articles: u64,
    pub critical_stories: u64,
    /// Signal slug to occurrence count.
    #[serde(default)]
    pub signal_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub top_entities: Vec<EntityMention>,
}

/// The aggregate report for a period. Absence of a report for a period is
/// an expected, non-error condition and is represented by the API layer as
/// `None`, never by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub period: Period,
    pub from_date: String,
    pub to_date: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub stats: ReportStats,
}
