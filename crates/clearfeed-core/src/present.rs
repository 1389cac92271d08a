//! Presentation derivation.
//!
//! Pure functions over server payloads: entity/signal deduplication,
//! case-type severity classification, confidence bucketing, and relative
//! bar scaling for the report's signal distribution. None of these cache
//! anything; they are recomputed from the payload on every render.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::feed::{ArticleSignal, CaseType, Entity, GroupArticlePreview, GroupBriefing};

/// Default cap on entity chips rendered per briefing.
pub const MAX_ENTITY_CHIPS: usize = 10;
/// Default cap on signal bars rendered in a report.
pub const MAX_SIGNAL_BARS: usize = 6;

/// Deduplicates entities across a briefing's article previews.
///
/// Unique by `(type, name)`; the first occurrence wins and order is
/// preserved. At most `cap` entries are returned.
pub fn unique_entities(articles: &[GroupArticlePreview], cap: usize) -> Vec<Entity> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for article in articles {
        for entity in &article.entities {
            if out.len() >= cap {
                return out;
            }
            if seen.insert((entity.entity_type, entity.name.clone())) {
                out.push(entity.clone());
            }
        }
    }
    out
}

/// Deduplicates signals across a briefing's article previews.
///
/// Unique by slug; first occurrence wins, order preserved, capped.
pub fn unique_signals(articles: &[GroupArticlePreview], cap: usize) -> Vec<ArticleSignal> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for article in articles {
        for signal in &article.signals {
            if out.len() >= cap {
                return out;
            }
            if seen.insert(signal.slug.clone()) {
                out.push(signal.clone());
            }
        }
    }
    out
}

/// Visual severity implied by a briefing's case type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Actively exploited.
    Critical,
    /// Vulnerable, no known exploit.
    Elevated,
    /// Fixed.
    Resolved,
    /// Not applicable or unclassified; no badge is shown.
    Unmarked,
}

impl Severity {
    /// Badge label, or `None` when no badge is shown.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Severity::Critical => Some("Actively Exploited"),
            Severity::Elevated => Some("Vulnerable — No Known Exploit"),
            Severity::Resolved => Some("Fixed"),
            Severity::Unmarked => None,
        }
    }
}

/// Maps a briefing's case type (absent included) to its severity.
pub fn case_severity(case_type: Option<CaseType>) -> Severity {
    match case_type.unwrap_or(CaseType::NotApplicable) {
        CaseType::ActivelyExploited => Severity::Critical,
        CaseType::VulnerableNoExploit => Severity::Elevated,
        CaseType::Fixed => Severity::Resolved,
        CaseType::NotApplicable => Severity::Unmarked,
    }
}

/// Confidence bucket for score styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Buckets a confidence score in `[0, 1]`.
pub fn confidence_level(score: f64) -> ConfidenceLevel {
    if score >= 0.85 {
        ConfidenceLevel::High
    } else if score >= 0.65 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Rounded percent form of a confidence score.
pub fn confidence_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// One bar of the report's signal-distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBar {
    pub slug: String,
    pub count: u64,
    /// Width relative to the largest count, in `[0, 1]`.
    pub ratio: f64,
}

/// Builds relative bars from a signal-count distribution.
///
/// Bars are sorted by count descending (slug ascending as tie-break) and
/// scaled against the largest count. An empty distribution yields no bars;
/// an all-zero distribution yields zero-width bars rather than dividing by
/// zero.
pub fn signal_bars(distribution: &BTreeMap<String, u64>, cap: usize) -> Vec<SignalBar> {
    let mut entries: Vec<(&String, &u64)> = distribution.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let max = entries.first().map(|(_, count)| **count).unwrap_or(0);
    entries
        .into_iter()
        .take(cap)
        .map(|(slug, count)| SignalBar {
            slug: slug.clone(),
            count: *count,
            ratio: if max == 0 {
                0.0
            } else {
                *count as f64 / max as f64
            },
        })
        .collect()
}

/// Everything the briefing card needs beyond the raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefingPresentation {
    pub entities: Vec<Entity>,
    pub signals: Vec<ArticleSignal>,
    pub severity: Severity,
    pub confidence: ConfidenceLevel,
}

/// Derives the presentation data for one briefing.
pub fn present_briefing(briefing: &GroupBriefing) -> BriefingPresentation {
    BriefingPresentation {
        entities: unique_entities(&briefing.articles, MAX_ENTITY_CHIPS),
        signals: unique_signals(&briefing.articles, MAX_SIGNAL_BARS),
        severity: case_severity(briefing.case_type),
        confidence: confidence_level(briefing.confidence),
    }
}
