//! Feed wire model.
//!
//! Matches the backend's JSON contract (camelCase keys). Both the flat
//! article feed and the grouped intelligence briefing are read-only to
//! the client; these types carry no client-side state.

use serde::{Deserialize, Serialize};

/// The source a feed article came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSource {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// One article in the flat feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedArticle {
    pub id: String,
    pub title: String,
    pub url: String,
    pub summary: Option<String>,
    pub published_at: String,
    pub scraped_at: String,
    pub source: ArticleSource,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub sent: bool,
}

/// A flat-feed article with its full content, as returned by the detail
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedArticleDetail {
    #[serde(flatten)]
    pub article: FeedArticle,
    pub content: Option<String>,
}

/// Server-side pagination envelope shared by both feed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// One page of the flat feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub articles: Vec<FeedArticle>,
    pub pagination: PaginationInfo,
}

/// Kind of extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Company,
    Person,
    Product,
    Geography,
    Sector,
}

/// A named entity extracted from an article, with extraction confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    pub confidence: f64,
}

/// A signal tag attached to an article, with detection confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSignal {
    pub name: String,
    pub slug: String,
    pub confidence: f64,
}

/// Security-relevance classification of a briefing.
///
/// Wire form is an integer: 1 = actively exploited, 2 = vulnerable with no
/// known exploit, 3 = fixed, 4 = not applicable. An absent or unknown code
/// is treated as not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseType {
    ActivelyExploited,
    VulnerableNoExploit,
    Fixed,
    NotApplicable,
}

impl CaseType {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => CaseType::ActivelyExploited,
            2 => CaseType::VulnerableNoExploit,
            3 => CaseType::Fixed,
            _ => CaseType::NotApplicable,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            CaseType::ActivelyExploited => 1,
            CaseType::VulnerableNoExploit => 2,
            CaseType::Fixed => 3,
            CaseType::NotApplicable => 4,
        }
    }
}

impl Serialize for CaseType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CaseType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Ok(CaseType::from_code(code))
    }
}

/// Preview of one article inside a briefing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupArticlePreview {
    pub id: String,
    pub title: String,
    pub url: String,
    pub published_at: String,
    pub source: ArticleSource,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub signals: Vec<ArticleSignal>,
}

/// A server-produced cluster of related articles with a generated
/// narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBriefing {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub executive_summary: String,
    pub impact_analysis: String,
    pub actionability: String,
    pub confidence: f64,
    pub date: String,
    pub article_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    #[serde(default)]
    pub articles: Vec<GroupArticlePreview>,
}

impl GroupBriefing {
    /// The effective classification, with absence folded into
    /// [`CaseType::NotApplicable`].
    pub fn case_type_or_default(&self) -> CaseType {
        self.case_type.unwrap_or(CaseType::NotApplicable)
    }
}

/// One page of the grouped intelligence feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedFeedResponse {
    pub groups: Vec<GroupBriefing>,
    pub pagination: PaginationInfo,
}

/// One article inside a group detail, with full body fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupArticleFull {
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: Option<String>,
    pub clean_text: Option<String>,
    pub summary: Option<String>,
    pub published_at: String,
    pub author: Option<String>,
    pub source: ArticleSource,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub signals: Vec<ArticleSignal>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub read: bool,
}

/// A briefing with complete article bodies, as returned by the group
/// detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub executive_summary: String,
    pub impact_analysis: String,
    pub actionability: String,
    pub confidence: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    #[serde(default)]
    pub articles: Vec<GroupArticleFull>,
}
