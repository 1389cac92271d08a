//! Feed domain: the flat article feed, the grouped intelligence briefing,
//! period reports, and digest results.

pub mod digest;
pub mod model;
pub mod period;
pub mod report;

pub use digest::{DigestAllResult, DigestOutcome, DigestResult, ResetOutcome, UserDigestOutcome};
pub use model::{
    ArticleSignal, ArticleSource, CaseType, Entity, EntityType, FeedArticle, FeedArticleDetail,
    FeedResponse, GroupArticleFull, GroupArticlePreview, GroupBriefing, GroupDetail,
    GroupedFeedResponse, PaginationInfo,
};
pub use period::Period;
pub use report::{EntityMention, PeriodReport, ReportStats};
