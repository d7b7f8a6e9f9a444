use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body text Reddit substitutes for removed content.
pub const DELETED_MARKER: &str = "[deleted]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentDetails {
    Post {
        title: String,
        num_comments: u32,
        url: String,
    },
    Comment {
        parent_id: String,
    },
}

/// A single post or comment as returned by the content fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub body: String,
    pub score: i64,
    pub created_utc: i64,
    pub subreddit: String,
    #[serde(flatten)]
    pub details: ContentDetails,
}

impl ContentItem {
    pub fn post(
        id: impl Into<String>,
        subreddit: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        score: i64,
        created_utc: i64,
    ) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            score,
            created_utc: created_utc.max(0),
            subreddit: subreddit.into(),
            details: ContentDetails::Post {
                title: title.into(),
                num_comments: 0,
                url: String::new(),
            },
        }
    }

    pub fn comment(
        id: impl Into<String>,
        subreddit: impl Into<String>,
        body: impl Into<String>,
        score: i64,
        created_utc: i64,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            score,
            created_utc: created_utc.max(0),
            subreddit: subreddit.into(),
            details: ContentDetails::Comment {
                parent_id: parent_id.into(),
            },
        }
    }

    pub fn with_num_comments(mut self, count: u32) -> Self {
        if let ContentDetails::Post { num_comments, .. } = &mut self.details {
            *num_comments = count;
        }
        self
    }

    pub fn with_url(mut self, link: impl Into<String>) -> Self {
        if let ContentDetails::Post { url, .. } = &mut self.details {
            *url = link.into();
        }
        self
    }

    pub fn kind(&self) -> ContentKind {
        match self.details {
            ContentDetails::Post { .. } => ContentKind::Post,
            ContentDetails::Comment { .. } => ContentKind::Comment,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.details {
            ContentDetails::Post { title, .. } => Some(title),
            ContentDetails::Comment { .. } => None,
        }
    }

    /// Text fed to the sentiment scorer: `title body` for posts, the body for
    /// comments. `None` when nothing is left to analyze.
    pub fn analyzable_text(&self) -> Option<String> {
        let text = match &self.details {
            ContentDetails::Post { title, .. } => format!("{} {}", title, self.body),
            ContentDetails::Comment { .. } => self.body.clone(),
        };
        if is_analyzable(&text) {
            Some(text)
        } else {
            None
        }
    }
}

/// True when `text` is neither blank nor the deletion marker.
pub fn is_analyzable(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed != DELETED_MARKER
}

/// Converts Unix seconds to a UTC instant, saturating at the bounds chrono
/// can represent.
pub fn utc_datetime(timestamp: i64) -> DateTime<Utc> {
    let clamped = timestamp.clamp(
        DateTime::<Utc>::MIN_UTC.timestamp(),
        DateTime::<Utc>::MAX_UTC.timestamp(),
    );
    DateTime::from_timestamp(clamped, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Polarity/subjectivity pair produced by a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub polarity: f64,
    pub subjectivity: f64,
    pub score: i64,
    pub created_utc: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub overall_polarity: f64,
    pub overall_subjectivity: f64,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    pub total_analyzed: usize,
    pub sentiment_summary: String,
    pub sentiment_distribution: Vec<ScoredItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub posts: usize,
    pub comments: usize,
    pub total_activity: usize,
    pub total_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Optimistic,
    Critical,
    Balanced,
    Opinionated,
    Factual,
    Moderate,
    #[serde(rename = "Content Creator")]
    ContentCreator,
    #[serde(rename = "Active Commenter")]
    ActiveCommenter,
    #[serde(rename = "Insufficient data for analysis")]
    InsufficientData,
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersonalityTrait::Optimistic => "Optimistic",
            PersonalityTrait::Critical => "Critical",
            PersonalityTrait::Balanced => "Balanced",
            PersonalityTrait::Opinionated => "Opinionated",
            PersonalityTrait::Factual => "Factual",
            PersonalityTrait::Moderate => "Moderate",
            PersonalityTrait::ContentCreator => "Content Creator",
            PersonalityTrait::ActiveCommenter => "Active Commenter",
            PersonalityTrait::InsufficientData => "Insufficient data for analysis",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunicationStyle {
    #[serde(rename = "Expressive and Personal")]
    ExpressiveAndPersonal,
    #[serde(rename = "Objective and Factual")]
    ObjectiveAndFactual,
    #[serde(rename = "Balanced and Thoughtful")]
    BalancedAndThoughtful,
    Unknown,
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommunicationStyle::ExpressiveAndPersonal => "Expressive and Personal",
            CommunicationStyle::ObjectiveAndFactual => "Objective and Factual",
            CommunicationStyle::BalancedAndThoughtful => "Balanced and Thoughtful",
            CommunicationStyle::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementLevel {
    #[serde(rename = "Highly Active")]
    HighlyActive,
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    #[serde(rename = "Casual User")]
    CasualUser,
    Unknown,
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EngagementLevel::HighlyActive => "Highly Active",
            EngagementLevel::ModeratelyActive => "Moderately Active",
            EngagementLevel::CasualUser => "Casual User",
            EngagementLevel::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub personality_traits: Vec<PersonalityTrait>,
    pub communication_style: CommunicationStyle,
    pub engagement_level: EngagementLevel,
    pub content_focus: Vec<String>,
}

/// Raw account record returned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditAccount {
    pub name: String,
    pub created_utc: i64,
    pub link_karma: i64,
    pub comment_karma: i64,
    pub verified: bool,
    pub is_gold: bool,
    pub is_suspended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub post_karma: i64,
    pub comment_karma: i64,
    pub total_karma: i64,
    pub account_created: String,
    pub account_age_days: i64,
    pub account_age_years: f64,
    pub is_verified: bool,
    pub has_premium: bool,
}

impl UserInfo {
    pub fn from_account(account: &RedditAccount, now: DateTime<Utc>) -> Self {
        let created = utc_datetime(account.created_utc);
        let account_age_days = (now - created).num_days();

        Self {
            username: account.name.clone(),
            post_karma: account.link_karma,
            comment_karma: account.comment_karma,
            total_karma: account.link_karma + account.comment_karma,
            account_created: created.format("%Y-%m-%d").to_string(),
            account_age_days,
            account_age_years: ((account_age_days as f64 / 365.25) * 10.0).round() / 10.0,
            is_verified: account.verified,
            has_premium: account.is_gold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_content: usize,
}

impl ContentStats {
    pub fn new(total_posts: usize, total_comments: usize) -> Self {
        Self {
            total_posts,
            total_comments,
            total_content: total_posts + total_comments,
        }
    }
}

/// Everything computed for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub username: String,
    pub user_info: UserInfo,
    pub sentiment_analysis: SentimentSummary,
    pub timeline_data: Vec<TimelineEntry>,
    pub top_keywords: Vec<KeywordEntry>,
    pub character_analysis: CharacterProfile,
    pub content_stats: ContentStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_analyzable_text_joins_title_and_body() {
        let post = ContentItem::post("p1", "rust", "Title", "Body text", 3, 1_600_000_000);
        assert_eq!(post.kind(), ContentKind::Post);
        assert_eq!(post.analyzable_text(), Some("Title Body text".to_string()));
    }

    #[test]
    fn test_deleted_and_blank_comments_are_not_analyzable() {
        let deleted = ContentItem::comment("c1", "rust", "[deleted]", 1, 0, "t3_x");
        let blank = ContentItem::comment("c2", "rust", "   \n", 1, 0, "t3_x");
        assert_eq!(deleted.analyzable_text(), None);
        assert_eq!(blank.analyzable_text(), None);
    }

    #[test]
    fn test_negative_timestamp_is_clamped() {
        let comment = ContentItem::comment("c1", "rust", "hi", 1, -50, "t3_x");
        assert_eq!(comment.created_utc, 0);
    }

    #[test]
    fn test_sentiment_score_is_clamped() {
        let score = SentimentScore::new(1.7, -0.2);
        assert_eq!(score.polarity, 1.0);
        assert_eq!(score.subjectivity, 0.0);
    }

    #[test]
    fn test_user_info_from_account() {
        let account = RedditAccount {
            name: "spez".to_string(),
            created_utc: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap().timestamp(),
            link_karma: 120,
            comment_karma: 30,
            verified: true,
            is_gold: false,
            is_suspended: false,
        };
        let now = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

        let info = UserInfo::from_account(&account, now);
        assert_eq!(info.total_karma, 150);
        assert_eq!(info.account_created, "2020-01-01");
        assert_eq!(info.account_age_days, 731);
        assert_eq!(info.account_age_years, 2.0);
        assert!(info.is_verified);
    }

    #[test]
    fn test_out_of_range_timestamps_saturate() {
        assert_eq!(
            utc_datetime(i64::MAX).timestamp(),
            DateTime::<Utc>::MAX_UTC.timestamp()
        );
        assert_eq!(
            utc_datetime(i64::MIN).timestamp(),
            DateTime::<Utc>::MIN_UTC.timestamp()
        );
        assert_eq!(utc_datetime(0).format("%Y-%m-%d").to_string(), "1970-01-01");
    }

    #[test]
    fn test_trait_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&PersonalityTrait::ContentCreator).unwrap();
        assert_eq!(json, "\"Content Creator\"");
        assert_eq!(EngagementLevel::CasualUser.to_string(), "Casual User");
    }

    #[test]
    fn test_content_stats_totals() {
        let stats = ContentStats::new(4, 6);
        assert_eq!(stats.total_content, 10);
    }
}
