use crate::{build_profile, build_timeline, extract_keywords, sentiment::analyze_sentiment};
use chrono::{DateTime, Utc};
use profiler_core::{
    AnalysisConfig, AnalysisError, AnalysisResult, ContentFetcher, ContentItem, ContentStats,
    ContentType, CoreError, ErrorExt, SentimentScorer, UserInfo,
};
use tracing::{debug, error, info, warn};

/// Runs one analysis per call against injected fetch and scoring capabilities.
///
/// Holds no per-request state, so one instance can serve any number of
/// usernames.
pub struct Analyzer<F, S> {
    fetcher: F,
    scorer: S,
    settings: AnalysisConfig,
}

impl<F, S> Analyzer<F, S>
where
    F: ContentFetcher,
    S: SentimentScorer,
{
    pub fn new(fetcher: F, scorer: S) -> Self {
        Self {
            fetcher,
            scorer,
            settings: AnalysisConfig::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnalysisConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &AnalysisConfig {
        &self.settings
    }

    pub async fn analyze(&self, username: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_at(username, Utc::now()).await
    }

    /// Same as [`Analyzer::analyze`] with account age measured against `now`.
    pub async fn analyze_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let username = normalize_username(username)?;
        info!("Analyzing user u/{}", username);

        let account = self
            .fetcher
            .fetch_user_info(&username)
            .await
            .map_err(|e| {
                e.log_warn();
                AnalysisError::from_core(&username, e)
            })?;
        if account.is_suspended {
            warn!("Account u/{} is suspended", username);
            return Err(AnalysisError::UserNotFound { username });
        }
        let user_info = UserInfo::from_account(&account, now);

        let limit = self.settings.content_limit;
        let posts = degrade(
            ContentType::Posts,
            self.fetcher.fetch_posts(&username, limit).await,
        );
        let comments = degrade(
            ContentType::Comments,
            self.fetcher.fetch_comments(&username, limit).await,
        );
        info!(
            "Fetched {} posts and {} comments for u/{}",
            posts.len(),
            comments.len(),
            username
        );

        analyze_content(
            &self.scorer,
            &username,
            user_info,
            posts,
            comments,
            &self.settings,
        )
        .map_err(|e| {
            error!("Error analyzing user {}: {}", username, e);
            AnalysisError::from_core(&username, e)
        })
    }
}

/// Turns a failed content fetch into an empty list so analysis can go on.
fn degrade(
    content_type: ContentType,
    fetched: Result<Vec<ContentItem>, CoreError>,
) -> Vec<ContentItem> {
    match fetched {
        Ok(items) => items,
        Err(e) => {
            AnalysisError::PartialFetchFailure {
                content_type,
                reason: e.to_string(),
            }
            .log_warn();
            Vec::new()
        }
    }
}

/// The pure part of an analysis: every stage after fetching.
pub fn analyze_content<S: SentimentScorer>(
    scorer: &S,
    username: &str,
    user_info: UserInfo,
    posts: Vec<ContentItem>,
    comments: Vec<ContentItem>,
    settings: &AnalysisConfig,
) -> Result<AnalysisResult, CoreError> {
    let sentiment_analysis = analyze_sentiment(scorer, posts.iter().chain(&comments))?;
    debug!(
        "Sentiment: {} items, polarity {}",
        sentiment_analysis.total_analyzed, sentiment_analysis.overall_polarity
    );

    let timeline_data = build_timeline(posts.iter().chain(&comments));
    let top_keywords = extract_keywords(&comments, settings.keyword_count);
    let character_analysis =
        build_profile(&sentiment_analysis, &posts, &comments, settings.focus_count);
    debug!(
        "Built {} timeline entries and {} keywords",
        timeline_data.len(),
        top_keywords.len()
    );

    Ok(AnalysisResult {
        username: username.to_string(),
        user_info,
        sentiment_analysis,
        timeline_data,
        top_keywords,
        character_analysis,
        content_stats: ContentStats::new(posts.len(), comments.len()),
    })
}

/// Trims input and strips a leading `u/`.
pub fn normalize_username(raw: &str) -> Result<String, AnalysisError> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix("u/").unwrap_or(trimmed).trim();
    if name.is_empty() {
        return Err(AnalysisError::InvalidUsername);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  spez ").unwrap(), "spez");
        assert_eq!(normalize_username("u/spez").unwrap(), "spez");
        assert_eq!(normalize_username("u/"), Err(AnalysisError::InvalidUsername));
        assert_eq!(normalize_username("   "), Err(AnalysisError::InvalidUsername));
    }

    #[test]
    fn test_degrade_keeps_successful_fetches() {
        let items = vec![ContentItem::comment("c", "a", "b", 1, 0, "p")];
        assert_eq!(degrade(ContentType::Comments, Ok(items.clone())), items);
        let failed = degrade(ContentType::Posts, Err(CoreError::Timeout { seconds: 30 }));
        assert!(failed.is_empty());
    }
}
