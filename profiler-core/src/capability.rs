//! Capabilities the analysis pipeline consumes but does not implement.
//!
//! The orchestrator receives these by injection so that platform clients and
//! scoring models stay outside the pure analytics code.

use crate::{ContentItem, CoreError, RedditAccount, SentimentScore};

/// Source of account metadata and public activity for a username.
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    /// Looks up the account. Missing or suspended accounts are reported as
    /// `RedditApiError::UserNotFound` / `RedditApiError::UserSuspended`.
    async fn fetch_user_info(&self, username: &str) -> Result<RedditAccount, CoreError>;

    /// Newest posts first, at most `limit` items.
    async fn fetch_posts(&self, username: &str, limit: u32)
        -> Result<Vec<ContentItem>, CoreError>;

    /// Newest comments first, at most `limit` items.
    async fn fetch_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError>;
}

/// Scores one text blob. Polarity lies in [-1, 1], subjectivity in [0, 1].
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, CoreError>;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> Result<SentimentScore, CoreError> {
        (**self).score(text)
    }
}

impl<T: ContentFetcher> ContentFetcher for &T {
    async fn fetch_user_info(&self, username: &str) -> Result<RedditAccount, CoreError> {
        (**self).fetch_user_info(username).await
    }

    async fn fetch_posts(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        (**self).fetch_posts(username, limit).await
    }

    async fn fetch_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        (**self).fetch_comments(username, limit).await
    }
}
