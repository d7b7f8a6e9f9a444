pub mod api;
pub mod auth;

pub use api::{
    RedditApiClient, RedditCommentData, RedditListing, RedditListingChild, RedditListingData,
    RedditPostData, RedditUserData, UserListing, MAX_PAGE_SIZE,
};
pub use auth::{AuthState, RedditToken, TokenResponse};

use profiler_core::{ContentFetcher, ContentItem, CoreError, RedditAccount, RedditCredentials};
use tracing::info;

/// Read-only Reddit client using application-only OAuth.
#[derive(Debug)]
pub struct RedditClient {
    api: RedditApiClient,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials) -> Result<Self, CoreError> {
        Ok(Self {
            api: RedditApiClient::new(credentials)?,
        })
    }

    /// Builds the client and fetches a token up front so bad credentials
    /// surface before any analysis starts.
    pub async fn connect(credentials: RedditCredentials) -> Result<Self, CoreError> {
        let client = Self::new(credentials)?;
        client.api.authenticate().await?;
        info!("Reddit client ready ({})", client.api.user_agent());
        Ok(client)
    }

    pub fn api(&self) -> &RedditApiClient {
        &self.api
    }

    pub async fn auth_state(&self) -> AuthState {
        self.api.auth_state().await
    }
}

impl ContentFetcher for RedditClient {
    async fn fetch_user_info(&self, username: &str) -> Result<RedditAccount, CoreError> {
        let user = self.api.get_user_about(username).await?;
        Ok(user.into())
    }

    async fn fetch_posts(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        let posts: Vec<RedditPostData> = self
            .api
            .get_user_listing(username, UserListing::Submitted, limit)
            .await?;
        Ok(posts.into_iter().map(ContentItem::from).collect())
    }

    async fn fetch_comments(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        let comments: Vec<RedditCommentData> = self
            .api
            .get_user_listing(username, UserListing::Comments, limit)
            .await?;
        Ok(comments.into_iter().map(ContentItem::from).collect())
    }
}

#[cfg(test)]
mod tests;
