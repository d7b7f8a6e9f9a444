use crate::auth::{AuthState, RedditToken, TokenResponse};
use profiler_core::{
    ConfigError, ContentItem, CoreError, RedditAccount, RedditApiError, RedditCredentials,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use url::Url;

pub const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
pub const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Largest page Reddit serves for a listing request.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditPostData {
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub subreddit: String,
    pub url: String,
    pub created_utc: f64,
    pub score: i64,
    pub num_comments: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditCommentData {
    pub id: String,
    pub body: String,
    pub subreddit: String,
    pub parent_id: String,
    pub created_utc: f64,
    pub score: i64,
}

/// Suspended accounts come back with little more than `name` and
/// `is_suspended`, so every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditUserData {
    pub name: String,
    pub created_utc: f64,
    pub link_karma: i64,
    pub comment_karma: i64,
    pub verified: bool,
    pub is_gold: bool,
    pub is_suspended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListing {
    Submitted,
    Comments,
}

impl UserListing {
    fn path(self) -> &'static str {
        match self {
            UserListing::Submitted => "submitted",
            UserListing::Comments => "comments",
        }
    }
}

#[derive(Debug)]
pub struct RedditApiClient {
    http_client: Client,
    credentials: RedditCredentials,
    api_base: Url,
    token_url: Url,
    token: Mutex<Option<RedditToken>>,
}

impl RedditApiClient {
    pub fn new(credentials: RedditCredentials) -> Result<Self, CoreError> {
        Self::with_endpoints(credentials, REDDIT_API_BASE, REDDIT_TOKEN_URL)
    }

    pub fn with_endpoints(
        credentials: RedditCredentials,
        api_base: &str,
        token_url: &str,
    ) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&credentials.user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            credentials,
            api_base: parse_url("api_base", api_base)?,
            token_url: parse_url("token_url", token_url)?,
            token: Mutex::new(None),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.credentials.user_agent
    }

    pub async fn auth_state(&self) -> AuthState {
        AuthState::of(self.token.lock().await.as_ref())
    }

    /// Requests an app-only token with the client-credentials grant.
    pub async fn authenticate(&self) -> Result<(), CoreError> {
        let response = self
            .http_client
            .post(self.token_url.clone())
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Token request failed with status {}", status);
            return Err(RedditApiError::AuthenticationFailed {
                reason: format!("token endpoint returned {}", status),
            }
            .into());
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse token response: {}", e);
            RedditApiError::AuthenticationFailed {
                reason: "malformed token response".to_string(),
            }
        })?;
        debug!("Received {} token", body.token_type);

        let token = RedditToken::from_response(body, SystemTime::now());
        info!("Authenticated with Reddit as application");
        *self.token.lock().await = Some(token);
        Ok(())
    }

    async fn access_token(&self) -> Result<String, CoreError> {
        {
            let token = self.token.lock().await;
            if let Some(token) = token.as_ref().filter(|t| !t.is_expired()) {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Access token missing or expired, re-authenticating");
        self.authenticate().await?;
        let token = self.token.lock().await;
        token
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or(CoreError::RedditApi(RedditApiError::InvalidToken))
    }

    pub async fn make_request(
        &self,
        endpoint: &str,
        query_params: &[(&str, String)],
    ) -> Result<Response, CoreError> {
        let access_token = self.access_token().await?;
        let url = self.endpoint_url(endpoint)?;

        info!("Making Reddit API request: GET {}", endpoint);
        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .query(query_params)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for GET {}: {}", endpoint, e);
                if e.is_timeout() {
                    CoreError::RedditApi(RedditApiError::RequestTimeout)
                } else {
                    CoreError::Network(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {} {}", status, endpoint);
            return Ok(response);
        }

        error!("Request failed with status: {} for {}", status, endpoint);
        let error = match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(60);
                warn!("Rate limited, retry after {} seconds", retry_after);
                CoreError::RedditApi(RedditApiError::RateLimitExceeded { retry_after })
            }
            401 => CoreError::RedditApi(RedditApiError::InvalidToken),
            403 => CoreError::RedditApi(RedditApiError::Forbidden {
                resource: endpoint.to_string(),
            }),
            404 => CoreError::NotFound {
                resource: endpoint.to_string(),
            },
            code if status.is_server_error() => {
                CoreError::RedditApi(RedditApiError::ServerError { status_code: code })
            }
            code => CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("unexpected status {}", code),
            }),
        };
        Err(error)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, CoreError> {
        self.api_base.join(endpoint).map_err(|e| {
            RedditApiError::InvalidResponse {
                details: format!("invalid endpoint {}: {}", endpoint, e),
            }
            .into()
        })
    }

    pub async fn get_user_about(&self, username: &str) -> Result<RedditUserData, CoreError> {
        let endpoint = format!("/user/{}/about", username);
        let response = match self.make_request(&endpoint, &[("raw_json", "1".to_string())]).await {
            Ok(response) => response,
            // Reddit answers 404 for unknown and 403 for some suspended accounts
            Err(CoreError::NotFound { .. })
            | Err(CoreError::RedditApi(RedditApiError::Forbidden { .. })) => {
                return Err(RedditApiError::UserNotFound {
                    username: username.to_string(),
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        let about: RedditListingChild<RedditUserData> = parse_json(response, &endpoint).await?;
        if about.data.is_suspended {
            return Err(RedditApiError::UserSuspended {
                username: username.to_string(),
            }
            .into());
        }

        debug!("Retrieved user info for: {}", about.data.name);
        Ok(about.data)
    }

    /// Pages through a user listing, newest first, until `limit` items are
    /// collected or the listing runs out.
    pub async fn get_user_listing<T: DeserializeOwned>(
        &self,
        username: &str,
        listing: UserListing,
        limit: u32,
    ) -> Result<Vec<T>, CoreError> {
        let endpoint = format!("/user/{}/{}", username, listing.path());
        let mut items = Vec::new();
        let mut after: Option<String> = None;

        while (items.len() as u32) < limit {
            let remaining = limit - items.len() as u32;
            let mut params = vec![
                ("limit", remaining.min(MAX_PAGE_SIZE).to_string()),
                ("sort", "new".to_string()),
                ("raw_json", "1".to_string()),
            ];
            if let Some(cursor) = after.take() {
                params.push(("after", cursor));
            }

            let response = self.make_request(&endpoint, &params).await?;
            let page: RedditListing<T> = parse_json(response, &endpoint).await?;
            let fetched = page.data.children.len();
            items.extend(page.data.children.into_iter().map(|child| child.data));

            match page.data.after {
                Some(cursor) if fetched > 0 => after = Some(cursor),
                _ => break,
            }
        }

        items.truncate(limit as usize);
        info!("Retrieved {} items from {}", items.len(), endpoint);
        Ok(items)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, CoreError> {
    response.json().await.map_err(|e| {
        error!("Failed to parse response from {}: {}", endpoint, e);
        RedditApiError::InvalidResponse {
            details: format!("Failed to parse response from {}", endpoint),
        }
        .into()
    })
}

fn parse_url(field: &str, value: &str) -> Result<Url, CoreError> {
    Url::parse(value).map_err(|_| {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}

impl From<RedditPostData> for ContentItem {
    fn from(post: RedditPostData) -> Self {
        ContentItem::post(
            post.id,
            post.subreddit,
            post.title,
            post.selftext,
            post.score,
            post.created_utc as i64,
        )
        .with_num_comments(post.num_comments)
        .with_url(post.url)
    }
}

impl From<RedditCommentData> for ContentItem {
    fn from(comment: RedditCommentData) -> Self {
        ContentItem::comment(
            comment.id,
            comment.subreddit,
            comment.body,
            comment.score,
            comment.created_utc as i64,
            comment.parent_id,
        )
    }
}

impl From<RedditUserData> for RedditAccount {
    fn from(user: RedditUserData) -> Self {
        Self {
            name: user.name,
            created_utc: user.created_utc as i64,
            link_karma: user.link_karma,
            comment_karma: user.comment_karma,
            verified: user.verified,
            is_gold: user.is_gold,
            is_suspended: user.is_suspended,
        }
    }
}
