use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Tokens are refreshed this long before Reddit would reject them.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditToken {
    pub access_token: String,
    pub expires_at: SystemTime,
    pub scope: Vec<String>,
}

impl RedditToken {
    pub fn from_response(response: TokenResponse, issued_at: SystemTime) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: issued_at + Duration::from_secs(response.expires_in),
            scope: response
                .scope
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(SystemTime::now())
    }

    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        now + EXPIRY_MARGIN >= self.expires_at
    }
}

/// Body of `POST /api/v1/access_token` for the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    NotAuthenticated,
    Authenticated { expires_at: SystemTime },
    TokenExpired { expired_at: SystemTime },
}

impl AuthState {
    pub fn of(token: Option<&RedditToken>) -> Self {
        match token {
            None => AuthState::NotAuthenticated,
            Some(token) if token.is_expired() => AuthState::TokenExpired {
                expired_at: token.expires_at,
            },
            Some(token) => AuthState::Authenticated {
                expires_at: token.expires_at,
            },
        }
    }
}
