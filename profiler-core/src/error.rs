use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Reddit API error: {0}")]
    RedditApi(#[from] RedditApiError),

    #[error("Sentiment error: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Operation timeout after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

#[derive(Error, Debug, Clone)]
pub enum RedditApiError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Forbidden access to resource: {resource}")]
    Forbidden { resource: String },

    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("User account suspended: {username}")]
    UserSuspended { username: String },

    #[error("Invalid OAuth token")]
    InvalidToken,

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },

    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },
}

#[derive(Error, Debug, Clone)]
pub enum SentimentError {
    #[error("Sentiment lexicon unavailable: {reason}")]
    LexiconUnavailable { reason: String },

    #[error("Scoring failed for {text_length} characters: {reason}")]
    ScoringFailed { text_length: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Environment variable not set: {var_name}")]
    MissingEnvironmentVariable { var_name: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failures surfaced by the analysis orchestrator. Every variant is reported
/// to the caller; none of them is fatal to the hosting process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("{capability} is not available: {reason}")]
    CapabilityUnavailable { capability: String, reason: String },

    #[error("Please enter a valid Reddit username")]
    InvalidUsername,

    #[error("User \"{username}\" not found or account is suspended")]
    UserNotFound { username: String },

    #[error("Failed to fetch {content_type}: {reason}")]
    PartialFetchFailure {
        content_type: ContentType,
        reason: String,
    },

    #[error("Failed to analyze user: {message}")]
    AnalysisFailed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Posts,
    Comments,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Posts => write!(f, "posts"),
            ContentType::Comments => write!(f, "comments"),
        }
    }
}

impl AnalysisError {
    /// Classifies a capability error raised while the orchestrator runs.
    pub fn from_core(username: &str, error: CoreError) -> Self {
        match error {
            CoreError::RedditApi(
                RedditApiError::UserNotFound { .. } | RedditApiError::UserSuspended { .. },
            ) => AnalysisError::UserNotFound {
                username: username.to_string(),
            },
            CoreError::Config(e) => AnalysisError::CapabilityUnavailable {
                capability: "Reddit API".to_string(),
                reason: e.to_string(),
            },
            CoreError::Sentiment(SentimentError::LexiconUnavailable { reason }) => {
                AnalysisError::CapabilityUnavailable {
                    capability: "Sentiment scorer".to_string(),
                    reason,
                }
            }
            other => AnalysisError::AnalysisFailed {
                message: other.to_string(),
            },
        }
    }
}
