use crate::ConfigError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub const ENV_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const ENV_USER_AGENT: &str = "REDDIT_USER_AGENT";

pub const DEFAULT_USER_AGENT: &str = "RedditUserAnalyzer/1.0";
pub const DEFAULT_CONTENT_LIMIT: u32 = 100;
pub const DEFAULT_KEYWORD_COUNT: usize = 10;
pub const DEFAULT_FOCUS_COUNT: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reddit: RedditConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub user_agent: String,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum posts and maximum comments fetched per user.
    pub content_limit: u32,
    pub keyword_count: usize,
    pub focus_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            content_limit: DEFAULT_CONTENT_LIMIT,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            focus_count: DEFAULT_FOCUS_COUNT,
        }
    }
}

/// Client credentials for app-only Reddit OAuth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl AppConfig {
    /// Reads the TOML file (when given) and applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Unreadable {
                path: path.display().to_string(),
                source: e,
            },
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(client_id) = non_empty(ENV_CLIENT_ID) {
            self.reddit.client_id = Some(client_id);
        }
        if let Some(client_secret) = non_empty(ENV_CLIENT_SECRET) {
            self.reddit.client_secret = Some(client_secret);
        }
        if let Some(user_agent) = non_empty(ENV_USER_AGENT) {
            self.reddit.user_agent = user_agent;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.content_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.content_limit".to_string(),
                value: "0".to_string(),
            });
        }
        if self.reddit.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "reddit.user_agent".to_string(),
            });
        }
        Ok(())
    }

    pub fn reddit_credentials(&self) -> Result<RedditCredentials, ConfigError> {
        let client_id =
            self.reddit
                .client_id
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvironmentVariable {
                    var_name: ENV_CLIENT_ID.to_string(),
                })?;
        let client_secret = self.reddit.client_secret.clone().ok_or_else(|| {
            ConfigError::MissingEnvironmentVariable {
                var_name: ENV_CLIENT_SECRET.to_string(),
            }
        })?;

        Ok(RedditCredentials {
            client_id,
            client_secret,
            user_agent: self.reddit.user_agent.clone(),
        })
    }
}
