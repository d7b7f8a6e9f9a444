use profiler_core::{AnalysisError, AnalysisResult, ErrorExt};
use serde::Serialize;

/// Success/failure envelope handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    #[serde(flatten)]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl AnalysisReport {
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            error_code: None,
        }
    }

    pub fn failure(error: &AnalysisError) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.user_friendly_message()),
            error_code: Some(error.error_code()),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Result<AnalysisResult, AnalysisError>> for AnalysisReport {
    fn from(outcome: Result<AnalysisResult, AnalysisError>) -> Self {
        match outcome {
            Ok(result) => Self::success(result),
            Err(error) => Self::failure(&error),
        }
    }
}
