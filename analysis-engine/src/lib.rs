//! Analytics pipeline turning a user's posts and comments into sentiment,
//! timeline, keyword and character summaries.

pub mod analyzer;
pub mod frequency;
pub mod keywords;
pub mod profile;
pub mod report;
pub mod sentiment;
pub mod stop_words;
pub mod timeline;

pub use analyzer::{analyze_content, normalize_username, Analyzer};
pub use keywords::extract_keywords;
pub use profile::build_profile;
pub use report::AnalysisReport;
pub use sentiment::analyze_sentiment;
pub use timeline::build_timeline;
