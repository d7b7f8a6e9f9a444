use analysis_engine::{AnalysisReport, Analyzer};
use anyhow::Context;
use clap::Parser;
use profiler_core::{AnalysisError, AnalysisResult, AppConfig, ErrorExt, ErrorReporter};
use reddit_client::RedditClient;
use sentiment_engine::LexiconScorer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "reddit_profiler=info,analysis_engine=info,reddit_client=info,sentiment_engine=warn";

/// Profile a Reddit user's public activity and print the analysis as JSON.
#[derive(Debug, Parser)]
#[command(name = "reddit-profiler", version, about)]
struct Args {
    /// Reddit username, with or without the `u/` prefix
    username: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum posts and comments fetched, each
    #[arg(short, long)]
    limit: Option<u32>,

    /// Number of keywords to report
    #[arg(short, long)]
    keywords: Option<usize>,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load(args.config.as_deref()).map_err(|e| {
        e.log_error();
        anyhow::anyhow!(e.user_friendly_message())
    })?;
    if let Some(limit) = args.limit {
        config.analysis.content_limit = limit;
    }
    if let Some(keywords) = args.keywords {
        config.analysis.keyword_count = keywords;
    }
    config.validate().context("invalid command line overrides")?;

    let outcome = run(&config, &args.username).await;
    if let Err(error) = &outcome {
        ErrorReporter::new().report_error(error);
    }

    let report = AnalysisReport::from(outcome);
    println!(
        "{}",
        report
            .to_json(!args.compact)
            .context("failed to serialize report")?
    );

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run(config: &AppConfig, username: &str) -> Result<AnalysisResult, AnalysisError> {
    let unavailable = |reason: String| AnalysisError::CapabilityUnavailable {
        capability: "Reddit API".to_string(),
        reason,
    };

    let credentials = config
        .reddit_credentials()
        .map_err(|e| unavailable(e.to_string()))?;
    let client = RedditClient::connect(credentials)
        .await
        .map_err(|e| unavailable(e.to_string()))?;

    let analyzer =
        Analyzer::new(client, LexiconScorer::new()).with_settings(config.analysis.clone());
    analyzer.analyze(username).await
}
