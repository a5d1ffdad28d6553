//! # CLI Module
//!
//! Command-line interface for the Stability Calculator.
//!
//! ## Commands
//!
//! - `serve` - Serve the built frontend
//! - `evaluate` - Score a ratings file and print the report
//! - `submit` - Score a ratings file and post it to the submission endpoint
//! - `request-analysis` - Ask for a full analysis of a composite score

use crate::api;
use crate::config::{DEFAULT_DIST_DIR, DEFAULT_PORT, ServerConfig};
use crate::error::AppError;
use crate::webhook::WebhookClient;
use clap::{Args, Parser, Subcommand};
use stability_core::{
    AgeRange, AnalysisRequest, CommunityAverages, CompositeResult, CompositeScore, Demographics,
    Dimension, Evaluation, Rating, Region, Results, ScoreReport,
};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Stability Calculator - policy stability survey scoring.
#[derive(Debug, Parser)]
#[command(name = "stability", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the built frontend
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Build output directory
        #[arg(long, env = "STABILITY_DIST", default_value = DEFAULT_DIST_DIR)]
        dist: PathBuf,
    },

    /// Score a ratings file
    Evaluate {
        #[command(flatten)]
        ratings: RatingsArgs,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a ratings file and post the survey response
    Submit {
        #[command(flatten)]
        ratings: RatingsArgs,

        /// Respondent age range (18-24, 25-34, 35-44, 45-54, 55-64, 65+)
        #[arg(long)]
        age_range: Option<AgeRange>,

        /// Respondent region (northeast, southeast, midwest, southwest, west)
        #[arg(long)]
        region: Option<Region>,

        /// Submission endpoint
        #[arg(long, env = "STABILITY_WEBHOOK_URL")]
        webhook: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Request a full analysis of a composite score
    RequestAnalysis {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Composite score (0-100, up to four decimals, e.g. 91.15)
        #[arg(long)]
        score: CompositeScore,

        /// Survey identifier returned by an earlier submission
        #[arg(long)]
        survey_id: Option<String>,

        /// Submission endpoint
        #[arg(long, env = "STABILITY_WEBHOOK_URL")]
        webhook: String,
    },
}

/// A ratings file and its format.
#[derive(Debug, Clone, Args)]
pub struct RatingsArgs {
    /// Ratings file
    pub file: PathBuf,

    /// Ratings file format (json, text)
    #[arg(short, long, default_value = "json")]
    pub format: RatingsFormat,
}

/// Supported ratings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingsFormat {
    /// `{"immigration": 80, "economy": "B"}`
    Json,
    /// One `id:value` per line
    Text,
}

impl FromStr for RatingsFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(AppError::UnknownFormat(other.to_string())),
        }
    }
}

// =============================================================================
// RATINGS FILES
// =============================================================================

/// Read a ratings file into (dimension, rating) pairs.
pub fn load_ratings(
    path: &Path,
    format: RatingsFormat,
) -> Result<Vec<(Dimension, Rating)>, AppError> {
    let content = std::fs::read_to_string(path)?;
    match format {
        RatingsFormat::Json => parse_json_ratings(&content),
        RatingsFormat::Text => parse_text_ratings(&content),
    }
}

fn parse_json_ratings(content: &str) -> Result<Vec<(Dimension, Rating)>, AppError> {
    let raw: BTreeMap<String, Rating> = serde_json::from_str(content)?;
    raw.into_iter()
        .map(|(id, rating)| Ok((id.parse::<Dimension>()?, rating)))
        .collect()
}

fn parse_text_ratings(content: &str) -> Result<Vec<(Dimension, Rating)>, AppError> {
    let mut ratings = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| AppError::Parse {
            line: index + 1,
            message,
        };

        let (id, value) = line
            .split_once(':')
            .ok_or_else(|| parse_error(format!("expected `id:value`, got {line:?}")))?;
        let id = id
            .trim()
            .parse::<Dimension>()
            .map_err(|e| parse_error(e.to_string()))?;
        let rating = value
            .parse::<Rating>()
            .map_err(|e| parse_error(e.to_string()))?;

        ratings.push((id, rating));
    }

    Ok(ratings)
}

/// Apply ratings to a fresh evaluation.
pub fn build_evaluation(
    ratings: &[(Dimension, Rating)],
    demographics: Demographics,
) -> Result<Evaluation, AppError> {
    let mut evaluation = Evaluation::new();
    for (id, rating) in ratings {
        evaluation.apply(*id, *rating)?;
    }
    evaluation.set_demographics(demographics);
    Ok(evaluation)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Serve { host, port, dist } => {
            cmd_serve(ServerConfig {
                host,
                port,
                dist_dir: dist,
            })
            .await
        }
        Commands::Evaluate { ratings, json } => {
            let results = cmd_evaluate(&ratings.file, ratings.format)?;
            print_results(&results, json)
        }
        Commands::Submit {
            ratings,
            age_range,
            region,
            webhook,
            json,
        } => {
            let client = WebhookClient::new(webhook)?;
            let demographics = Demographics { age_range, region };
            let results = cmd_submit(&client, &ratings.file, ratings.format, demographics).await?;
            print_results(&results, json)
        }
        Commands::RequestAnalysis {
            name,
            email,
            score,
            survey_id,
            webhook,
        } => {
            let client = WebhookClient::new(webhook)?;
            let request = cmd_request_analysis(&client, &name, &email, score, survey_id).await?;
            println!(
                "Analysis requested for {} ({}): {} / 100 [{}]",
                request.name, request.email, request.composite_score, request.stability_status
            );
            Ok(())
        }
    }
}

/// Serve the built frontend.
pub async fn cmd_serve(config: ServerConfig) -> Result<(), AppError> {
    api::serve(config).await
}

/// Score a ratings file.
pub fn cmd_evaluate(path: &Path, format: RatingsFormat) -> Result<Results, AppError> {
    let ratings = load_ratings(path, format)?;
    let evaluation = build_evaluation(&ratings, Demographics::default())?;
    debug!(ratings = ratings.len(), "evaluation built");
    Ok(evaluation.into_results(CommunityAverages::placeholder(), None))
}

/// Score a ratings file and post the survey response.
///
/// Results are only returned once the endpoint accepted the payload.
pub async fn cmd_submit(
    client: &WebhookClient,
    path: &Path,
    format: RatingsFormat,
    demographics: Demographics,
) -> Result<Results, AppError> {
    let ratings = load_ratings(path, format)?;
    let evaluation = build_evaluation(&ratings, demographics)?;

    client
        .submit(&evaluation.submission_payload())
        .await
        .map_err(AppError::SubmissionFailed)?;

    info!(endpoint = client.url(), "survey response submitted");
    Ok(evaluation.into_results(CommunityAverages::placeholder(), None))
}

/// Post a request for a full analysis of `score`.
pub async fn cmd_request_analysis(
    client: &WebhookClient,
    name: &str,
    email: &str,
    score: CompositeScore,
    survey_id: Option<String>,
) -> Result<AnalysisRequest, AppError> {
    let result = CompositeResult::from_score(score);
    let request = AnalysisRequest::new(name, email, &result, survey_id)?;

    client
        .request_analysis(&request)
        .await
        .map_err(AppError::AnalysisRequestFailed)?;

    info!(endpoint = client.url(), "analysis requested");
    Ok(request)
}

fn print_results(results: &Results, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print!("{}", ScoreReport::from_results(results).to_text());
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
