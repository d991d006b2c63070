//! mindline: mood check-in analysis from the command line.
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use mindline_bedrock::analyst::Analyst;
use mindline_bedrock::converse::BedrockCompletion;
use mindline_core::models::assessment::AssessmentInput;
use mindline_core::models::condition::{DetectionResult, Severity};
use mindline_core::models::sentiment::SentimentResult;
use mindline_engine::{ConditionDetector, Lexicon, report};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod config;

use config::MindlineConfig;

const MIN_DETECT_CHARS: usize = 10;

const DISCLAIMER: &str = "This analysis is for informational purposes only and should not \
                          replace professional mental health evaluation.";

#[derive(Parser)]
#[command(name = "mindline")]
#[command(version)]
#[command(about = "Heuristic mood check-in analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: $MINDLINE_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen free text for mental-health condition indicators
    Detect {
        /// Text to analyze (stdin if omitted)
        text: Option<String>,
    },

    /// Classify a check-in and suggest a supportive reply
    Checkin {
        /// Check-in text (stdin if omitted)
        text: Option<String>,
    },

    /// Score a guided assessment given as JSON
    Assess {
        /// Assessment JSON file (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Summarise an assessment history given as a JSON array, newest first
    Report {
        /// History JSON file (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List the loaded condition lexicon
    Conditions,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectReport {
    #[serde(flatten)]
    result: DetectionResult,
    disclaimer: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckinReport {
    analysis: SentimentResult,
    reply: String,
}

#[derive(Serialize)]
struct ConditionSummary<'a> {
    illness: &'a str,
    definition: &'a str,
    severity: Severity,
    symptoms: &'a [String],
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = config::config_path(cli.config.as_deref())?;

    if let Commands::Config { action } = &cli.command {
        return run_config(action, &config_path);
    }

    let config = config::apply_env_overrides(config::load_config(&config_path)?, |key| {
        std::env::var(key).ok()
    });

    match cli.command {
        Commands::Detect { text } => {
            let text = read_text(text)?;
            if text.trim().chars().count() < MIN_DETECT_CHARS {
                eyre::bail!(
                    "text must be at least {MIN_DETECT_CHARS} characters long for meaningful analysis"
                );
            }
            let detector = ConditionDetector::new(load_lexicon(&config));
            print_json(&DetectReport {
                result: detector.analyze_text(&text),
                disclaimer: DISCLAIMER,
            })
        }
        Commands::Checkin { text } => {
            let text = read_text(text)?;
            let analyst = Analyst::new(remote_completion(&config).await);
            let analysis = analyst.analyze_checkin(&text).await;
            let reply = analyst.supportive_reply(&text).await;
            print_json(&CheckinReport { analysis, reply })
        }
        Commands::Assess { file } => {
            let source = read_source(file)?;
            let input: AssessmentInput =
                serde_json::from_str(&source).wrap_err("invalid assessment JSON")?;
            let analyst = Analyst::new(remote_completion(&config).await);
            print_json(&analyst.analyze_assessment(&input).await)
        }
        Commands::Report { file } => {
            let history: Vec<AssessmentInput> = serde_json::from_str(&read_source(file)?)
                .wrap_err("invalid assessment history JSON")?;
            print_json(&report::summarize(&history))
        }
        Commands::Conditions => {
            let lexicon = load_lexicon(&config);
            let summaries: Vec<ConditionSummary<'_>> = lexicon
                .conditions()
                .iter()
                .map(|c| ConditionSummary {
                    illness: &c.illness,
                    definition: &c.definition,
                    severity: c.severity,
                    symptoms: &c.symptoms,
                })
                .collect();
            print_json(&summaries)
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_config(action: &ConfigAction, path: &std::path::Path) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::apply_env_overrides(config::load_config(path)?, |key| {
                std::env::var(key).ok()
            });
            print_json(&config)
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                eyre::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            config::save_config(&MindlineConfig::default(), path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn load_lexicon(config: &MindlineConfig) -> Arc<Lexicon> {
    Arc::new(Lexicon::load(&config.lexicon_path))
}

async fn remote_completion(config: &MindlineConfig) -> Option<BedrockCompletion> {
    let completion = config.completion.as_ref()?;
    tracing::info!(
        region = %completion.region,
        model_id = %completion.model_id,
        "remote completion enabled"
    );
    let remote = BedrockCompletion::from_region(&completion.region, &completion.model_id)
        .await
        .with_timeout(Duration::from_secs(completion.timeout_secs))
        .with_temperature(completion.temperature);
    Some(remote)
}

fn read_text(arg: Option<String>) -> eyre::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_source(file: Option<PathBuf>) -> eyre::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => read_stdin(),
    }
}

fn read_stdin() -> eyre::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .wrap_err("failed to read stdin")?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
