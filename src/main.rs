use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use distortion_lens::config::{Config, OutputFormat, FAIL_AT_EXIT_CODE};
use distortion_lens::engine::types::{AnalysisInput, CognitiveRiskLevel, ContentType, Dimension};
use distortion_lens::{input, output};
use distortion_lens::ReportBuilder;

/// distortion-lens: surface manipulative language patterns in text.
///
/// Scores six dimensions (emotional amplification, urgency, authority
/// illusion, selective framing, social proof, echo chamber), estimates
/// influence intent, and suggests a more neutral framing.
#[derive(Parser)]
#[command(name = "distortion-lens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text from --text, a file, or stdin
    Analyze {
        /// File to read (reads stdin when omitted)
        path: Option<PathBuf>,

        /// Analyze this text directly instead of reading a file
        #[arg(long, conflicts_with = "path")]
        text: Option<String>,

        /// Where the text came from: text, transcript, article, post, speech
        #[arg(long)]
        content_type: Option<ContentType>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Run the analyzers in parallel
        #[arg(long)]
        parallel: bool,

        /// Exit with status 2 when the risk level reaches this value
        #[arg(long)]
        fail_at: Option<CognitiveRiskLevel>,
    },

    /// List the detection rules
    Rules {
        /// Only show one dimension (emotional, urgency, authority, framing, social, echo)
        #[arg(long)]
        dimension: Option<Dimension>,
    },
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("distortion_lens=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            text,
            content_type,
            json,
            parallel,
            fail_at,
        } => {
            let mut config = Config::load()?;
            config.parallel |= parallel;
            config.fail_at = fail_at.or(config.fail_at);
            if json {
                config.output_format = OutputFormat::Json;
            }

            let content = match (text, path) {
                (Some(text), _) => text,
                (None, Some(path)) => input::read_file(&path, config.max_input_bytes)?,
                (None, None) => read_stdin(config.max_input_bytes)?,
            };

            let mut analysis_input = AnalysisInput::new(content);
            if let Some(content_type) = content_type {
                analysis_input = analysis_input.with_content_type(content_type);
            }

            let builder = ReportBuilder::default().with_parallel(config.parallel);
            let report = builder.build(&analysis_input);

            match config.output_format {
                OutputFormat::Json => println!("{}", output::render_json(&report)?),
                OutputFormat::Terminal => output::terminal::display_report(&report),
            }

            if config.fails_at(report.cognitive_risk_level) {
                let threshold = config.fail_at.map(|t| t.as_str()).unwrap_or_default();
                info!(
                    risk = report.cognitive_risk_level.as_str(),
                    threshold,
                    "Risk threshold reached"
                );
                if config.output_format == OutputFormat::Terminal {
                    eprintln!(
                        "{} risk level {} is at or above --fail-at {}",
                        "Fail:".red().bold(),
                        report.cognitive_risk_level,
                        threshold
                    );
                }
                return Ok(ExitCode::from(FAIL_AT_EXIT_CODE));
            }
        }

        Commands::Rules { dimension } => {
            output::terminal::display_rules(dimension);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_stdin(max_bytes: usize) -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{}", "Reading text from stdin (end with Ctrl-D)...".dimmed());
    }
    input::read_limited(stdin.lock(), max_bytes).context("Failed to read stdin")
}
