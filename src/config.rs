use std::env;

use anyhow::{Context, Result};

use crate::engine::types::CognitiveRiskLevel;

/// Default cap on how much input the CLI will read (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Exit status used when a report reaches the fail-at risk level.
pub const FAIL_AT_EXIT_CODE: u8 = 2;

/// How the CLI prints a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal report (default)
    Terminal,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command
/// line flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Run the analyzers on scoped threads
    pub parallel: bool,
    /// Exit non-zero when the report reaches this risk level
    pub fail_at: Option<CognitiveRiskLevel>,
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Terminal,
            parallel: false,
            fail_at: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(format) = lookup("DISTORTION_FORMAT") {
            config.output_format = match format.trim().to_ascii_lowercase().as_str() {
                "" | "terminal" => OutputFormat::Terminal,
                "json" => OutputFormat::Json,
                other => anyhow::bail!(
                    "DISTORTION_FORMAT must be 'terminal' or 'json', got '{other}'"
                ),
            };
        }

        if let Some(parallel) = lookup("DISTORTION_PARALLEL") {
            config.parallel = parse_bool(&parallel)
                .with_context(|| format!("DISTORTION_PARALLEL has invalid value '{parallel}'"))?;
        }

        if let Some(level) = lookup("DISTORTION_FAIL_AT") {
            if !level.trim().is_empty() {
                let parsed = level
                    .parse::<CognitiveRiskLevel>()
                    .map_err(anyhow::Error::msg)
                    .context("DISTORTION_FAIL_AT is invalid")?;
                config.fail_at = Some(parsed);
            }
        }

        if let Some(bytes) = lookup("DISTORTION_MAX_INPUT_BYTES") {
            let parsed: usize = bytes.trim().parse().with_context(|| {
                format!("DISTORTION_MAX_INPUT_BYTES must be a byte count, got '{bytes}'")
            })?;
            if parsed == 0 {
                anyhow::bail!("DISTORTION_MAX_INPUT_BYTES must be greater than zero");
            }
            config.max_input_bytes = parsed;
        }

        Ok(config)
    }

    /// Whether a report at `level` should fail the run.
    ///
    /// The threshold is inclusive; with no threshold nothing fails.
    pub fn fails_at(&self, level: CognitiveRiskLevel) -> bool {
        self.fail_at.is_some_and(|threshold| level >= threshold)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("expected true/false, 1/0, yes/no or on/off"),
    }
}
