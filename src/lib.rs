// distortion-lens: rule-based detection of manipulative language
//
// This is the library root. `engine` holds the shared scoring machinery,
// `analyzers` the six dimension analyzers and the intent classifier,
// `scoring` the aggregation into a report, `output` the renderers, and
// `config`/`input` the CLI's environment and size-limited reads.

pub mod analyzers;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod scoring;

pub use engine::types::{
    AnalysisInput, AnalysisReport, CognitiveRiskLevel, ContentType, Dimension, DimensionScore,
    DimensionScores, Intent, IntentProbability, TopIntent,
};
pub use scoring::report::ReportBuilder;

/// Analyze a block of text with the default weights and the system clock.
pub fn analyze(content: &str) -> AnalysisReport {
    ReportBuilder::default().build_text(content)
}

/// Analyze an input that may carry a content-type tag.
pub fn analyze_input(input: &AnalysisInput) -> AnalysisReport {
    ReportBuilder::default().build(input)
}
