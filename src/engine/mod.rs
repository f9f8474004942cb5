// Scoring engine: the shared machinery behind every analyzer.
//
// `rules` holds the declarative pattern tables and the scanner,
// `density` turns scan results into a DimensionScore, and `types`
// defines the report values handed back to callers.

pub mod density;
pub mod rules;
pub mod types;

use rules::RuleSet;
use types::{Dimension, DimensionScore};

/// Trait for a single manipulation-dimension analyzer.
///
/// Implementations are stateless and deterministic: the same text always
/// yields the same score.
pub trait DimensionAnalyzer: Send + Sync {
    /// Which dimension this analyzer scores.
    fn dimension(&self) -> Dimension;

    /// The detection rules, exposed for inspection.
    fn rules(&self) -> &'static RuleSet;

    /// Score a piece of text.
    fn analyze(&self, text: &str) -> DimensionScore;
}
