// Dimension analyzers and the intent classifier.
//
// Each analyzer module declares its rule table and tuning constants as
// statics; the algorithm itself lives in engine::density.

pub mod authority;
pub mod echo_chamber;
pub mod emotional;
pub mod framing;
pub mod intent;
pub mod social_proof;
pub mod urgency;

use tracing::debug;

use crate::engine::density::{self, DensityTuning};
use crate::engine::rules::CompiledRuleSet;
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub use authority::AuthorityIllusion;
pub use echo_chamber::EchoChamber;
pub use emotional::EmotionalAmplification;
pub use framing::SelectiveFraming;
pub use social_proof::SocialProof;
pub use urgency::UrgencyPressure;

/// All six analyzers in the fixed dimension order.
pub fn all() -> [&'static dyn DimensionAnalyzer; 6] {
    [
        &EmotionalAmplification,
        &UrgencyPressure,
        &AuthorityIllusion,
        &SelectiveFraming,
        &SocialProof,
        &EchoChamber,
    ]
}

/// Look up the analyzer for a dimension.
pub fn for_dimension(dimension: Dimension) -> &'static dyn DimensionAnalyzer {
    match dimension {
        Dimension::EmotionalAmplification => &EmotionalAmplification,
        Dimension::UrgencyPressure => &UrgencyPressure,
        Dimension::AuthorityIllusion => &AuthorityIllusion,
        Dimension::SelectiveFraming => &SelectiveFraming,
        Dimension::SocialProof => &SocialProof,
        Dimension::EchoChamber => &EchoChamber,
    }
}

/// The plain density pipeline used by every analyzer without a counter-signal.
fn score_dimension(
    dimension: Dimension,
    rules: &CompiledRuleSet,
    tuning: &DensityTuning,
    text: &str,
) -> DimensionScore {
    let hits = rules.scan(text);
    let words = density::word_count(text);
    let score = density::raw_score(&hits, words, tuning);

    debug!(
        dimension = dimension.key(),
        matches = hits.total_matches,
        categories = ?hits.category_matches,
        words,
        score,
        "Scored dimension"
    );

    density::finish(score, hits, tuning)
}
