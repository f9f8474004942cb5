// Composite reality distortion score.
//
// A fixed-weight average of the six dimension scores, rounded to an
// integer and mapped onto a four-tier risk level. Emotional amplification
// and selective framing carry 0.20 each, the other four 0.15.

use crate::engine::types::{CognitiveRiskLevel, Dimension, DimensionScores};

/// Per-dimension weights for the composite score.
///
/// `score = round(Σ dimension_score * weight)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionWeights {
    pub emotional: f64,
    pub urgency: f64,
    pub authority: f64,
    pub framing: f64,
    pub social: f64,
    pub echo: f64,
}

impl Default for DistortionWeights {
    fn default() -> Self {
        Self {
            emotional: 0.20,
            urgency: 0.15,
            authority: 0.15,
            framing: 0.20,
            social: 0.15,
            echo: 0.15,
        }
    }
}

impl DistortionWeights {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::EmotionalAmplification => self.emotional,
            Dimension::UrgencyPressure => self.urgency,
            Dimension::AuthorityIllusion => self.authority,
            Dimension::SelectiveFraming => self.framing,
            Dimension::SocialProof => self.social,
            Dimension::EchoChamber => self.echo,
        }
    }

    pub fn total(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.weight(*d)).sum()
    }
}

/// Compute the weighted composite score and its risk level.
///
/// Returns a score from 0 to 100 (clamped in case custom weights sum past
/// one) and the corresponding risk level.
pub fn compute_distortion_score(
    dimensions: &DimensionScores,
    weights: &DistortionWeights,
) -> (u32, CognitiveRiskLevel) {
    let weighted: f64 = dimensions
        .iter()
        .map(|(dimension, score)| score.score as f64 * weights.weight(dimension))
        .sum();

    let score = weighted.round().clamp(0.0, 100.0) as u32;
    (score, CognitiveRiskLevel::from_score(score))
}

/// Mean of the six dimension confidences, rounded.
pub fn overall_confidence(dimensions: &DimensionScores) -> u32 {
    let sum: u32 = dimensions.iter().map(|(_, s)| s.confidence).sum();
    (sum as f64 / Dimension::ALL.len() as f64).round() as u32
}
