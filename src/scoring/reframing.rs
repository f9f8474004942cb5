// Neutral reframing suggestions.
//
// Every dimension that scores above REFRAME_THRESHOLD contributes one
// fixed remediation sentence. Sentences are listed in dimension order,
// not by severity.

use crate::engine::types::{Dimension, DimensionScores};

/// A dimension must score strictly above this to get a remediation line.
pub const REFRAME_THRESHOLD: u32 = 40;

pub const REFRAME_HEADER: &str = "To present this more neutrally:";

pub const NEUTRAL_MESSAGE: &str = "Content shows relatively neutral framing. Minor refinements: ensure all claims are verifiable and maintain balanced perspective.";

/// The remediation sentence for a dimension.
pub fn remediation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::EmotionalAmplification => {
            "Remove emotionally charged language and use neutral descriptive terms"
        }
        Dimension::UrgencyPressure => {
            "Eliminate artificial time pressure and allow for thoughtful consideration"
        }
        Dimension::AuthorityIllusion => {
            "Provide specific, verifiable citations instead of vague authority appeals"
        }
        Dimension::SelectiveFraming => {
            "Acknowledge alternative perspectives and present more balanced viewpoints"
        }
        Dimension::SocialProof => "Focus on merit-based arguments rather than popularity claims",
        Dimension::EchoChamber => {
            "Reduce polarizing us-vs-them language and emphasize common ground"
        }
    }
}

/// Build the reframing suggestion for a set of dimension scores.
pub fn reframe(dimensions: &DimensionScores) -> String {
    let issues: Vec<&str> = dimensions
        .iter()
        .filter(|(_, score)| score.score > REFRAME_THRESHOLD)
        .map(|(dimension, _)| remediation(dimension))
        .collect();

    if issues.is_empty() {
        return NEUTRAL_MESSAGE.to_string();
    }

    let mut out = String::from(REFRAME_HEADER);
    for (i, issue) in issues.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {}", i + 1, issue));
    }
    out
}
