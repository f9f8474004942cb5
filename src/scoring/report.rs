// Report builder: orchestrates scoring for a single piece of text.
//
// Given the input text, this module:
// 1. Runs the six dimension analyzers
// 2. Computes the weighted distortion score and risk level
// 3. Classifies influence intent and ranks the top three
// 4. Generates the reframing suggestion
// 5. Averages confidence and stamps the report time
//
// The analyzers share nothing, so parallel mode runs them on the rayon
// pool. Sequential and parallel builds return identical reports apart
// from the timestamp.

use rayon::prelude::*;
use tracing::info;

use crate::analyzers::{self, intent};
use crate::engine::types::{AnalysisInput, AnalysisReport, DimensionScores, IntentProbability};
use crate::scoring::clock::{Clock, SystemClock};
use crate::scoring::composite::{self, DistortionWeights};
use crate::scoring::reframing;

/// How many intents are listed in `top_intents`.
pub const TOP_INTENT_COUNT: usize = 3;

/// Builds `AnalysisReport`s with a chosen clock, weights and execution mode.
pub struct ReportBuilder<C: Clock = SystemClock> {
    clock: C,
    weights: DistortionWeights,
    parallel: bool,
}

impl Default for ReportBuilder<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ReportBuilder<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            weights: DistortionWeights::default(),
            parallel: false,
        }
    }

    pub fn with_weights(mut self, weights: DistortionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Fan the analyzers out across threads instead of running them in turn.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn weights(&self) -> &DistortionWeights {
        &self.weights
    }

    /// Analyze raw text with no content-type tag.
    pub fn build_text(&self, text: &str) -> AnalysisReport {
        self.build(&AnalysisInput::new(text))
    }

    /// Produce the full report. Total over every input, including "".
    pub fn build(&self, input: &AnalysisInput) -> AnalysisReport {
        let text = input.content.as_str();

        let (dimensions, influence_intent) = if self.parallel {
            run_parallel(text)
        } else {
            run_sequential(text)
        };

        let (reality_distortion_score, cognitive_risk_level) =
            composite::compute_distortion_score(&dimensions, &self.weights);
        let top_intents = influence_intent.top(TOP_INTENT_COUNT);
        let reframing_suggestion = reframing::reframe(&dimensions);
        let overall_confidence = composite::overall_confidence(&dimensions);

        info!(
            score = reality_distortion_score,
            risk = cognitive_risk_level.as_str(),
            confidence = overall_confidence,
            content_type = input.content_type.map(|c| c.as_str()).unwrap_or("unspecified"),
            parallel = self.parallel,
            "Analyzed content"
        );

        AnalysisReport {
            reality_distortion_score,
            cognitive_risk_level,
            dimensions,
            influence_intent,
            top_intents,
            reframing_suggestion,
            overall_confidence,
            analyzed_at: self.clock.now(),
        }
    }
}

fn run_sequential(text: &str) -> (DimensionScores, IntentProbability) {
    let dimensions = analyzers::all()
        .iter()
        .map(|analyzer| (analyzer.dimension(), analyzer.analyze(text)))
        .collect();
    (dimensions, intent::classify(text))
}

/// Score every dimension on the rayon pool while the classifier runs
/// alongside. A panicking analyzer propagates to the caller.
fn run_parallel(text: &str) -> (DimensionScores, IntentProbability) {
    let (scored, intents) = rayon::join(
        || {
            analyzers::all()
                .par_iter()
                .map(|analyzer| (analyzer.dimension(), analyzer.analyze(text)))
                .collect::<Vec<_>>()
        },
        || intent::classify(text),
    );
    (scored.into_iter().collect(), intents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{CognitiveRiskLevel, ContentType, Intent};
    use crate::scoring::clock::FixedClock;
    use chrono::TimeZone;

    fn fixed() -> FixedClock {
        FixedClock(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn empty_input_is_low_and_neutral() {
        let report = ReportBuilder::new(fixed()).build_text("");
        assert_eq!(report.reality_distortion_score, 0);
        assert_eq!(report.cognitive_risk_level, CognitiveRiskLevel::Low);
        assert_eq!(report.reframing_suggestion, reframing::NEUTRAL_MESSAGE);
        assert_eq!(report.influence_intent, IntentProbability::default());
        assert_eq!(report.overall_confidence, 65);
        let top: Vec<Intent> = report.top_intents.iter().map(|t| t.intent).collect();
        assert_eq!(top, vec![Intent::Selling, Intent::Political, Intent::Fear]);
    }

    #[test]
    fn timestamp_comes_from_clock() {
        let clock = fixed();
        let report = ReportBuilder::new(clock).build_text("anything at all");
        assert_eq!(report.analyzed_at, clock.0);
    }

    #[test]
    fn content_type_does_not_change_scores() {
        let builder = ReportBuilder::new(fixed());
        let text = "Act now! Experts say this deal won't last.";
        let plain = builder.build_text(text);
        let tagged = builder.build(&AnalysisInput::new(text).with_content_type(ContentType::Speech));
        assert_eq!(plain, tagged);
    }

    #[test]
    fn custom_weights_change_the_composite() {
        let emotional_only = DistortionWeights {
            emotional: 1.0,
            urgency: 0.0,
            authority: 0.0,
            framing: 0.0,
            social: 0.0,
            echo: 0.0,
        };
        let builder = ReportBuilder::new(fixed()).with_weights(emotional_only);
        assert_eq!(builder.weights(), &emotional_only);

        // "crisis" and "Everyone": 2 matches * 15 = 30, weighted at 1.0
        let text = "BREAKING: Experts say you must act now before it's too late! Everyone agrees this is a crisis.";
        let report = builder.build_text(text);
        assert_eq!(report.reality_distortion_score, 30);
        assert_eq!(report.cognitive_risk_level, CognitiveRiskLevel::Moderate);

        let default = ReportBuilder::new(fixed()).build_text("Buy now!!! Act now, only 2 left!");
        let weighted = builder.build_text("Buy now!!! Act now, only 2 left!");
        assert_eq!(
            weighted.reality_distortion_score,
            weighted.dimensions.emotional_amplification.score
        );
        assert_eq!(default.dimensions, weighted.dimensions);
    }

    #[test]
    fn parallel_matches_sequential() {
        let text = "BREAKING: They lied to us! Millions agree, act now before it's too late.";
        let sequential = ReportBuilder::new(fixed()).build_text(text);
        let parallel = ReportBuilder::new(fixed()).with_parallel(true).build_text(text);
        assert_eq!(sequential, parallel);
    }
}
