// Social proof: crowd consensus, bandwagon, popularity claims.

use std::sync::LazyLock;

use crate::engine::density::{ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "social proof",
    categories: &[
        RuleCategory {
            name: "crowd",
            matchers: &[
                Matcher::new(
                    r"\b(everyone|everybody|millions|thousands|most people|the majority)\s+(knows?|believes?|agrees?|says?|thinks?)\b",
                ),
                Matcher::new(r"\b(we all know|as we all know|it's common knowledge)\b"),
                Matcher::new(r"\b(widely (accepted|known|believed|recognized))\b"),
            ],
        },
        RuleCategory {
            name: "bandwagon",
            matchers: &[
                Matcher::new(r"\bjoin (us|millions|thousands|the movement)\b"),
                Matcher::new(r"\bdon't (be|get) left (behind|out)\b"),
                Matcher::new(r"\beveryone (else )?is (doing|saying|buying)\b"),
                Matcher::new(r"\bpeople are (talking|sharing|loving)\b"),
            ],
        },
        RuleCategory {
            name: "popularity",
            matchers: &[
                Matcher::new(r"\b(trending|viral|going viral|blowing up)\b"),
                Matcher::new(r"\b\d+(k|m)?\s+(followers?|subscribers?|views?|likes?|shares?)\b"),
                Matcher::new(r"\b(most\s+)?(popular|loved|trusted|recommended)\b"),
                Matcher::new(r"\b#1|number one|best-selling\b"),
            ],
        },
        RuleCategory {
            name: "testimonials",
            matchers: &[
                Matcher::new(
                    r"\b(thousands|millions)\s+(of\s+)?(satisfied\s+)?(customers?|users?|people)\b",
                ),
                Matcher::new(r"\b(real\s+)?(people|users|customers)\s+are\s+saying\b"),
                Matcher::new(r"\b(five\s+)?5\s+stars?\b"),
            ],
        },
    ],
};

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 17.0,
    confidence: ConfidenceBands {
        phrase_threshold: 3,
        high: 82,
        low: 68,
    },
    explanations: ExplanationTiers {
        severe: "Heavy social proof manipulation. Content relies heavily on popularity claims and herd mentality to persuade rather than merit-based arguments.",
        significant: "Significant bandwagon tactics detected. Content uses crowd appeals and popularity to influence belief.",
        some: "Some social proof elements present. Content references popularity or consensus as supporting evidence.",
        minimal: "Minimal social proof manipulation. Content does not heavily rely on popularity or crowd pressure.",
    },
};

/// Scores appeals to popularity and consensus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialProof;

impl DimensionAnalyzer for SocialProof {
    fn dimension(&self) -> Dimension {
        Dimension::SocialProof
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        super::score_dimension(self.dimension(), &COMPILED, &TUNING, text)
    }
}
