// Echo chamber: in-group/out-group language and tribal reinforcement.

use std::sync::LazyLock;

use crate::engine::density::{ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "echo chamber",
    categories: &[
        RuleCategory {
            name: "in-group",
            matchers: &[
                Matcher::new(r"\b(we|us|our\s+(side|team|people|community|movement))\b"),
                Matcher::new(r"\b(real|true|genuine)\s+(americans?|patriots?|believers?|people)\b"),
                Matcher::new(r"\b(fellow|like-minded)\b"),
            ],
        },
        RuleCategory {
            name: "out-group",
            matchers: &[
                Matcher::new(r"\b(they|them|those\s+people|the\s+other\s+side)\b"),
                Matcher::new(r"\b(sheeple|sheep|zombies|npcs|bots)\b"),
                Matcher::new(r"\b(fake|pseudo|so-called)\s+\w+"),
                Matcher::new(r"\b(enemy|enemies|opponents?|adversaries)\b"),
            ],
        },
        RuleCategory {
            name: "polarization",
            matchers: &[
                Matcher::new(r"\b(us\s+vs\.?\s+them|good\s+vs\.?\s+evil)\b"),
                Matcher::new(r"\b(wake up|red pill|blue pill|woke|based)\b"),
                Matcher::new(r"\b(mainstream\s+media|msm|lamestream)\b"),
                Matcher::new(r"\b(echo\s+chamber|bubble|narrative)\b"),
            ],
        },
        RuleCategory {
            name: "tribal",
            matchers: &[
                Matcher::new(r"\bif you (believe|think|support)\b"),
                Matcher::new(r"\b(only|real)\s+\w+\s+(understand|know|get\s+it)\b"),
                Matcher::new(r"\byou're\s+(either|not)\s+(one\s+of\s+us|with\s+us)\b"),
            ],
        },
    ],
};

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 15.0,
    confidence: ConfidenceBands {
        phrase_threshold: 4,
        high: 80,
        low: 67,
    },
    explanations: ExplanationTiers {
        severe: "Strong echo chamber reinforcement. Content heavily emphasizes in-group/out-group divisions and tribal identity over substantive argument.",
        significant: "Significant polarization language detected. Content reinforces group identity and creates us-vs-them framing.",
        some: "Some tribal language present. Content shows elements of group identity reinforcement.",
        minimal: "Low echo chamber effect. Content does not heavily emphasize tribal or polarizing divisions.",
    },
};

/// Scores polarizing group-identity language.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoChamber;

impl DimensionAnalyzer for EchoChamber {
    fn dimension(&self) -> Dimension {
        Dimension::EchoChamber
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        super::score_dimension(self.dimension(), &COMPILED, &TUNING, text)
    }
}
