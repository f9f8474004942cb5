// Urgency and pressure: artificial deadlines, crisis framing, scarcity.

use std::sync::LazyLock;

use crate::engine::density::{ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "urgency pressure",
    categories: &[
        RuleCategory {
            name: "deadlines",
            matchers: &[
                Matcher::new(r"\b(now|today|immediately|right now|asap|urgent|hurry)\b"),
                Matcher::new(
                    r"\b(before it's too late|time is running out|limited time|act fast)\b",
                ),
                Matcher::new(r"\b(only|just)\s+\d+\s+(hours?|days?|minutes?)\s+(left|remaining)"),
                Matcher::new(r"\b(last chance|final\s+(opportunity|warning|call))\b"),
                Matcher::new(r"\bdeadline\b"),
            ],
        },
        RuleCategory {
            name: "crisis",
            matchers: &[
                Matcher::new(r"\b(crisis|emergency|critical|dire|desperate)\b"),
                Matcher::new(r"\b(breaking|urgent|alert)\b"),
                Matcher::new(r"\b(can't wait|no time|must act)\b"),
            ],
        },
        RuleCategory {
            name: "pressure",
            matchers: &[
                Matcher::new(r"\b(you must|you need to|you should|you have to)\b"),
                Matcher::new(r"\b(don't (wait|delay|hesitate|miss))\b"),
                Matcher::new(r"\b(act now|do it now|decide now)\b"),
                Matcher::new(r"\bif you don't\b"),
            ],
        },
        RuleCategory {
            name: "scarcity",
            matchers: &[
                Matcher::new(
                    r"\b(running out|selling fast|almost gone|limited (stock|supply|availability))\b",
                ),
                Matcher::new(r"\b(while\s+(supplies|stocks?)\s+last)\b"),
                Matcher::new(r"\b(exclusive|rare|scarce)\b"),
            ],
        },
    ],
};

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 18.0,
    confidence: ConfidenceBands {
        phrase_threshold: 4,
        high: 80,
        low: 65,
    },
    explanations: ExplanationTiers {
        severe: "Extreme urgency manipulation. Content creates artificial time pressure to force hasty decisions without reflection.",
        significant: "Significant pressure tactics detected. Language designed to create false urgency and limit thoughtful consideration.",
        some: "Moderate urgency signals present. Some deadline or pressure language used.",
        minimal: "Low urgency manipulation. Content allows time for thoughtful consideration.",
    },
};

/// Scores deadline, crisis and scarcity pressure.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyPressure;

impl DimensionAnalyzer for UrgencyPressure {
    fn dimension(&self) -> Dimension {
        Dimension::UrgencyPressure
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        super::score_dimension(self.dimension(), &COMPILED, &TUNING, text)
    }
}
