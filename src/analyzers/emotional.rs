// Emotional amplification: exaggeration, outrage, fear, moral panic.

use std::sync::LazyLock;

use crate::engine::density::{ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "emotional amplification",
    categories: &[
        RuleCategory {
            name: "exaggeration",
            matchers: &[
                Matcher::new(
                    r"\b(extremely?|incredibly?|absolutely|totally|completely|utterly|entirely)\s+\w+",
                ),
                Matcher::new(
                    r"\b(worst|best|greatest|terrible|horrible|amazing|perfect)\s+(ever|in history|of all time)",
                ),
                Matcher::new(r"\b(always|never|everyone|no one|all|none)\b"),
                Matcher::case_sensitive(r"!!+"),
                Matcher::new(r"\b(crisis|disaster|catastrophe|emergency|urgent|critical)\b"),
            ],
        },
        RuleCategory {
            name: "outrage",
            matchers: &[
                Matcher::new(
                    r"\b(outrageous|shocking|appalling|disgusting|unbelievable|unacceptable)\b",
                ),
                Matcher::new(
                    r"\b(must|should|need to)\s+(be\s+)?(stopped|banned|arrested|fired|cancelled)",
                ),
                Matcher::new(r"\bcan't\s+believe\b"),
            ],
        },
        RuleCategory {
            name: "fear",
            matchers: &[
                Matcher::new(
                    r"\b(dangerous|threat|risk|harmful|deadly|fatal|terrifying|scary)\b",
                ),
                Matcher::new(r"\b(destroy|ruin|collapse|end|kill|death|die)\b"),
                Matcher::new(r"\b(lose|losing|lost)\s+(everything|all|your)"),
            ],
        },
        RuleCategory {
            name: "moral",
            matchers: &[
                Matcher::new(r"\b(evil|wicked|immoral|corrupt|wrong|right|good)\b"),
                Matcher::new(r"\b(should be ashamed|disgrace|shameful)\b"),
            ],
        },
    ],
};

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 15.0,
    confidence: ConfidenceBands {
        phrase_threshold: 5,
        high: 85,
        low: 70,
    },
    explanations: ExplanationTiers {
        severe: "Extremely high emotional manipulation detected. Content uses intense fear, outrage, and exaggeration to bypass rational thinking.",
        significant: "Moderate emotional amplification present. Language designed to trigger emotional responses rather than promote reasoned analysis.",
        some: "Some emotional language detected. Content includes emotive terms that may influence perception.",
        minimal: "Minimal emotional manipulation. Content maintains relatively neutral tone.",
    },
};

/// Scores emotionally charged language.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionalAmplification;

impl DimensionAnalyzer for EmotionalAmplification {
    fn dimension(&self) -> Dimension {
        Dimension::EmotionalAmplification
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        super::score_dimension(self.dimension(), &COMPILED, &TUNING, text)
    }
}
