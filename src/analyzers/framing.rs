// Selective framing: one-sided, absolutist and dismissive language.
//
// This is the only dimension with a counter-signal: hedging and
// counter-argument language is scanned separately, and each balance
// match takes BALANCE_PENALTY points off the score (floored at 0).

use std::sync::LazyLock;

use tracing::debug;

use crate::engine::density::{self, ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "selective framing",
    categories: &[
        RuleCategory {
            name: "one-sided",
            matchers: &[
                Matcher::new(r"\b(only|just|simply|merely|nothing but)\b"),
                Matcher::new(r"\bthe (truth|fact|reality) is\b"),
                Matcher::new(r"\bclearly|obviously|undeniably\b"),
                Matcher::new(r"\bthere is no (doubt|question|debate|alternative)\b"),
            ],
        },
        RuleCategory {
            name: "absolute statements",
            matchers: &[
                Matcher::new(r"\b(all|every|always|never|none|no one|everyone)\b"),
                Matcher::new(r"\b(proves|proves that|demonstrates that)\b"),
                Matcher::new(r"\b(impossible|certain|definitely|absolutely)\b"),
            ],
        },
        RuleCategory {
            name: "dismissive",
            matchers: &[
                Matcher::new(r"\b(ignore|dismiss|debunked|myth|lie|false narrative)\b"),
                Matcher::new(r"\bso-called\b"),
                Matcher::new(r"\b(claim|allegedly|supposedly)\b"),
            ],
        },
        RuleCategory {
            name: "lack of nuance",
            matchers: &[
                Matcher::new(r"\b(either|or)\b"),
                Matcher::new(r"\byou're (either )?with (us|me)|against (us|me)\b"),
                Matcher::new(r"\bthere are (only )?two (sides|options)\b"),
            ],
        },
    ],
};

/// Hedging and counter-argument language that lowers the score.
pub static BALANCE_RULES: RuleSet = RuleSet {
    name: "balance indicators",
    categories: &[RuleCategory {
        name: "balance",
        matchers: &[
            Matcher::new(r"\b(however|but|although|on the other hand|conversely)\b"),
            Matcher::new(r"\b(some argue|others believe|critics say|proponents claim)\b"),
            Matcher::new(r"\b(both|balanced|nuanced|complex)\b"),
        ],
    }],
};

/// Points removed per balance-indicator match.
pub const BALANCE_PENALTY: u32 = 8;

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());
static COMPILED_BALANCE: LazyLock<CompiledRuleSet> =
    LazyLock::new(|| BALANCE_RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 16.0,
    confidence: ConfidenceBands {
        phrase_threshold: 4,
        high: 78,
        low: 62,
    },
    explanations: ExplanationTiers {
        severe: "Heavily one-sided framing. Content presents absolutist viewpoints while dismissing alternative perspectives or nuance.",
        significant: "Significant selective framing detected. Content shows bias toward single perspective with limited acknowledgment of complexity.",
        some: "Some one-sided language present. Content could benefit from more balanced presentation.",
        minimal: "Relatively balanced framing. Content acknowledges multiple perspectives or presents nuanced view.",
    },
};

/// Subtract the balance penalty, never going below zero.
pub fn apply_balance_penalty(score: u32, balance_matches: usize) -> u32 {
    let penalty = (balance_matches as u32).saturating_mul(BALANCE_PENALTY);
    score.saturating_sub(penalty)
}

/// Scores one-sided presentation, offset by balancing language.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectiveFraming;

impl DimensionAnalyzer for SelectiveFraming {
    fn dimension(&self) -> Dimension {
        Dimension::SelectiveFraming
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        let hits = COMPILED.scan(text);
        let balance_matches = COMPILED_BALANCE.count(text);
        let words = density::word_count(text);

        let raw = density::raw_score(&hits, words, &TUNING);
        let score = apply_balance_penalty(raw, balance_matches);

        debug!(
            dimension = self.dimension().key(),
            matches = hits.total_matches,
            categories = ?hits.category_matches,
            balance_matches,
            words,
            raw,
            score,
            "Scored dimension"
        );

        density::finish(score, hits, &TUNING)
    }
}
