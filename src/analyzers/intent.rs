// Influence intent classifier.
//
// Each intent owns a rule table. Raw match counts are summed per intent
// (the same phrase may count toward several intents), then every count
// is divided by the shared total, rounded and capped on its own. The six
// results are therefore not guaranteed to sum to exactly 100.

use std::sync::LazyLock;

use tracing::debug;

use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Intent, IntentProbability};

pub static SELLING: RuleSet = RuleSet {
    name: "selling",
    categories: &[RuleCategory {
        name: "commercial cues",
        matchers: &[
            Matcher::new(r"\b(buy|purchase|order|sale|discount|offer|deal|price)\b"),
            Matcher::new(r"\b(limited\s+time|act\s+now|call\s+now)\b"),
            Matcher::new(r"\b(guarantee|money\s+back|free\s+(trial|shipping))\b"),
            Matcher::case_sensitive(r"\$\d+"),
        ],
    }],
};

pub static POLITICAL: RuleSet = RuleSet {
    name: "political",
    categories: &[RuleCategory {
        name: "political vocabulary",
        matchers: &[
            Matcher::new(
                r"\b(vote|election|candidate|politician|party|congress|senate|president)\b",
            ),
            Matcher::new(r"\b(democrat|republican|liberal|conservative|left|right)\b"),
            Matcher::new(r"\b(policy|legislation|government|administration)\b"),
        ],
    }],
};

pub static FEAR: RuleSet = RuleSet {
    name: "fear",
    categories: &[RuleCategory {
        name: "fear and safety vocabulary",
        matchers: &[
            Matcher::new(r"\b(danger|threat|risk|warning|alert|beware)\b"),
            Matcher::new(r"\b(protect|safety|security|vulnerable)\b"),
            Matcher::new(r"\b(crisis|disaster|catastrophe|emergency)\b"),
        ],
    }],
};

pub static ATTACK: RuleSet = RuleSet {
    name: "attack",
    categories: &[RuleCategory {
        name: "defamation vocabulary",
        matchers: &[
            Matcher::new(r"\b(liar|fraud|criminal|corrupt|evil|scam)\b"),
            Matcher::new(r"\b(exposed|revealed|truth\s+about)\b"),
            Matcher::new(r"\b(shame|disgrace|pathetic|incompetent)\b"),
        ],
    }],
};

pub static RADICALIZATION: RuleSet = RuleSet {
    name: "radicalization",
    categories: &[RuleCategory {
        name: "conspiracy vocabulary",
        matchers: &[
            Matcher::new(r"\b(wake\s+up|truth|conspiracy|cover-up|hidden)\b"),
            Matcher::new(r"\b(they\s+don't\s+want\s+you\s+to\s+know)\b"),
            Matcher::new(r"\b(join\s+(us|the\s+(fight|movement|cause)))\b"),
        ],
    }],
};

pub static ATTENTION: RuleSet = RuleSet {
    name: "attention",
    categories: &[RuleCategory {
        name: "virality vocabulary",
        matchers: &[
            Matcher::new(r"\b(shocking|unbelievable|you\s+won't\s+believe)\b"),
            Matcher::new(r"\b(click|watch|see|check\s+out|viral)\b"),
            Matcher::new(r"\b(breaking|exclusive|revealed)\b"),
            Matcher::new(r"\b(like|share|subscribe|follow)\b"),
        ],
    }],
};

/// Every intent with its rule table, in declaration order.
pub static INTENT_RULES: [(Intent, &RuleSet); 6] = [
    (Intent::Selling, &SELLING),
    (Intent::Political, &POLITICAL),
    (Intent::Fear, &FEAR),
    (Intent::Attack, &ATTACK),
    (Intent::Radicalization, &RADICALIZATION),
    (Intent::Attention, &ATTENTION),
];

static COMPILED: LazyLock<Vec<(Intent, CompiledRuleSet)>> = LazyLock::new(|| {
    INTENT_RULES
        .iter()
        .map(|(intent, rules)| (*intent, rules.compile_static()))
        .collect()
});

/// Raw match counts per intent, in declaration order.
pub fn raw_counts(text: &str) -> Vec<(Intent, usize)> {
    COMPILED
        .iter()
        .map(|(intent, rules)| (*intent, rules.count(text)))
        .collect()
}

/// Convert raw counts into independently rounded 0-100 probabilities.
pub fn normalize(counts: &[(Intent, usize)]) -> IntentProbability {
    let total = counts.iter().map(|(_, c)| c).sum::<usize>().max(1) as f64;

    let mut probabilities = IntentProbability::default();
    for &(intent, count) in counts {
        let share = (count as f64 / total * 100.0).round().min(100.0) as u32;
        probabilities.set(intent, share);
    }
    probabilities
}

/// Estimate the persuasive goals behind a text.
pub fn classify(text: &str) -> IntentProbability {
    let counts = raw_counts(text);

    debug!(
        selling = counts[0].1,
        political = counts[1].1,
        fear = counts[2].1,
        attack = counts[3].1,
        radicalization = counts[4].1,
        attention = counts[5].1,
        "Counted intent matches"
    );

    normalize(&counts)
}
