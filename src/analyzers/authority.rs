// Authority illusion: vague experts, unverified studies, borrowed credentials.

use std::sync::LazyLock;

use crate::engine::density::{ConfidenceBands, DensityTuning, ExplanationTiers};
use crate::engine::rules::{CompiledRuleSet, Matcher, RuleCategory, RuleSet};
use crate::engine::types::{Dimension, DimensionScore};
use crate::engine::DimensionAnalyzer;

pub static RULES: RuleSet = RuleSet {
    name: "authority illusion",
    categories: &[
        RuleCategory {
            name: "vague experts",
            matchers: &[
                Matcher::new(
                    r"\b(experts?|scientists?|doctors?|researchers?|studies?|research)\s+(say|show|prove|confirm|agree)",
                ),
                Matcher::new(r"\baccording to (experts?|sources?|insiders?|officials?)\b"),
                Matcher::new(r"\b(many|most|some)\s+(experts?|scientists?|doctors?|professionals?)\b"),
                Matcher::new(r"\bit('s| is) (scientifically )?(proven|confirmed|established)\b"),
            ],
        },
        RuleCategory {
            name: "unverified",
            matchers: &[
                Matcher::new(r"\b(studies show|research shows|science says)\b"),
                Matcher::new(r"\b(a study|a report|an analysis)\s+(found|showed|revealed)\b"),
                Matcher::new(r"\btop\s+(scientists?|doctors?|experts?)\b"),
                Matcher::new(r"\bleading\s+(expert|authority|researcher)\b"),
            ],
        },
        RuleCategory {
            name: "institutional",
            matchers: &[
                Matcher::new(r"\b(official|formally|certified|approved|endorsed)\b"),
                Matcher::new(
                    r"\b(the\s+)?(government|fda|cdc|who|authorities)\s+(says?|warns?|recommends?)\b",
                ),
                Matcher::new(r"\b(Harvard|Stanford|MIT|Oxford|Cambridge)\s+(study|research|scientist)"),
            ],
        },
        RuleCategory {
            name: "credentials",
            matchers: &[
                Matcher::case_sensitive(r"\bDr\.\s+\w+\s+(says?|claims?|believes?)\b"),
                Matcher::new(r"\b(phd|md|professor)\b"),
            ],
        },
    ],
};

static COMPILED: LazyLock<CompiledRuleSet> = LazyLock::new(|| RULES.compile_static());

pub const TUNING: DensityTuning = DensityTuning {
    multiplier: 20.0,
    confidence: ConfidenceBands {
        phrase_threshold: 3,
        high: 75,
        low: 60,
    },
    explanations: ExplanationTiers {
        severe: "Heavy reliance on vague authority claims. References to experts/institutions lack specific citations or verifiable sources.",
        significant: "Significant use of authority appeals without verification. Claims reference experts or institutions without proper attribution.",
        some: "Some authority claims present. Content uses expert references that may require verification.",
        minimal: "Minimal authority manipulation. Claims are either specific or authority appeals are limited.",
    },
};

/// Scores appeals to unnamed or unverifiable authority.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorityIllusion;

impl DimensionAnalyzer for AuthorityIllusion {
    fn dimension(&self) -> Dimension {
        Dimension::AuthorityIllusion
    }

    fn rules(&self) -> &'static RuleSet {
        &RULES
    }

    fn analyze(&self, text: &str) -> DimensionScore {
        super::score_dimension(self.dimension(), &COMPILED, &TUNING, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_compile() {
        assert!(RULES.compile().is_ok());
    }

    #[test]
    fn stacked_authority_appeals() {
        let score = AuthorityIllusion
            .analyze("According to experts, studies show that Harvard research proves it. Dr. Smith says so.");
        assert_eq!(score.score, 100);
        assert!(score.detected_phrases.contains(&"According to experts".to_string()));
        assert!(score.detected_phrases.contains(&"Harvard research".to_string()));
        assert!(score.detected_phrases.contains(&"Dr. Smith says".to_string()));
        // "studies show" matches two matchers but is reported once
        let count = score
            .detected_phrases
            .iter()
            .filter(|p| p.as_str() == "studies show")
            .count();
        assert_eq!(count, 1);
        assert_eq!(score.confidence, 75);
    }

    #[test]
    fn credential_pattern_is_case_sensitive() {
        assert_eq!(AuthorityIllusion.analyze("DR. smith SAYS hello").score, 0);
    }
}
