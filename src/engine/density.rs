// Density scoring shared by every dimension analyzer.
//
// score = min(round(matches / max(words / 100, 1) * K), 100)
//
// The per-100-words divisor is floored at 1, so any text up to 100 words
// is scored on raw match count. Each analyzer supplies its own K, its
// confidence bands and its four explanation tiers.

use super::rules::{is_text_whitespace, unique_phrases, RuleHits};
use super::types::DimensionScore;

/// Maximum number of phrases reported per dimension.
pub const MAX_DETECTED_PHRASES: usize = 10;

/// Score breakpoints for the explanation tiers (strictly greater than).
pub const SEVERE_ABOVE: u32 = 70;
pub const SIGNIFICANT_ABOVE: u32 = 40;
pub const SOME_ABOVE: u32 = 15;

/// The four canned explanations, most severe first.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationTiers {
    pub severe: &'static str,
    pub significant: &'static str,
    pub some: &'static str,
    pub minimal: &'static str,
}

impl ExplanationTiers {
    pub fn for_score(&self, score: u32) -> &'static str {
        if score > SEVERE_ABOVE {
            self.severe
        } else if score > SIGNIFICANT_ABOVE {
            self.significant
        } else if score > SOME_ABOVE {
            self.some
        } else {
            self.minimal
        }
    }
}

/// Two-level confidence lookup keyed on distinct phrase count.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceBands {
    /// Phrase count must exceed this for the high value
    pub phrase_threshold: usize,
    pub high: u32,
    pub low: u32,
}

impl ConfidenceBands {
    pub fn for_phrase_count(&self, count: usize) -> u32 {
        if count > self.phrase_threshold {
            self.high
        } else {
            self.low
        }
    }
}

/// Per-analyzer tuning constants.
#[derive(Debug, Clone, Copy)]
pub struct DensityTuning {
    /// Multiplier applied to matches-per-100-words
    pub multiplier: f64,
    pub confidence: ConfidenceBands,
    pub explanations: ExplanationTiers,
}

/// Token count after splitting on whitespace runs.
///
/// Leading and trailing runs produce empty edge tokens that still count, so
/// `"a b\n"` is three tokens and `""` is one. This keeps a file's trailing
/// newline in the divisor.
pub fn word_count(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        let space = is_text_whitespace(c);
        if space && !in_run {
            runs += 1;
        }
        in_run = space;
    }
    runs + 1
}

/// Matches per 100 words, with the divisor floored at 1.
pub fn density(total_matches: usize, words: usize) -> f64 {
    let per_hundred = (words as f64 / 100.0).max(1.0);
    total_matches as f64 / per_hundred
}

/// Scale a density into the 0-100 score range.
pub fn scaled_score(density: f64, multiplier: f64) -> u32 {
    let raw = (density * multiplier).round();
    raw.clamp(0.0, 100.0) as u32
}

/// Raw score for a scan before any analyzer-specific adjustment.
pub fn raw_score(hits: &RuleHits, words: usize, tuning: &DensityTuning) -> u32 {
    scaled_score(density(hits.total_matches, words), tuning.multiplier)
}

/// Assemble the final `DimensionScore` from an adjusted score and the
/// scan's candidate phrases.
pub fn finish(score: u32, hits: RuleHits, tuning: &DensityTuning) -> DimensionScore {
    let score = score.min(100);
    let detected_phrases = unique_phrases(hits.candidate_phrases, MAX_DETECTED_PHRASES);
    let confidence = tuning.confidence.for_phrase_count(detected_phrases.len());

    DimensionScore {
        score,
        percentage: score,
        detected_phrases,
        explanation: tuning.explanations.for_score(score).to_string(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: ExplanationTiers = ExplanationTiers {
        severe: "severe",
        significant: "significant",
        some: "some",
        minimal: "minimal",
    };

    #[test]
    fn explanation_breakpoints_are_exclusive() {
        assert_eq!(TIERS.for_score(71), "severe");
        assert_eq!(TIERS.for_score(70), "significant");
        assert_eq!(TIERS.for_score(41), "significant");
        assert_eq!(TIERS.for_score(40), "some");
        assert_eq!(TIERS.for_score(16), "some");
        assert_eq!(TIERS.for_score(15), "minimal");
        assert_eq!(TIERS.for_score(0), "minimal");
    }

    #[test]
    fn confidence_requires_exceeding_threshold() {
        let bands = ConfidenceBands {
            phrase_threshold: 4,
            high: 80,
            low: 65,
        };
        assert_eq!(bands.for_phrase_count(4), 65);
        assert_eq!(bands.for_phrase_count(5), 80);
        assert_eq!(bands.for_phrase_count(0), 65);
    }

    #[test]
    fn short_text_density_uses_floor() {
        // 3 matches in 10 words: divisor floors at 1, so density is 3
        assert!((density(3, 10) - 3.0).abs() < f64::EPSILON);
        assert!((density(0, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn long_text_density_is_per_hundred_words() {
        // 6 matches in 300 words = 2 per hundred
        assert!((density(6, 300) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn scaled_score_rounds_and_caps() {
        assert_eq!(scaled_score(2.5, 15.0), 38); // 37.5 rounds up
        assert_eq!(scaled_score(10.0, 18.0), 100);
        assert_eq!(scaled_score(0.0, 20.0), 0);
    }

    #[test]
    fn word_count_keeps_edge_tokens() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("one two\tthree"), 3);
        assert_eq!(word_count("one two\n"), 3);
        assert_eq!(word_count("  one two\nthree  "), 5);
        assert_eq!(word_count("   \n\t "), 2);
    }

    #[test]
    fn word_count_splits_on_unicode_spaces() {
        assert_eq!(word_count("one\u{a0}two\u{2028}three"), 3);
    }

    #[test]
    fn trailing_newline_changes_long_text_density() {
        // 5 matches over 131 tokens: 5 / 1.31 * 15 = 57.25
        let mut text = "crisis ".repeat(5);
        text.push_str(&"word ".repeat(124));
        text.push_str("word\n");
        let words = word_count(&text);
        assert_eq!(words, 131);
        assert_eq!(scaled_score(density(5, words), 15.0), 57);
    }
}
