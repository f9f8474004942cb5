// Unit tests for the dimension analyzers and the intent classifier.
//
// Tests analyzer invariants over a small corpus (score bounds, phrase
// limits, determinism), the documented trigger scenarios, and intent
// normalization behavior.

use std::collections::HashSet;

use distortion_lens::analyzers::{self, intent};
use distortion_lens::engine::density;
use distortion_lens::engine::types::{Dimension, Intent, IntentProbability};

const CORPUS: &[&str] = &[
    "",
    "   \n\t  ",
    "The committee met on Tuesday to review the budget.",
    "BREAKING: Experts say you must act now before it's too late! Everyone agrees this is a crisis.",
    "Some argue X, however others believe Y; the evidence is nuanced.",
    "They are the enemy. Wake up! Only real patriots understand. Us vs them, good vs evil!!!",
    "Buy now!!! Limited time offer, only 2 hours left. Thousands of satisfied customers, 5 stars, #1 best-selling.",
    "Absolutely shocking!! The worst disaster in history. They will destroy everything. Evil, corrupt, disgusting!",
    "now now now now now now now now now now now now now now now now now now now now",
    "Everyone everyone everyone everyone everyone everyone everyone everyone everyone everyone everyone everyone",
];

fn repeated(sentence: &str, times: usize) -> String {
    vec![sentence; times].join(" ")
}

// ============================================================
// Invariants across every analyzer
// ============================================================

#[test]
fn scores_stay_in_range() {
    let long = repeated("Act now, experts say everyone agrees it is clearly a crisis!", 40);
    let mut inputs: Vec<&str> = CORPUS.to_vec();
    inputs.push(&long);

    for text in inputs {
        for analyzer in analyzers::all() {
            let score = analyzer.analyze(text);
            assert!(score.score <= 100, "{}: score {}", analyzer.dimension(), score.score);
            assert_eq!(score.percentage, score.score);
            assert!(score.confidence <= 100);
            assert!(score.confidence >= 60, "confidence is always a fixed band");
        }
    }
}

#[test]
fn phrases_are_unique_and_capped() {
    for text in CORPUS {
        for analyzer in analyzers::all() {
            let score = analyzer.analyze(text);
            assert!(score.detected_phrases.len() <= 10);
            let unique: HashSet<&String> = score.detected_phrases.iter().collect();
            assert_eq!(
                unique.len(),
                score.detected_phrases.len(),
                "{} repeated a phrase: {:?}",
                analyzer.dimension(),
                score.detected_phrases
            );
        }
    }
}

#[test]
fn analyzers_are_deterministic() {
    for text in CORPUS {
        for analyzer in analyzers::all() {
            assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
        }
        assert_eq!(intent::classify(text), intent::classify(text));
    }
}

#[test]
fn whitespace_only_is_treated_like_empty() {
    for analyzer in analyzers::all() {
        let empty = analyzer.analyze("");
        let blank = analyzer.analyze("   \n\t  ");
        assert_eq!(empty, blank);
        assert_eq!(empty.score, 0);
        assert!(empty.detected_phrases.is_empty());
    }
}

#[test]
fn repeated_pattern_contributes_three_phrases_at_most() {
    // twenty "now" matches, but identical text dedups to a single phrase
    let score = analyzers::for_dimension(Dimension::UrgencyPressure).analyze(CORPUS[8]);
    assert_eq!(score.detected_phrases, vec!["now"]);
    assert_eq!(score.score, 100);
}

#[test]
fn long_text_dilutes_density() {
    // one "crisis" in 201 words: the per-100 divisor is 2.01, not the floor
    let filler = repeated("the quick brown fox jumps over the lazy dog today", 20);
    let text = format!("{filler} crisis");
    let words = density::word_count(&text);
    assert_eq!(words, 201);
    let score = analyzers::for_dimension(Dimension::EmotionalAmplification).analyze(&text);
    // 1 / 2.01 * 15 = 7.46
    assert_eq!(score.score, 7);
}

#[test]
fn trailing_newline_counts_as_a_token() {
    // 131 tokens: five "crisis", 125 "word", and the empty token after "\n"
    let mut text = "crisis ".repeat(5);
    text.push_str(&"word ".repeat(124));
    text.push_str("word\n");
    let score = analyzers::for_dimension(Dimension::EmotionalAmplification).analyze(&text);
    assert_eq!(score.score, 57);
}

#[test]
fn non_breaking_spaces_separate_words() {
    let text = "limited\u{a0}time offer, experts\u{a0}say so";
    let authority = analyzers::for_dimension(Dimension::AuthorityIllusion).analyze(text);
    assert_eq!(authority.score, 20);
    assert_eq!(authority.detected_phrases, vec!["experts\u{a0}say"]);

    // "offer" and "limited\u{a0}time" are both selling cues
    assert_eq!(intent::raw_counts(text)[0], (Intent::Selling, 2));
    assert_eq!(intent::classify(text).selling, 100);
}

// ============================================================
// Documented trigger scenarios
// ============================================================

#[test]
fn breaking_news_scenario_triggers_four_dimensions() {
    let text = CORPUS[3];

    let urgency = analyzers::for_dimension(Dimension::UrgencyPressure).analyze(text);
    assert!(urgency.score > 0);
    for phrase in ["now", "act now", "before it's too late"] {
        assert!(
            urgency.detected_phrases.contains(&phrase.to_string()),
            "urgency missing {phrase}: {:?}",
            urgency.detected_phrases
        );
    }

    let authority = analyzers::for_dimension(Dimension::AuthorityIllusion).analyze(text);
    assert!(authority.score > 0);
    assert!(authority.detected_phrases.contains(&"Experts say".to_string()));

    let social = analyzers::for_dimension(Dimension::SocialProof).analyze(text);
    assert!(social.score > 0);
    assert!(social.detected_phrases.contains(&"Everyone agrees".to_string()));

    let emotional = analyzers::for_dimension(Dimension::EmotionalAmplification).analyze(text);
    assert!(emotional.score > 0);
    assert!(emotional.detected_phrases.contains(&"crisis".to_string()));
}

#[test]
fn breaking_news_scenario_exact_scores() {
    let text = CORPUS[3];
    let expected = [
        (Dimension::EmotionalAmplification, 30, 70),
        (Dimension::UrgencyPressure, 100, 80),
        (Dimension::AuthorityIllusion, 20, 60),
        (Dimension::SelectiveFraming, 16, 62),
        (Dimension::SocialProof, 17, 68),
        (Dimension::EchoChamber, 0, 67),
    ];
    for (dimension, score, confidence) in expected {
        let result = analyzers::for_dimension(dimension).analyze(text);
        assert_eq!(result.score, score, "{dimension} score");
        assert_eq!(result.confidence, confidence, "{dimension} confidence");
    }
}

#[test]
fn hedged_language_zeroes_selective_framing() {
    let framing = analyzers::for_dimension(Dimension::SelectiveFraming);
    assert_eq!(framing.analyze(CORPUS[4]).score, 0);

    // a one-sided matcher fires, the balance penalty still wins
    let mixed = framing.analyze("Obviously some argue otherwise, but both views are complex.");
    assert!(!mixed.detected_phrases.is_empty());
    assert_eq!(mixed.score, 0);
}

// ============================================================
// Intent classifier
// ============================================================

#[test]
fn intent_values_are_bounded() {
    for text in CORPUS {
        let p = intent::classify(text);
        for entry in p.entries() {
            assert!(entry.probability <= 100);
        }
    }
}

#[test]
fn empty_text_has_no_intent() {
    assert_eq!(intent::classify(""), IntentProbability::default());
}

#[test]
fn political_fear_mix_splits_evenly() {
    let p = intent::classify("Vote for the candidate who will protect us from danger.");
    assert_eq!(p.political, 50);
    assert_eq!(p.fear, 50);
    let top: Vec<Intent> = p.top(3).iter().map(|t| t.intent).collect();
    assert_eq!(top, vec![Intent::Political, Intent::Fear, Intent::Selling]);
}

#[test]
fn breaking_news_intents_do_not_sum_to_one_hundred() {
    // "act now" (selling), "crisis" (fear), "BREAKING" (attention): 1/3 each
    let p = intent::classify(CORPUS[3]);
    assert_eq!(p.selling, 33);
    assert_eq!(p.fear, 33);
    assert_eq!(p.attention, 33);
    let sum: u32 = p.entries().iter().map(|e| e.probability).sum();
    assert_eq!(sum, 99);
}
