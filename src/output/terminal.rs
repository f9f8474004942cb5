// Colored terminal output for distortion reports and rule tables.
//
// This module handles all terminal-specific formatting: colors, bars,
// the intent matrix. The main.rs commands delegate here.

use colored::Colorize;

use crate::analyzers;
use crate::analyzers::framing::BALANCE_RULES;
use crate::analyzers::intent::INTENT_RULES;
use crate::engine::rules::RuleSet;
use crate::engine::types::{AnalysisReport, CognitiveRiskLevel, Dimension, Intent};

use super::{score_bar, truncate_chars, BAR_WIDTH};

/// Phrases shown per dimension before the list is cut off.
const PHRASES_SHOWN: usize = 5;
const PHRASE_PREVIEW_CHARS: usize = 60;

/// Display a complete report in the terminal.
pub fn display_report(report: &AnalysisReport) {
    println!("\n{}", "=== Distortion Report ===".bold());
    println!();
    println!(
        "  Reality distortion score: {}/100  ({} risk)",
        report.reality_distortion_score.to_string().bold(),
        colorize_risk(report.cognitive_risk_level)
    );
    println!("  Overall confidence: {}%", report.overall_confidence);
    println!(
        "  Analyzed at: {}",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    println!("\n{}", "--- Dimensions ---".bold());
    for (dimension, score) in report.dimensions.iter() {
        let bar = score_bar(score.score, BAR_WIDTH);
        let colored_bar = if score.score > 70 {
            bar.red()
        } else if score.score > 40 {
            bar.bright_red()
        } else if score.score > 15 {
            bar.yellow()
        } else {
            bar.green()
        };

        println!(
            "\n  {:<26} {} {:>3}  (confidence {}%)",
            dimension.label().bold(),
            colored_bar,
            score.score,
            score.confidence
        );
        println!("    {}", score.explanation.dimmed());

        if !score.detected_phrases.is_empty() {
            let shown: Vec<String> = score
                .detected_phrases
                .iter()
                .take(PHRASES_SHOWN)
                .map(|p| format!("\"{}\"", truncate_chars(p, PHRASE_PREVIEW_CHARS)))
                .collect();
            let more = score.detected_phrases.len().saturating_sub(PHRASES_SHOWN);
            let suffix = if more > 0 {
                format!(" (+{more} more)")
            } else {
                String::new()
            };
            println!("    Detected: {}{}", shown.join(", "), suffix.dimmed());
        }
    }

    println!("\n{}", "--- Influence Intent ---".bold());
    for entry in report.influence_intent.entries() {
        let marker = if report.top_intents.iter().any(|t| t.intent == entry.intent) {
            "*"
        } else {
            " "
        };
        println!(
            "  {} {:<28} {}",
            marker,
            entry.intent.label(),
            colorize_intensity(entry.probability)
        );
    }

    println!("\n{}", "--- Suggested Reframing ---".bold());
    for line in report.reframing_suggestion.lines() {
        println!("  {line}");
    }
    println!();
}

/// Display the rule tables, optionally limited to one dimension.
pub fn display_rules(only: Option<Dimension>) {
    let dimensions: Vec<Dimension> = match only {
        Some(d) => vec![d],
        None => Dimension::ALL.to_vec(),
    };

    for dimension in dimensions {
        let analyzer = analyzers::for_dimension(dimension);
        display_rule_set(dimension.label(), analyzer.rules());
        if dimension == Dimension::SelectiveFraming {
            display_rule_set("Selective Framing (balance, subtracts)", &BALANCE_RULES);
        }
    }

    if only.is_none() {
        for (intent, rules) in INTENT_RULES.iter() {
            display_rule_set(&format!("Intent: {}", intent_heading(*intent)), rules);
        }
    }
}

fn display_rule_set(heading: &str, rules: &RuleSet) {
    println!(
        "\n{} {}",
        heading.bold(),
        format!("({} patterns)", rules.matcher_count()).dimmed()
    );
    for category in rules.categories {
        println!("  {}", category.name.cyan());
        for matcher in category.matchers {
            let flag = if matcher.case_insensitive { "" } else { " [case-sensitive]" };
            println!("    {}{}", matcher.pattern, flag.dimmed());
        }
    }
}

fn intent_heading(intent: Intent) -> String {
    format!("{} ({})", intent.label(), intent.key())
}

/// Colorize a risk level.
fn colorize_risk(level: CognitiveRiskLevel) -> colored::ColoredString {
    let s = level.as_str();
    match level {
        CognitiveRiskLevel::Critical => s.red().bold(),
        CognitiveRiskLevel::High => s.bright_red(),
        CognitiveRiskLevel::Moderate => s.yellow(),
        CognitiveRiskLevel::Low => s.green(),
    }
}

/// Colorize an intent probability by intensity.
fn colorize_intensity(probability: u32) -> colored::ColoredString {
    let s = format!("{probability:>3}%");
    if probability >= 70 {
        s.red().bold()
    } else if probability >= 40 {
        s.bright_red()
    } else if probability >= 20 {
        s.yellow()
    } else {
        s.dimmed()
    }
}
