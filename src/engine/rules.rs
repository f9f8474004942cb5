// Declarative rule tables and the scanner that runs them.
//
// A rule set is plain data: named categories, each a list of regex
// matchers. Analyzers declare their tables as statics and compile them
// once on first use. Scanning never depends on which analyzer owns the
// table, so tables can be inspected and tested on their own.

use regex_lite::Regex;

/// How many matched substrings a single matcher may contribute to the
/// detected-phrase list.
pub const DEFAULT_PHRASE_CAP: usize = 3;

/// A single pattern in a rule table.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub pattern: &'static str,
    /// Most patterns ignore case; a few (like `Dr. X says`) rely on it.
    pub case_insensitive: bool,
    pub phrase_cap: usize,
}

impl Matcher {
    /// Case-insensitive matcher with the default phrase cap.
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            case_insensitive: true,
            phrase_cap: DEFAULT_PHRASE_CAP,
        }
    }

    pub const fn case_sensitive(pattern: &'static str) -> Self {
        Self {
            pattern,
            case_insensitive: false,
            phrase_cap: DEFAULT_PHRASE_CAP,
        }
    }

    fn compile(&self) -> Result<Regex, regex_lite::Error> {
        let pattern = widen_whitespace(self.pattern);
        if self.case_insensitive {
            Regex::new(&format!("(?i){pattern}"))
        } else {
            Regex::new(&pattern)
        }
    }
}

/// Members of the whitespace class used for `\s`, without brackets.
///
/// regex-lite's `\s` is ASCII-only. In rule patterns it is widened to the
/// set `is_text_whitespace` accepts, non-breaking spaces included.
const WHITESPACE_MEMBERS: &str =
    "\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Whitespace as the rule tables understand it, for matching and word counts.
pub fn is_text_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Rewrite every `\s` escape into the explicit Unicode whitespace class.
fn widen_whitespace(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('s') if in_class => out.push_str(WHITESPACE_MEMBERS),
                Some('s') => {
                    out.push('[');
                    out.push_str(WHITESPACE_MEMBERS);
                    out.push(']');
                }
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// A named family of matchers, e.g. "deadlines" or "vague experts".
#[derive(Debug, Clone, Copy)]
pub struct RuleCategory {
    pub name: &'static str,
    pub matchers: &'static [Matcher],
}

/// All categories owned by one analyzer (or one intent).
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub name: &'static str,
    pub categories: &'static [RuleCategory],
}

impl RuleSet {
    pub fn matcher_count(&self) -> usize {
        self.categories.iter().map(|c| c.matchers.len()).sum()
    }

    /// Compile every matcher in declaration order.
    pub fn compile(&self) -> Result<CompiledRuleSet, regex_lite::Error> {
        let mut categories = Vec::with_capacity(self.categories.len());
        for category in self.categories {
            let mut matchers = Vec::with_capacity(category.matchers.len());
            for matcher in category.matchers {
                matchers.push((matcher.compile()?, matcher.phrase_cap));
            }
            categories.push(CompiledCategory {
                name: category.name,
                matchers,
            });
        }
        Ok(CompiledRuleSet { categories })
    }

    /// Compile a table whose patterns are fixed in the source.
    ///
    /// Every static table in this crate is covered by a test that compiles
    /// it, so a failure here is a programming error.
    pub fn compile_static(&'static self) -> CompiledRuleSet {
        match self.compile() {
            Ok(compiled) => compiled,
            Err(e) => panic!("rule set '{}' contains an invalid pattern: {e}", self.name),
        }
    }
}

struct CompiledCategory {
    name: &'static str,
    matchers: Vec<(Regex, usize)>,
}

/// A rule set with its regexes built, ready to scan text.
pub struct CompiledRuleSet {
    categories: Vec<CompiledCategory>,
}

/// What a scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleHits {
    /// Non-overlapping matches summed over every matcher
    pub total_matches: usize,
    /// Match count per category, in declaration order
    pub category_matches: Vec<(&'static str, usize)>,
    /// Up to `phrase_cap` matched substrings per matcher, not yet deduplicated
    pub candidate_phrases: Vec<String>,
}

impl CompiledRuleSet {
    /// Run every matcher over the text.
    pub fn scan(&self, text: &str) -> RuleHits {
        let mut hits = RuleHits::default();

        for category in &self.categories {
            let mut category_total = 0;
            for (regex, cap) in &category.matchers {
                let mut count = 0;
                for m in regex.find_iter(text) {
                    if count < *cap {
                        hits.candidate_phrases.push(m.as_str().to_string());
                    }
                    count += 1;
                }
                category_total += count;
            }
            hits.total_matches += category_total;
            hits.category_matches.push((category.name, category_total));
        }

        hits
    }

    /// Count matches only; used for counter-signal tables.
    pub fn count(&self, text: &str) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.matchers.iter())
            .map(|(regex, _)| regex.find_iter(text).count())
            .sum()
    }
}

/// Deduplicate phrases keeping first occurrence, then truncate.
pub fn unique_phrases(candidates: Vec<String>, limit: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for phrase in candidates {
        if unique.len() >= limit {
            break;
        }
        if !unique.contains(&phrase) {
            unique.push(phrase);
        }
    }
    unique
}
