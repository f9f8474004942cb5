// Report types: the values that flow out of the scoring pipeline.
//
// Everything here is created fresh per analysis call and never mutated
// afterwards. The JSON shape uses camelCase field names so the report can
// be handed to a web front end unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the six axes of manipulative language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    EmotionalAmplification,
    UrgencyPressure,
    AuthorityIllusion,
    SelectiveFraming,
    SocialProof,
    EchoChamber,
}

impl Dimension {
    /// All dimensions in their fixed report order.
    pub const ALL: [Dimension; 6] = [
        Dimension::EmotionalAmplification,
        Dimension::UrgencyPressure,
        Dimension::AuthorityIllusion,
        Dimension::SelectiveFraming,
        Dimension::SocialProof,
        Dimension::EchoChamber,
    ];

    /// Stable machine key, matching the JSON field name.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::EmotionalAmplification => "emotionalAmplification",
            Dimension::UrgencyPressure => "urgencyPressure",
            Dimension::AuthorityIllusion => "authorityIllusion",
            Dimension::SelectiveFraming => "selectiveFraming",
            Dimension::SocialProof => "socialProof",
            Dimension::EchoChamber => "echoChamber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::EmotionalAmplification => "Emotional Amplification",
            Dimension::UrgencyPressure => "Urgency & Pressure",
            Dimension::AuthorityIllusion => "Authority Illusion",
            Dimension::SelectiveFraming => "Selective Framing",
            Dimension::SocialProof => "Social Proof",
            Dimension::EchoChamber => "Echo Chamber",
        }
    }

    /// Short alias accepted on the command line.
    pub fn short_key(&self) -> &'static str {
        match self {
            Dimension::EmotionalAmplification => "emotional",
            Dimension::UrgencyPressure => "urgency",
            Dimension::AuthorityIllusion => "authority",
            Dimension::SelectiveFraming => "framing",
            Dimension::SocialProof => "social",
            Dimension::EchoChamber => "echo",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Dimension {
    type Err = String;

    /// Accepts the JSON key or a short alias (`emotional`, `urgency`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| {
                d.key().eq_ignore_ascii_case(&lower) || d.short_key() == lower.as_str()
            })
            .ok_or_else(|| {
                format!(
                    "unknown dimension '{s}' (expected one of: emotional, urgency, authority, framing, social, echo)"
                )
            })
    }
}

/// The result of scoring one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    /// Manipulation intensity, 0-100
    pub score: u32,
    /// Mirrors `score`; kept as a separate field for display consumers
    pub percentage: u32,
    /// Matched substrings in discovery order, unique, at most 10
    pub detected_phrases: Vec<String>,
    pub explanation: String,
    /// Two-level lookup on the number of distinct phrases, not a statistic
    pub confidence: u32,
}

/// One `DimensionScore` per dimension, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub emotional_amplification: DimensionScore,
    pub urgency_pressure: DimensionScore,
    pub authority_illusion: DimensionScore,
    pub selective_framing: DimensionScore,
    pub social_proof: DimensionScore,
    pub echo_chamber: DimensionScore,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::EmotionalAmplification => &self.emotional_amplification,
            Dimension::UrgencyPressure => &self.urgency_pressure,
            Dimension::AuthorityIllusion => &self.authority_illusion,
            Dimension::SelectiveFraming => &self.selective_framing,
            Dimension::SocialProof => &self.social_proof,
            Dimension::EchoChamber => &self.echo_chamber,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut DimensionScore {
        match dimension {
            Dimension::EmotionalAmplification => &mut self.emotional_amplification,
            Dimension::UrgencyPressure => &mut self.urgency_pressure,
            Dimension::AuthorityIllusion => &mut self.authority_illusion,
            Dimension::SelectiveFraming => &mut self.selective_framing,
            Dimension::SocialProof => &mut self.social_proof,
            Dimension::EchoChamber => &mut self.echo_chamber,
        }
    }

    /// Iterate in the fixed dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Each pair fills its dimension's slot; dimensions never seen stay default.
impl FromIterator<(Dimension, DimensionScore)> for DimensionScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, DimensionScore)>>(iter: I) -> Self {
        let mut scores = DimensionScores::default();
        for (dimension, score) in iter {
            *scores.get_mut(dimension) = score;
        }
        scores
    }
}

/// A hypothesized persuasive goal behind the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Selling,
    Political,
    Fear,
    Attack,
    Radicalization,
    Attention,
}

impl Intent {
    /// Declaration order; also the tie-break order for ranking.
    pub const ALL: [Intent; 6] = [
        Intent::Selling,
        Intent::Political,
        Intent::Fear,
        Intent::Attack,
        Intent::Radicalization,
        Intent::Attention,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Intent::Selling => "selling",
            Intent::Political => "political",
            Intent::Fear => "fear",
            Intent::Attack => "attack",
            Intent::Radicalization => "radicalization",
            Intent::Attention => "attention",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Selling => "Commercial/Selling",
            Intent::Political => "Political Persuasion",
            Intent::Fear => "Fear Amplification",
            Intent::Attack => "Reputation Attack",
            Intent::Radicalization => "Ideological Radicalization",
            Intent::Attention => "Attention Harvesting",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Per-intent probabilities, 0-100 each.
///
/// Each value is its category's share of the shared match total, rounded
/// and capped on its own, so the six values need not sum to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentProbability {
    pub selling: u32,
    pub political: u32,
    pub fear: u32,
    pub attack: u32,
    pub radicalization: u32,
    pub attention: u32,
}

impl IntentProbability {
    pub fn get(&self, intent: Intent) -> u32 {
        match intent {
            Intent::Selling => self.selling,
            Intent::Political => self.political,
            Intent::Fear => self.fear,
            Intent::Attack => self.attack,
            Intent::Radicalization => self.radicalization,
            Intent::Attention => self.attention,
        }
    }

    pub fn set(&mut self, intent: Intent, probability: u32) {
        let slot = match intent {
            Intent::Selling => &mut self.selling,
            Intent::Political => &mut self.political,
            Intent::Fear => &mut self.fear,
            Intent::Attack => &mut self.attack,
            Intent::Radicalization => &mut self.radicalization,
            Intent::Attention => &mut self.attention,
        };
        *slot = probability;
    }

    /// All six entries in declaration order.
    pub fn entries(&self) -> Vec<TopIntent> {
        Intent::ALL
            .into_iter()
            .map(|intent| TopIntent {
                intent,
                probability: self.get(intent),
            })
            .collect()
    }

    /// The `n` most probable intents, descending.
    ///
    /// The sort is stable over declaration order, so equal probabilities
    /// keep selling, political, fear, attack, radicalization, attention.
    pub fn top(&self, n: usize) -> Vec<TopIntent> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.probability.cmp(&a.probability));
        entries.truncate(n);
        entries
    }
}

/// An `(intent, probability)` pair in the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopIntent {
    #[serde(rename = "type")]
    pub intent: Intent,
    pub probability: u32,
}

/// Four-tier label for the composite distortion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CognitiveRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl CognitiveRiskLevel {
    /// Lower bounds are inclusive and checked top-down.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 70 => CognitiveRiskLevel::Critical,
            s if s >= 45 => CognitiveRiskLevel::High,
            s if s >= 25 => CognitiveRiskLevel::Moderate,
            _ => CognitiveRiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveRiskLevel::Low => "Low",
            CognitiveRiskLevel::Moderate => "Moderate",
            CognitiveRiskLevel::High => "High",
            CognitiveRiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for CognitiveRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CognitiveRiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(CognitiveRiskLevel::Low),
            "moderate" => Ok(CognitiveRiskLevel::Moderate),
            "high" => Ok(CognitiveRiskLevel::High),
            "critical" => Ok(CognitiveRiskLevel::Critical),
            _ => Err(format!(
                "unknown risk level '{s}' (expected low, moderate, high or critical)"
            )),
        }
    }
}

/// Optional tag describing where the text came from.
///
/// Accepted for callers that want to record it; scoring ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Transcript,
    Article,
    Post,
    Speech,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Transcript => "transcript",
            ContentType::Article => "article",
            ContentType::Post => "post",
            ContentType::Speech => "speech",
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ContentType::Text),
            "transcript" => Ok(ContentType::Transcript),
            "article" => Ok(ContentType::Article),
            "post" => Ok(ContentType::Post),
            "speech" => Ok(ContentType::Speech),
            _ => Err(format!(
                "unknown content type '{s}' (expected text, transcript, article, post or speech)"
            )),
        }
    }
}

/// Input to the pipeline: the text plus its optional content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

impl AnalysisInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }
}

/// The complete distortion report for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub reality_distortion_score: u32,
    pub cognitive_risk_level: CognitiveRiskLevel,
    pub dimensions: DimensionScores,
    pub influence_intent: IntentProbability,
    pub top_intents: Vec<TopIntent>,
    pub reframing_suggestion: String,
    pub overall_confidence: u32,
    pub analyzed_at: DateTime<Utc>,
}
