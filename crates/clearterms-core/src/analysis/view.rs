//! Presentation model for a finished analysis.
//!
//! Turns a `PolicyAnalysis` into tiers and sections a renderer can draw
//! without further decisions. Any score and any verdict string is accepted.

use serde::Serialize;

use super::model::{PolicyAnalysis, RiskFlag, UserRight};

/// Shown when the backend found no risk flags.
pub const NO_RISKS_PLACEHOLDER: &str = "No major risks detected.";

/// Shown when the backend found no user rights.
pub const NO_RIGHTS_PLACEHOLDER: &str = "No specific rights mentioned.";

/// Visual tier of a transparency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: i64) -> Self {
        if score > 80 {
            Self::High
        } else if score > 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Visual tone of a verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTone {
    Positive,
    Caution,
    Negative,
}

impl VerdictTone {
    /// Unknown verdicts fall into `Negative`.
    pub fn from_verdict(verdict: &str) -> Self {
        match verdict.trim().to_lowercase().as_str() {
            "safe" => Self::Positive,
            "caution" => Self::Caution,
            _ => Self::Negative,
        }
    }
}

/// A list section that is either populated or replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a, T> {
    Entries(&'a [T]),
    Placeholder(&'static str),
}

impl<'a, T> Section<'a, T> {
    fn of(items: &'a [T], placeholder: &'static str) -> Self {
        if items.is_empty() {
            Self::Placeholder(placeholder)
        } else {
            Self::Entries(items)
        }
    }
}

/// Everything the renderer needs for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView<'a> {
    pub score: i64,
    pub score_tier: ScoreTier,
    pub verdict: &'a str,
    pub verdict_tone: VerdictTone,
    pub summary: &'a str,
    pub risks: Section<'a, RiskFlag>,
    pub rights: Section<'a, UserRight>,
}

impl<'a> AnalysisView<'a> {
    pub fn new(analysis: &'a PolicyAnalysis) -> Self {
        Self {
            score: analysis.transparency_score,
            score_tier: ScoreTier::from_score(analysis.transparency_score),
            verdict: &analysis.verdict,
            verdict_tone: VerdictTone::from_verdict(&analysis.verdict),
            summary: &analysis.summary,
            risks: Section::of(&analysis.risk_flags, NO_RISKS_PLACEHOLDER),
            rights: Section::of(&analysis.user_rights, NO_RIGHTS_PLACEHOLDER),
        }
    }
}
