//! Form domain models.

use serde::{Deserialize, Serialize};

use crate::analysis::model::{AnalysisTarget, PolicyAnalysis};

/// Which field the form submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Url,
    Text,
}

impl InputMode {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Url => "Analyze URL",
            Self::Text => "Paste Text",
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(PolicyAnalysis),
    Failed(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The displayed result, if any.
    pub fn result(&self) -> Option<&PolicyAnalysis> {
        match self {
            Self::Success(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// The displayed error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }
}

/// An in-flight submission handed out by `AnalysisForm::begin_submit`.
///
/// Only the ticket matching the form's current submission can complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub target: AnalysisTarget,
}
