//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// What the user asked to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisTarget {
    Url(String),
    Text(String),
}

impl AnalysisTarget {
    /// Wire body for `POST /analyze`.
    pub fn to_request(&self) -> AnalysisRequest {
        match self {
            Self::Url(url) => AnalysisRequest {
                url: url.clone(),
                text: None,
            },
            Self::Text(text) => AnalysisRequest {
                url: String::new(),
                text: Some(text.clone()),
            },
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Text(_) => "text",
        }
    }
}

/// Request body sent to the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A structured policy analysis returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAnalysis {
    pub transparency_score: i64,
    pub summary: String,
    pub verdict: String,
    pub risk_flags: Vec<RiskFlag>,
    pub user_rights: Vec<UserRight>,
}

/// One concerning clause found in the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub category: String,
    pub severity: String,
    pub description: String,
}

/// One right the policy grants to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRight {
    pub right: String,
    pub details: String,
}
