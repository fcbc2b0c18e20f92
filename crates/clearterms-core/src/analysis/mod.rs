//! Policy analysis: wire model, the analyzer seam and the result view.

pub mod model;
pub mod view;

use async_trait::async_trait;

use crate::error::AnalysisError;
use model::{AnalysisTarget, PolicyAnalysis};

/// Something that can turn a target into a `PolicyAnalysis`.
///
/// Each call performs exactly one analysis attempt; implementations must not
/// retry or cache.
#[async_trait]
pub trait PolicyAnalyzer: Send + Sync {
    async fn analyze(&self, target: &AnalysisTarget) -> Result<PolicyAnalysis, AnalysisError>;
}
