//! ClearTerms Core Library
//!
//! Policy analysis model, the analyzer seam and the input form state machine.

pub mod analysis;
pub mod error;
pub mod form;

pub use analysis::model::{AnalysisRequest, AnalysisTarget, PolicyAnalysis, RiskFlag, UserRight};
pub use analysis::view::{AnalysisView, ScoreTier, Section, VerdictTone};
pub use analysis::PolicyAnalyzer;
pub use error::{AnalysisError, AnalysisErrorKind, ClearTermsError, ClearTermsResult};
pub use form::model::{FormStatus, InputMode, Submission};
pub use form::{AnalysisForm, FormController};
