//! Input form state machine.
//!
//! `AnalysisForm` holds the mode, both field values and the submit status.
//! `FormController` drives one submission end to end against a
//! `PolicyAnalyzer`.

pub mod model;

use tracing::{debug, info, warn};

use crate::analysis::model::{AnalysisTarget, PolicyAnalysis};
use crate::analysis::PolicyAnalyzer;
use crate::error::{AnalysisError, ClearTermsError, ClearTermsResult};
use model::{FormStatus, InputMode, Submission};

/// Form state for one client view.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    mode: InputMode,
    url: String,
    text: String,
    status: FormStatus,
    next_id: u64,
    in_flight: Option<u64>,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Switch input mode. Field contents and the displayed outcome are kept.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!(from = self.mode.as_str(), to = mode.as_str(), "Input mode changed");
        }
        self.mode = mode;
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The target the active mode would submit, if its field is filled.
    pub fn active_target(&self) -> Option<AnalysisTarget> {
        match self.mode {
            InputMode::Url if !self.url.trim().is_empty() => {
                Some(AnalysisTarget::Url(self.url.trim().to_string()))
            }
            InputMode::Text if !self.text.is_empty() => {
                Some(AnalysisTarget::Text(self.text.clone()))
            }
            _ => None,
        }
    }

    /// Enter `Submitting` and hand out a ticket for the outbound call.
    ///
    /// Rejected without touching any state when the active field is empty
    /// or another submission is still in flight.
    pub fn begin_submit(&mut self) -> ClearTermsResult<Submission> {
        if self.status.is_submitting() {
            warn!("Submit ignored: analysis already in progress");
            return Err(ClearTermsError::Busy);
        }

        let target = self.active_target().ok_or_else(|| {
            ClearTermsError::validation(match self.mode {
                InputMode::Url => "URL is required",
                InputMode::Text => "Policy text is required",
            })
        })?;

        self.next_id += 1;
        let id = self.next_id;
        self.in_flight = Some(id);
        self.status = FormStatus::Submitting;

        debug!(submission = id, mode = target.kind(), "Submission started");
        Ok(Submission { id, target })
    }

    /// Apply the outcome of a submission.
    ///
    /// Returns `false` and changes nothing when `submission` is not the one
    /// currently in flight.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: Result<PolicyAnalysis, AnalysisError>,
    ) -> bool {
        if self.in_flight != Some(submission.id) {
            debug!(submission = submission.id, "Discarding stale completion");
            return false;
        }
        self.in_flight = None;

        self.status = match outcome {
            Ok(analysis) => {
                info!(
                    submission = submission.id,
                    score = analysis.transparency_score,
                    verdict = %analysis.verdict,
                    "Analysis succeeded"
                );
                FormStatus::Success(analysis)
            }
            Err(err) => {
                warn!(submission = submission.id, kind = ?err.kind, "Analysis failed");
                FormStatus::Failed(err.display_message().to_string())
            }
        };
        true
    }
}

/// Runs submissions of an `AnalysisForm` through a `PolicyAnalyzer`.
pub struct FormController<A> {
    form: AnalysisForm,
    analyzer: A,
}

impl<A: PolicyAnalyzer> FormController<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            form: AnalysisForm::new(),
            analyzer,
        }
    }

    pub fn form(&self) -> &AnalysisForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AnalysisForm {
        &mut self.form
    }

    /// Submit the active field and wait for the outcome.
    ///
    /// Analysis failures end in `FormStatus::Failed`; only a rejected
    /// submission (empty field, busy) is returned as `Err`.
    pub async fn submit(&mut self) -> ClearTermsResult<&FormStatus> {
        let submission = self.form.begin_submit()?;
        let outcome = self.analyzer.analyze(&submission.target).await;
        self.form.complete(&submission, outcome);
        Ok(self.form.status())
    }
}
