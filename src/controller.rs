// src/controller.rs
//! Request lifecycle for portfolio analysis.
//!
//! All session state lives in one value and changes only through the named
//! transitions: `Idle -> Submitting -> {success, failure} -> Idle`.

use crate::api::AdviceClient;
use crate::models::Advice;
use log::{debug, error, info};

/// Shown when a submission is attempted with nothing to analyze.
pub const EMPTY_PORTFOLIO_PROMPT: &str = "Please enter your portfolio.";

/// Shown in place of advice when the service call fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, something went wrong. Please check your backend terminal.";

/// Risk level reported alongside the fallback message.
pub const RISK_UNKNOWN: &str = "unknown";

/// Where the session is in the request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A request carrying the captured portfolio text is in flight.
    Submitting { request: String },
}

/// Why a submission was not accepted. No state changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The input is empty once trimmed; prompt the user instead.
    EmptyPortfolio,
    /// A request is already in flight; the submission is a no-op.
    RequestInFlight,
}

/// The session's entire mutable state: input text, last advice, usage
/// counter, and the lifecycle phase (which doubles as the loading flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    portfolio: String,
    advice: Option<Advice>,
    usage_counter: u32,
    phase: Phase,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            portfolio: String::new(),
            advice: None,
            usage_counter: 0,
            phase: Phase::Idle,
        }
    }

    /// Replace the portfolio text. The text is never cleared by the
    /// lifecycle itself; it persists across submissions until the user
    /// edits it again.
    pub fn set_portfolio(&mut self, text: impl Into<String>) {
        self.portfolio = text.into();
    }

    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }

    pub fn advice(&self) -> Option<&Advice> {
        self.advice.as_ref()
    }

    pub fn usage_counter(&self) -> u32 {
        self.usage_counter
    }

    /// True strictly between submission acceptance and resolution.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// `Idle -> Submitting`.
    ///
    /// The in-flight check comes first and does not rely on any caller-side
    /// gating: while a request is pending, further submissions are rejected
    /// here no matter how they were issued. An input that is empty after
    /// trimming is rejected without touching the state. On acceptance the
    /// previous advice is cleared and the raw, untrimmed text is captured
    /// as the request payload.
    pub fn begin_submission(&mut self) -> Result<String, SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::RequestInFlight);
        }
        if self.portfolio.trim().is_empty() {
            return Err(SubmitRejection::EmptyPortfolio);
        }

        self.advice = None;
        let request = self.portfolio.clone();
        self.phase = Phase::Submitting {
            request: request.clone(),
        };
        Ok(request)
    }

    /// `Submitting -> Idle` with advice populated and the counter bumped.
    /// Ignored outside `Submitting`.
    pub fn complete_success(&mut self, advice: Advice) {
        if !self.is_loading() {
            debug!("success completion ignored: no request in flight");
            return;
        }
        self.advice = Some(advice);
        self.usage_counter += 1;
        self.phase = Phase::Idle;
    }

    /// `Submitting -> Idle` with the fixed fallback advice. The counter is
    /// untouched. Ignored outside `Submitting`.
    pub fn complete_failure(&mut self) {
        if !self.is_loading() {
            debug!("failure completion ignored: no request in flight");
            return;
        }
        self.advice = Some(Advice {
            message: FALLBACK_MESSAGE.to_string(),
            risk_level: RISK_UNKNOWN.to_string(),
            suggested_stocks: Vec::new(),
        });
        self.phase = Phase::Idle;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one analysis exchange per accepted submission.
pub struct Consultant {
    state: SessionState,
    client: AdviceClient,
}

impl Consultant {
    pub fn new(client: AdviceClient) -> Self {
        Self {
            state: SessionState::new(),
            client,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_portfolio(&mut self, text: impl Into<String>) {
        self.state.set_portfolio(text);
    }

    /// Validate, send one request, and resolve it to advice.
    ///
    /// A rejection is returned synchronously before anything is sent; once
    /// a submission is accepted it always resolves, to real advice or to
    /// the fallback. Service errors are logged here and never escape.
    pub async fn submit(&mut self) -> Result<(), SubmitRejection> {
        let request = self.state.begin_submission()?;
        info!("analyzing portfolio ({} bytes)", request.len());

        match self.client.analyze(&request).await {
            Ok(advice) => {
                info!("analysis complete, risk level: {}", advice.risk_level);
                debug!(
                    "advice payload: {}",
                    serde_json::to_string(&advice).unwrap_or_default()
                );
                self.state.complete_success(advice);
            }
            Err(e) => {
                error!("portfolio analysis failed: {}", e);
                self.state.complete_failure();
            }
        }
        Ok(())
    }
}
