//! The wizard step controller.
//!
//! Three steps, exactly one visible at a time:
//!
//! - `Input → Questions` on form submission, after a successful chart call.
//! - `Questions → Input` on back; no network call, state untouched.
//! - `Questions → Result` on result request, after a successful result call.
//! - `Result → Input` on restart; state and all regions cleared.
//!
//! Runs on a single UI thread. Actions suspend on the gateway without
//! blocking, so another action may run while one is pending. Each control is
//! disabled while its own request is in flight, and every step switch or
//! reset advances a generation counter: a response that resolves under a
//! different generation than it was issued under is discarded.

use std::cell::{Cell, Ref, RefCell};
use std::sync::Arc;

use mingpan_chart::application::renderers::{render_elements, render_pillars, render_questions};
use mingpan_chart::domain::requests::{ChartRequest, ChartResponse};
use mingpan_core::error::WizardError;
use mingpan_core::gateway::JsonGateway;
use mingpan_core::view::{Control, Field, Region, Step, WizardView};
use mingpan_report::application::renderer::render_result;
use mingpan_report::domain::report::ResultPayload;
use mingpan_report::domain::requests::ResultRequest;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

use super::answers::collect_answers;
use super::busy::BusyGuard;
use crate::config::WizardConfig;
use crate::domain::state::WizardState;

const CHART_FAILED: &str = "排盤失敗：";
const RESULT_FAILED: &str = "生成失敗：";
const MISSING_SESSION: &str = "找不到 session，請重新排盤。";

/// How an action ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The transition happened.
    Completed,
    /// The triggering control was already busy; nothing was done.
    Busy,
    /// The response arrived after the user moved on and was discarded.
    Superseded,
}

/// Drives the wizard over a view and a gateway.
pub struct WizardController {
    view: Arc<dyn WizardView>,
    gateway: Arc<dyn JsonGateway>,
    config: WizardConfig,
    state: RefCell<WizardState>,
    step: Cell<Step>,
    generation: Cell<u64>,
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("step", &self.step.get())
            .field("generation", &self.generation.get())
            .finish_non_exhaustive()
    }
}

impl WizardController {
    /// Creates a controller on the input step with an empty state.
    #[must_use]
    pub fn new(
        view: Arc<dyn WizardView>,
        gateway: Arc<dyn JsonGateway>,
        config: WizardConfig,
    ) -> Self {
        Self {
            view,
            gateway,
            config,
            state: RefCell::new(WizardState::default()),
            step: Cell::new(Step::Input),
            generation: Cell::new(0),
        }
    }

    /// The visible step.
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.step.get()
    }

    /// Borrows the wizard state. Do not hold the borrow across an action.
    #[must_use]
    pub fn state(&self) -> Ref<'_, WizardState> {
        self.state.borrow()
    }

    /// Submits the birth-data form: `Input → Questions`.
    ///
    /// # Errors
    ///
    /// Returns the gateway or payload error after notifying the user; the
    /// wizard stays on the input step.
    #[instrument(skip(self), fields(correlation_id = %Uuid::new_v4()))]
    pub async fn submit_birth_data(&self) -> Result<ActionOutcome, WizardError> {
        if !self.view.is_control_enabled(Control::SubmitChart) {
            debug!("chart request already in flight");
            return Ok(ActionOutcome::Busy);
        }
        let _busy = BusyGuard::engage(
            self.view.as_ref(),
            Control::SubmitChart,
            &self.config.chart_busy_label,
        );
        let issued = self.generation.get();
        let request = self.read_birth_data();

        info!(birth_date = %request.birth_date, "requesting chart");
        let result: Result<ChartResponse, WizardError> =
            self.post(&self.config.chart_endpoint, &request).await;

        if self.generation.get() != issued {
            warn!("discarding chart response issued under an earlier generation");
            return Ok(ActionOutcome::Superseded);
        }

        match result {
            Ok(response) => {
                info!(
                    session_id = %response.session_id,
                    questions = response.verification_questions.len(),
                    "chart received"
                );
                self.apply_chart(response);
                Ok(ActionOutcome::Completed)
            }
            Err(err) => {
                warn!(error = %err, "chart request failed");
                self.view.notify(&format!("{CHART_FAILED}{err}"));
                Err(err)
            }
        }
    }

    /// Returns to the form without touching state: `Questions → Input`.
    #[instrument(skip(self))]
    pub fn back(&self) {
        info!("back to input");
        self.show(Step::Input);
    }

    /// Requests the report for the current answers: `Questions → Result`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MissingSession` without any network call when no
    /// chart session exists, or the gateway or payload error. Either way the
    /// user has already been notified and the visible step is unchanged.
    #[instrument(
        skip(self),
        fields(correlation_id = %Uuid::new_v4(), session_id = tracing::field::Empty)
    )]
    pub async fn request_result(&self) -> Result<ActionOutcome, WizardError> {
        if !self.view.is_control_enabled(Control::RequestResult) {
            debug!("result request already in flight");
            return Ok(ActionOutcome::Busy);
        }
        let Some(session_id) = self.state.borrow().session_id().map(str::to_owned) else {
            warn!("result requested without a session");
            self.view.notify(MISSING_SESSION);
            return Err(WizardError::MissingSession);
        };
        Span::current().record("session_id", session_id.as_str());
        let _busy = BusyGuard::engage(
            self.view.as_ref(),
            Control::RequestResult,
            &self.config.result_busy_label,
        );
        let issued = self.generation.get();
        let answers = collect_answers(self.view.as_ref(), self.state.borrow().questions());

        info!(%session_id, answered = answers.len(), "requesting result");
        let request = ResultRequest {
            session_id,
            answers,
        };
        let result: Result<ResultPayload, WizardError> =
            self.post(&self.config.result_endpoint, &request).await;

        if self.generation.get() != issued {
            warn!("discarding result response issued under an earlier generation");
            return Ok(ActionOutcome::Superseded);
        }

        match result {
            Ok(payload) => {
                info!(
                    matched = payload.past_review.matched,
                    total = payload.past_review.total,
                    "result received"
                );
                self.view.set_region(Region::Result, render_result(&payload));
                self.show(Step::Result);
                Ok(ActionOutcome::Completed)
            }
            Err(err) => {
                warn!(error = %err, "result request failed");
                self.view.notify(&format!("{RESULT_FAILED}{err}"));
                Err(err)
            }
        }
    }

    /// Clears state and every region: `Result → Input`.
    #[instrument(skip(self))]
    pub fn restart(&self) {
        info!("restarting wizard");
        self.state.borrow_mut().reset();
        for region in Region::ALL {
            self.view.set_region(region, String::new());
        }
        self.show(Step::Input);
    }

    fn read_birth_data(&self) -> ChartRequest {
        let value = |field: Field| self.view.field_value(field).unwrap_or_default();
        ChartRequest {
            birth_date: value(Field::BirthDate),
            birth_time: value(Field::BirthTime),
            gender: value(Field::Gender),
            city: value(Field::City),
        }
    }

    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, WizardError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(WizardError::Payload)?;
        debug!(%url, "posting");
        let response = self.gateway.post_json(url, &body).await?;
        serde_json::from_value(response).map_err(WizardError::Payload)
    }

    fn apply_chart(&self, response: ChartResponse) {
        let pillars = render_pillars(&response.chart.pillars);
        let elements = render_elements(&response.chart.five_elements);
        let questions = render_questions(&response.verification_questions);

        self.state.borrow_mut().populate(response);

        self.view.set_region(Region::Pillars, pillars);
        self.view.set_region(Region::Elements, elements);
        self.view.set_region(Region::Questions, questions);
        self.show(Step::Questions);
    }

    fn show(&self, step: Step) {
        for candidate in Step::ALL {
            self.view.set_step_visible(candidate, candidate == step);
        }
        self.step.set(step);
        self.generation.set(self.generation.get() + 1);
    }
}
