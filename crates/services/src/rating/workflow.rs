use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use rate_core::model::{BaseRating, Profile, RatingPresets, RatingSubmission, TagName};

use super::state::SessionState;
use crate::api::RatingApi;
use crate::config::DEFAULT_ADVANCE_DELAY;
use crate::error::{RequestError, WorkflowError};

/// Where the per-profile rating flow currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    ProfileLoaded,
    Submitting,
}

/// Handle for an in-flight profile load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// Whether a finished load replaced the current profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was requested after this one; the result was dropped.
    Stale,
}

/// A rating that has left Session State and awaits the backend's answer.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct PendingSubmit {
    submission: RatingSubmission,
}

impl PendingSubmit {
    #[must_use]
    pub fn submission(&self) -> &RatingSubmission {
        &self.submission
    }
}

/// Load of the next profile, due `delay` after a successful submit.
///
/// Only runs if no other load was requested in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ScheduledAdvance {
    generation: u64,
    delay: Duration,
}

impl ScheduledAdvance {
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Loaded,
    Suppressed,
}

/// Outcome of an accepted rating.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitConfirmation {
    pub submission: RatingSubmission,
    pub next: ScheduledAdvance,
}

impl SubmitConfirmation {
    #[must_use]
    pub fn final_score(&self) -> f64 {
        self.submission.score
    }
}

/// Drives the load → rate → submit → advance cycle for one user.
///
/// The workflow owns the session; every mutation goes through it.
pub struct RatingWorkflow {
    api: Arc<dyn RatingApi>,
    session: SessionState,
    state: WorkflowState,
    presets: RatingPresets,
    advance_delay: Duration,
    load_generation: u64,
}

impl RatingWorkflow {
    #[must_use]
    pub fn new(api: Arc<dyn RatingApi>) -> Self {
        Self {
            api,
            session: SessionState::new(),
            state: WorkflowState::Idle,
            presets: RatingPresets::default(),
            advance_delay: DEFAULT_ADVANCE_DELAY,
            load_generation: 0,
        }
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    #[must_use]
    pub fn with_presets(mut self, presets: RatingPresets) -> Self {
        self.presets = presets;
        self
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn presets(&self) -> &RatingPresets {
        &self.presets
    }

    #[must_use]
    pub fn current_profile(&self) -> Option<&Profile> {
        self.session.current_profile()
    }

    //
    // ─── LOADING ───────────────────────────────────────────────────────────────
    //

    /// Start a profile load. Any earlier load or scheduled advance goes stale.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::SubmitInFlight` while a rating is being submitted.
    pub fn begin_load(&mut self) -> Result<LoadTicket, WorkflowError> {
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowError::SubmitInFlight);
        }
        self.load_generation += 1;
        Ok(LoadTicket {
            generation: self.load_generation,
        })
    }

    /// Apply the result of a load started with [`RatingWorkflow::begin_load`].
    ///
    /// On failure nothing changes: the previous profile (if any) stays.
    /// A superseded load is `Stale` whether it succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Request` when the current load failed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Profile, RequestError>,
    ) -> Result<LoadOutcome, WorkflowError> {
        if ticket.generation != self.load_generation {
            debug!(
                ticket = ticket.generation,
                current = self.load_generation,
                failed = result.is_err(),
                "dropping stale profile load"
            );
            return Ok(LoadOutcome::Stale);
        }

        let profile = result.inspect_err(|err| warn!(error = %err, "profile load failed"))?;

        debug!(profile_id = %profile.id(), "profile loaded");
        self.session.load(profile);
        self.state = WorkflowState::ProfileLoaded;
        Ok(LoadOutcome::Applied)
    }

    /// Fetch a random profile and make it current, resetting tags and rating.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` if a submit is in flight or the request fails.
    pub async fn load_next_profile(&mut self) -> Result<&Profile, WorkflowError> {
        let ticket = self.begin_load()?;
        let api = Arc::clone(&self.api);
        let result = api.random_profile().await;
        self.finish_load(ticket, result)?;
        self.session.current_profile().ok_or(WorkflowError::NoProfile)
    }

    //
    // ─── SESSION MUTATIONS ─────────────────────────────────────────────────────
    //

    /// Input is accepted only for a loaded profile that is not being sent.
    fn require_editable(&self) -> Result<(), WorkflowError> {
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowError::SubmitInFlight);
        }
        if self.session.current_profile().is_none() {
            return Err(WorkflowError::NoProfile);
        }
        Ok(())
    }

    /// Select or deselect a tag. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoProfile` when nothing is loaded and
    /// `WorkflowError::SubmitInFlight` while a rating is being sent.
    pub fn toggle_tag(&mut self, tag: TagName) -> Result<bool, WorkflowError> {
        self.require_editable()?;
        Ok(self.session.toggle_tag(tag))
    }

    /// Continuous input, clamped to `[1, 10]`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoProfile` when nothing is loaded,
    /// `WorkflowError::SubmitInFlight` while a rating is being sent and
    /// `WorkflowError::Rating` for non-finite input.
    pub fn set_base_rating(&mut self, raw: f64) -> Result<BaseRating, WorkflowError> {
        self.require_editable()?;
        let rating = BaseRating::clamped(raw)?;
        self.session.set_base_rating(rating);
        Ok(rating)
    }

    /// Snap to a quick-pick value and mark that button as active.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NoProfile` when nothing is loaded,
    /// `WorkflowError::SubmitInFlight` while a rating is being sent and
    /// `WorkflowError::UnknownPreset` for an out-of-range index.
    pub fn select_preset(&mut self, index: usize) -> Result<BaseRating, WorkflowError> {
        self.require_editable()?;
        let rating = self
            .presets
            .get(index)
            .ok_or(WorkflowError::UnknownPreset(index))?;
        self.session.select_preset(index, rating);
        Ok(rating)
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::NoProfile` when nothing is loaded and
    /// `WorkflowError::SubmitInFlight` while a rating is being sent.
    pub fn thumbs_up(&mut self) -> Result<BaseRating, WorkflowError> {
        self.require_editable()?;
        let rating = self.session.base_rating().step_up();
        self.session.set_base_rating(rating);
        Ok(rating)
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::NoProfile` when nothing is loaded and
    /// `WorkflowError::SubmitInFlight` while a rating is being sent.
    pub fn thumbs_down(&mut self) -> Result<BaseRating, WorkflowError> {
        self.require_editable()?;
        let rating = self.session.base_rating().step_down();
        self.session.set_base_rating(rating);
        Ok(rating)
    }

    //
    // ─── SUBMITTING ────────────────────────────────────────────────────────────
    //

    /// Build the submission for the current profile and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::SubmitInFlight` if a submission is pending and
    /// `WorkflowError::NoProfile` if nothing is loaded. State is untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, WorkflowError> {
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowError::SubmitInFlight);
        }
        let profile = self
            .session
            .current_profile()
            .ok_or(WorkflowError::NoProfile)?;

        let submission = RatingSubmission::build(
            profile.id().clone(),
            self.session.base_rating(),
            self.session.selected_tags(),
        );
        self.state = WorkflowState::Submitting;
        Ok(PendingSubmit { submission })
    }

    /// Leave `Submitting`. The profile stays current either way.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Request` when the submission failed.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit,
        result: Result<(), RequestError>,
    ) -> Result<SubmitConfirmation, WorkflowError> {
        self.state = WorkflowState::ProfileLoaded;
        let submission = pending.submission;

        if let Err(err) = result {
            warn!(profile_id = %submission.profile_id, error = %err, "rating submission failed");
            return Err(err.into());
        }

        info!(
            profile_id = %submission.profile_id,
            score = submission.score,
            bonus = submission.bonus,
            "rating submitted"
        );
        Ok(SubmitConfirmation {
            submission,
            next: ScheduledAdvance {
                generation: self.load_generation,
                delay: self.advance_delay,
            },
        })
    }

    /// Compute the final score, send it and schedule the next profile.
    ///
    /// # Errors
    ///
    /// Returns precondition errors without any network call, or
    /// `WorkflowError::Request` if the backend rejected the rating.
    pub async fn submit(&mut self) -> Result<SubmitConfirmation, WorkflowError> {
        let pending = self.begin_submit()?;
        let api = Arc::clone(&self.api);
        let result = api.rate(pending.submission()).await;
        self.finish_submit(pending, result)
    }

    //
    // ─── AUTO-ADVANCE ──────────────────────────────────────────────────────────
    //

    /// False once another load has been requested since `advance` was issued.
    #[must_use]
    pub fn is_advance_current(&self, advance: &ScheduledAdvance) -> bool {
        advance.generation == self.load_generation && self.state != WorkflowState::Submitting
    }

    /// Run a scheduled advance whose delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Request` if the load itself fails.
    pub async fn run_scheduled_advance(
        &mut self,
        advance: ScheduledAdvance,
    ) -> Result<AdvanceOutcome, WorkflowError> {
        if !self.is_advance_current(&advance) {
            debug!("scheduled advance superseded by a newer load");
            return Ok(AdvanceOutcome::Suppressed);
        }
        self.load_next_profile().await?;
        Ok(AdvanceOutcome::Loaded)
    }
}
