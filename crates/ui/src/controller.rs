use std::sync::Arc;

use tracing::{debug, error, warn};

use rate_core::model::TagName;
use services::{
    AppServices, ClickTarget, HostShell, LeaderboardOverlay, QueryError, RatingApi,
    RatingWorkflow, ScheduledAdvance, WorkflowError, load_my_profile,
};

use crate::messages;
use crate::vm::{
    LeaderboardVm, ProfileCardVm, RatingPanelVm, default_tag_catalog, format_average,
    map_leaderboard, map_profile_card, map_rating_panel,
};

/// Everything the user can do on the rating screen.
#[derive(Clone, Debug, PartialEq)]
pub enum RaterIntent {
    LoadNext,
    ToggleTag(TagName),
    SetRating(f64),
    SelectPreset(usize),
    ThumbsUp,
    ThumbsDown,
    Submit,
    ShowMyProfile,
    OpenLeaderboard,
    CloseLeaderboard,
    ClickLeaderboard(ClickTarget),
}

/// Binds user intents to the rating workflow and query views, reporting
/// every failure through the host's alert primitive.
pub struct RaterController<H> {
    host: H,
    api: Arc<dyn RatingApi>,
    workflow: RatingWorkflow,
    leaderboard: LeaderboardOverlay,
    tag_catalog: Vec<TagName>,
}

impl<H: HostShell> RaterController<H> {
    #[must_use]
    pub fn new(services: &AppServices, host: H) -> Self {
        Self {
            host,
            api: services.api(),
            workflow: services.rating_workflow(),
            leaderboard: services.leaderboard_overlay(),
            tag_catalog: default_tag_catalog(),
        }
    }

    #[must_use]
    pub fn with_tag_catalog(mut self, catalog: Vec<TagName>) -> Self {
        self.tag_catalog = catalog;
        self
    }

    /// Prepare the host window and load the first profile.
    pub async fn start(&mut self) {
        self.host.expand();
        self.host.enable_closing_confirmation();
        self.load_next().await;
    }

    /// Handle one intent. A successful submit yields the advance to schedule.
    pub async fn dispatch(&mut self, intent: RaterIntent) -> Option<ScheduledAdvance> {
        match intent {
            RaterIntent::LoadNext => self.load_next().await,
            RaterIntent::Submit => return self.submit().await,
            RaterIntent::ToggleTag(tag) => {
                let result = self.workflow.toggle_tag(tag).map(|_| ());
                self.report_mutation(result);
            }
            RaterIntent::SetRating(raw) => {
                let result = self.workflow.set_base_rating(raw).map(|_| ());
                self.report_mutation(result);
            }
            RaterIntent::SelectPreset(index) => {
                let result = self.workflow.select_preset(index).map(|_| ());
                self.report_mutation(result);
            }
            RaterIntent::ThumbsUp => {
                let result = self.workflow.thumbs_up().map(|_| ());
                self.report_mutation(result);
            }
            RaterIntent::ThumbsDown => {
                let result = self.workflow.thumbs_down().map(|_| ());
                self.report_mutation(result);
            }
            RaterIntent::ShowMyProfile => self.show_my_profile().await,
            RaterIntent::OpenLeaderboard => self.open_leaderboard().await,
            RaterIntent::CloseLeaderboard => self.leaderboard.dismiss(),
            RaterIntent::ClickLeaderboard(target) => self.leaderboard.click(target),
        }
        None
    }

    /// Run an advance whose delay has elapsed.
    pub async fn advance(&mut self, advance: ScheduledAdvance) {
        if let Err(err) = self.workflow.run_scheduled_advance(advance).await {
            self.report_load_error(&err);
        }
    }

    async fn load_next(&mut self) {
        if let Err(err) = self.workflow.load_next_profile().await {
            self.report_load_error(&err);
        }
    }

    async fn submit(&mut self) -> Option<ScheduledAdvance> {
        match self.workflow.submit().await {
            Ok(confirmation) => {
                self.host
                    .show_alert(&messages::submit_success(confirmation.final_score()));
                Some(confirmation.next)
            }
            Err(WorkflowError::SubmitInFlight) => {
                debug!("ignoring submit while another is in flight");
                None
            }
            Err(WorkflowError::NoProfile) => {
                self.host.show_alert(messages::NO_PROFILE);
                None
            }
            Err(err) => {
                error!(error = %err, "rating failed");
                self.host.show_alert(messages::SUBMIT_FAILED);
                None
            }
        }
    }

    async fn show_my_profile(&mut self) {
        match load_my_profile(self.api.as_ref()).await {
            Ok(summary) => {
                let text = messages::my_profile_summary(
                    &format_average(summary.average_rating),
                    summary.total_ratings,
                );
                self.host.show_alert(&text);
            }
            Err(QueryError::NoPersonalProfile) => {
                self.host.show_alert(messages::MY_PROFILE_MISSING);
            }
            Err(err) => {
                error!(error = %err, "own profile failed");
                self.host.show_alert(messages::MY_PROFILE_FAILED);
            }
        }
    }

    async fn open_leaderboard(&mut self) {
        if let Err(err) = self.leaderboard.open(self.api.as_ref()).await {
            error!(error = %err, "top-5 failed");
            self.host.show_alert(messages::TOP_FAILED);
        }
    }

    fn report_load_error(&self, err: &WorkflowError) {
        match err {
            WorkflowError::SubmitInFlight => debug!("ignoring load while a rating is submitted"),
            _ => {
                error!(error = %err, "profile load failed");
                self.host.show_alert(messages::LOAD_FAILED);
            }
        }
    }

    fn report_mutation(&self, result: Result<(), WorkflowError>) {
        match result {
            Ok(()) => {}
            Err(WorkflowError::NoProfile) => self.host.show_alert(messages::NO_PROFILE),
            Err(err) => warn!(error = %err, "rating input rejected"),
        }
    }

    //
    // ─── VIEW MODELS ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn profile_card(&self) -> Option<ProfileCardVm> {
        self.workflow.current_profile().map(map_profile_card)
    }

    #[must_use]
    pub fn rating_panel(&self) -> RatingPanelVm {
        map_rating_panel(
            self.workflow.session(),
            self.workflow.presets(),
            &self.tag_catalog,
            self.workflow.state(),
        )
    }

    /// `None` while the overlay is closed.
    #[must_use]
    pub fn leaderboard(&self) -> Option<LeaderboardVm> {
        self.leaderboard.leaderboard().map(map_leaderboard)
    }

    #[must_use]
    pub fn tag_catalog(&self) -> &[TagName] {
        &self.tag_catalog
    }

    #[must_use]
    pub fn workflow(&self) -> &RatingWorkflow {
        &self.workflow
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}
