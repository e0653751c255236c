mod state;
mod workflow;

// Public API of the rating subsystem.
pub use crate::error::WorkflowError;
pub use state::SessionState;
pub use workflow::{
    AdvanceOutcome, LoadOutcome, LoadTicket, PendingSubmit, RatingWorkflow, ScheduledAdvance,
    SubmitConfirmation, WorkflowState,
};
