//! Error types for the taskdeck console core.
//!
//! Every failure in this crate is recoverable: guarded transitions are
//! rejected without mutating the session, log-file problems degrade to a
//! visible message for the current tick, and malformed log lines fall back
//! to raw text. Nothing here aborts the process.

use thiserror::Error;

use crate::workflow::WorkflowStage;

/// The main error type for taskdeck operations.
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// A workflow transition was rejected.
    #[error("{0}")]
    Transition(#[from] TransitionError),

    /// IO error while reading logs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error raised when a workflow trigger is rejected by a guard.
///
/// The `Display` text of each variant is the user-visible validation
/// message; the session is left exactly as it was before the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The trigger is not valid from the session's current stage.
    #[error("'{trigger}' is not available from the {stage} stage")]
    WrongStage {
        /// The rejected trigger name.
        trigger: &'static str,
        /// The stage the session was in.
        stage: WorkflowStage,
    },

    /// The project description is required but empty.
    #[error("Enter your project requirements first.")]
    EmptyInitialText,

    /// No guided questions are available yet.
    #[error("Guided questions have not been generated yet.")]
    NoQuestions,

    /// No requirements document is available to act on.
    #[error("No requirements document is available yet.")]
    EmptyDocument,

    /// The edit request text is required but empty.
    #[error("Describe the change you are requesting.")]
    EmptyFeedback,

    /// The session is confirmed; only reset may change it.
    #[error("Requirements are already confirmed; reset the session to make changes")]
    AlreadyConfirmed {
        /// The rejected trigger name.
        trigger: &'static str,
    },
}

impl TransitionError {
    /// Returns the user-visible validation message for this rejection.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
