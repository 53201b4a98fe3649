//! Requirement session data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::utils::generate_uuid;

/// The stage of the guided requirement workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Collecting the free-text project description.
    Input,
    /// Answering generated clarification questions.
    Questions,
    /// Reviewing the generated requirements document.
    Summary,
    /// Requesting changes to the requirements document.
    Editing,
}

impl Default for WorkflowStage {
    fn default() -> Self {
        Self::Input
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Questions => write!(f, "questions"),
            Self::Summary => write!(f, "summary"),
            Self::Editing => write!(f, "editing"),
        }
    }
}

impl WorkflowStage {
    /// Returns the caption the console shows for this stage.
    #[must_use]
    pub fn step_title(&self) -> &'static str {
        match self {
            Self::Input => "Step 1 · Describe requirements",
            Self::Questions => "Step 2 · Answer guided questions",
            Self::Summary => "Step 3 · Review requirements document",
            Self::Editing => "Step 4 · Request changes",
        }
    }
}

/// A clarification question produced by the generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier used to key answers.
    pub id: String,
    /// The question text shown to the user.
    pub text: String,
    /// Optional topic category (e.g. "performance").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional importance label (e.g. "high").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,
    /// Optional answering hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    /// Creates a new question with only the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: None,
            importance: None,
            hint: None,
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the importance label.
    #[must_use]
    pub fn with_importance(mut self, importance: impl Into<String>) -> Self {
        self.importance = Some(importance.into());
        self
    }

    /// Sets the answering hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// All state owned by one guided requirement session.
///
/// Every recognized field is enumerated and defaulted here; the transition
/// methods in this module are the only mutators. The session is created in
/// the [`WorkflowStage::Input`] stage and destroyed or recycled via
/// [`RequirementSession::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSession {
    /// Identity of this session, stable across resets.
    pub session_id: Uuid,
    /// Current workflow stage.
    pub stage: WorkflowStage,
    /// Free-text project description.
    pub initial_text: String,
    /// Generated clarification questions, empty until generated.
    pub questions: Vec<Question>,
    /// Answers keyed by question id; only non-blank answers are kept.
    pub answers: HashMap<String, String>,
    /// Generated requirements document, empty until produced.
    pub summary_document: String,
    /// Pending revision request text.
    pub edit_feedback: String,
    /// Final confirmed document; immutable until an explicit reset.
    pub confirmed_document: Option<String>,
    /// Question generation has been requested and not yet applied.
    pub questions_generating: bool,
    /// Document generation has been requested and not yet applied.
    pub requirements_generating: bool,
    /// An edit-driven regeneration has been requested and not yet applied.
    pub editing_in_progress: bool,
}

impl Default for RequirementSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementSession {
    /// Creates a fresh session in the input stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: generate_uuid(),
            stage: WorkflowStage::default(),
            initial_text: String::new(),
            questions: Vec::new(),
            answers: HashMap::new(),
            summary_document: String::new(),
            edit_feedback: String::new(),
            confirmed_document: None,
            questions_generating: false,
            requirements_generating: false,
            editing_in_progress: false,
        }
    }

    /// Creates a session pre-filled with a project description.
    #[must_use]
    pub fn with_initial_text(text: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.initial_text = text.into();
        session
    }

    /// Returns true if the session has a confirmed document.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_document.is_some()
    }

    /// Returns true if any generation step is in flight.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.questions_generating || self.requirements_generating || self.editing_in_progress
    }

    /// Resets the session back to the input stage.
    ///
    /// Clears every field, including the confirmed document, and is the
    /// only way to leave the confirmed state. The session keeps its
    /// identity. When `preserve_initial` is set, the project description
    /// survives the reset.
    pub fn reset(&mut self, preserve_initial: bool) {
        let initial_text = if preserve_initial {
            std::mem::take(&mut self.initial_text)
        } else {
            String::new()
        };

        let session_id = self.session_id;
        *self = Self::new();
        self.session_id = session_id;
        self.initial_text = initial_text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_display() {
        assert_eq!(WorkflowStage::Input.to_string(), "input");
        assert_eq!(WorkflowStage::Questions.to_string(), "questions");
        assert_eq!(WorkflowStage::Summary.to_string(), "summary");
        assert_eq!(WorkflowStage::Editing.to_string(), "editing");
    }

    #[test]
    fn test_stage_serialize_snake_case() {
        let json = serde_json::to_string(&WorkflowStage::Questions).unwrap();
        assert_eq!(json, r#""questions""#);
    }

    #[test]
    fn test_step_titles_are_ordered() {
        assert!(WorkflowStage::Input.step_title().starts_with("Step 1"));
        assert!(WorkflowStage::Editing.step_title().starts_with("Step 4"));
    }

    #[test]
    fn test_question_builder() {
        let q = Question::new("q1", "What is the target latency?")
            .with_category("performance")
            .with_importance("high")
            .with_hint("Think p99, not average");

        assert_eq!(q.id, "q1");
        assert_eq!(q.category.as_deref(), Some("performance"));
        assert_eq!(q.importance.as_deref(), Some("high"));
        assert_eq!(q.hint.as_deref(), Some("Think p99, not average"));
    }

    #[test]
    fn test_question_optional_fields_omitted_in_json() {
        let q = Question::new("q1", "text");
        let json = serde_json::to_string(&q).unwrap();
        assert!(!json.contains("category"));
        assert!(!json.contains("hint"));
    }

    #[test]
    fn test_new_session_defaults() {
        let session = RequirementSession::new();
        assert_eq!(session.stage, WorkflowStage::Input);
        assert!(session.initial_text.is_empty());
        assert!(session.questions.is_empty());
        assert!(session.answers.is_empty());
        assert!(session.summary_document.is_empty());
        assert!(session.edit_feedback.is_empty());
        assert!(session.confirmed_document.is_none());
        assert!(!session.is_generating());
        assert!(!session.is_confirmed());
    }

    #[test]
    fn test_reset_preserving_initial_text() {
        let mut session = RequirementSession::with_initial_text("build a cache");
        session.stage = WorkflowStage::Summary;
        session.summary_document = "doc".to_string();
        session.confirmed_document = Some("doc".to_string());
        session.requirements_generating = true;

        let id = session.session_id;
        session.reset(true);

        assert_eq!(session.session_id, id);
        assert_eq!(session.initial_text, "build a cache");
        assert_eq!(session.stage, WorkflowStage::Input);
        assert!(session.summary_document.is_empty());
        assert!(session.confirmed_document.is_none());
        assert!(!session.is_generating());
    }

    #[test]
    fn test_reset_clearing_initial_text() {
        let mut session = RequirementSession::with_initial_text("build a cache");
        session.reset(false);
        assert!(session.initial_text.is_empty());
    }
}
