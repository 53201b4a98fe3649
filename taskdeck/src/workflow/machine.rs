//! Workflow transition entry points.
//!
//! One method per trigger. Every guard failure returns a
//! [`TransitionError`] whose `Display` text is the user-visible validation
//! message, and leaves the session exactly as it was. Generation-triggering
//! transitions only raise an in-flight flag; results arrive later through
//! the `apply_generated_*` write-backs.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::TransitionError;
use crate::workflow::session::{Question, RequirementSession, WorkflowStage};

fn reject(err: TransitionError) -> Result<(), TransitionError> {
    debug!(rejection = %err, "workflow trigger rejected");
    Err(err)
}

impl RequirementSession {
    fn guard_stage(
        &self,
        trigger: &'static str,
        expected: WorkflowStage,
    ) -> Result<(), TransitionError> {
        if self.is_confirmed() {
            return reject(TransitionError::AlreadyConfirmed { trigger });
        }
        if self.stage != expected {
            return reject(TransitionError::WrongStage {
                trigger,
                stage: self.stage,
            });
        }
        Ok(())
    }

    /// Input → Questions: request clarification questions.
    ///
    /// Clears any prior questions, answers, summary and confirmation, then
    /// marks question generation as in flight.
    pub fn generate_questions(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("generate questions", WorkflowStage::Input)?;
        let trimmed = self.initial_text.trim();
        if trimmed.is_empty() {
            return reject(TransitionError::EmptyInitialText);
        }

        self.initial_text = trimmed.to_string();
        self.questions.clear();
        self.answers.clear();
        self.summary_document.clear();
        self.edit_feedback.clear();
        self.confirmed_document = None;
        self.requirements_generating = false;
        self.editing_in_progress = false;
        self.questions_generating = true;
        self.stage = WorkflowStage::Questions;
        Ok(())
    }

    /// Input → Input: confirm the raw description as the final document.
    ///
    /// The stage does not move; confirmation here is a flag, not a stage.
    pub fn skip_to_document(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("skip to document", WorkflowStage::Input)?;
        let trimmed = self.initial_text.trim();
        if trimmed.is_empty() {
            return reject(TransitionError::EmptyInitialText);
        }

        let doc = trimmed.to_string();
        self.initial_text = doc.clone();
        self.confirmed_document = Some(doc);
        Ok(())
    }

    /// Questions → Summary: request a document from the given answers.
    ///
    /// Snapshots only non-blank drafts, keyed by question id; drafts for
    /// unknown question ids are ignored.
    pub fn generate_document(
        &mut self,
        drafts: &HashMap<String, String>,
    ) -> Result<(), TransitionError> {
        self.guard_stage("generate document", WorkflowStage::Questions)?;
        if self.questions.is_empty() {
            return reject(TransitionError::NoQuestions);
        }

        let mut answers = HashMap::new();
        for question in &self.questions {
            if let Some(draft) = drafts.get(&question.id) {
                let trimmed = draft.trim();
                if !trimmed.is_empty() {
                    answers.insert(question.id.clone(), trimmed.to_string());
                }
            }
        }

        self.answers = answers;
        self.begin_document_generation();
        Ok(())
    }

    /// Questions → Summary: request a document without any answers.
    pub fn generate_document_without_answers(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("generate document", WorkflowStage::Questions)?;
        if self.questions.is_empty() {
            return reject(TransitionError::NoQuestions);
        }

        self.answers.clear();
        self.begin_document_generation();
        Ok(())
    }

    fn begin_document_generation(&mut self) {
        self.summary_document.clear();
        self.confirmed_document = None;
        self.requirements_generating = true;
        self.stage = WorkflowStage::Summary;
    }

    /// Questions → Input: abandon the questions and start over.
    ///
    /// Full reset preserving the project description.
    pub fn back_to_input(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("back to input", WorkflowStage::Questions)?;
        self.reset(true);
        Ok(())
    }

    /// Summary: confirm the generated document as final.
    ///
    /// Falls back to the project description when the summary is empty;
    /// rejects when both are blank. Idempotent once confirmed.
    pub fn confirm(&mut self) -> Result<(), TransitionError> {
        if self.is_confirmed() {
            return Ok(());
        }
        self.guard_stage("confirm", WorkflowStage::Summary)?;

        let summary = self.summary_document.trim();
        let doc = if summary.is_empty() {
            self.initial_text.trim()
        } else {
            summary
        };
        if doc.is_empty() {
            return reject(TransitionError::EmptyDocument);
        }

        self.confirmed_document = Some(doc.to_string());
        Ok(())
    }

    /// Summary → Editing: open a revision request.
    pub fn request_edit(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("request edit", WorkflowStage::Summary)?;
        if self.summary_document.trim().is_empty() {
            return reject(TransitionError::EmptyDocument);
        }

        self.edit_feedback.clear();
        self.stage = WorkflowStage::Editing;
        Ok(())
    }

    /// Summary → Input: discard the document and start over.
    ///
    /// Full reset preserving the project description.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("restart", WorkflowStage::Summary)?;
        self.reset(true);
        Ok(())
    }

    /// Editing: submit a revision request.
    ///
    /// Stores the trimmed feedback and marks the regeneration in flight;
    /// the stage does not move. The regenerated document arrives through
    /// [`RequirementSession::apply_generated_document`].
    pub fn submit_edit(&mut self, feedback: &str) -> Result<(), TransitionError> {
        self.guard_stage("submit edit", WorkflowStage::Editing)?;
        let trimmed = feedback.trim();
        if trimmed.is_empty() {
            return reject(TransitionError::EmptyFeedback);
        }

        self.edit_feedback = trimmed.to_string();
        self.editing_in_progress = true;
        Ok(())
    }

    /// Editing → Summary: abandon the revision request.
    pub fn back_to_summary(&mut self) -> Result<(), TransitionError> {
        self.guard_stage("back to summary", WorkflowStage::Editing)?;
        self.edit_feedback.clear();
        self.stage = WorkflowStage::Summary;
        Ok(())
    }

    /// Write-back for the generation collaborator: stores the generated
    /// questions and clears the in-flight flag.
    pub fn apply_generated_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.questions_generating = false;
    }

    /// Write-back for the generation collaborator: stores the generated
    /// (or regenerated) document and clears the in-flight flags.
    pub fn apply_generated_document(&mut self, document: impl Into<String>) {
        self.summary_document = document.into();
        self.requirements_generating = false;
        self.editing_in_progress = false;
    }
}
