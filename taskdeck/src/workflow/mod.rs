//! Guided requirement elicitation workflow.
//!
//! A four-stage conversational state machine that collects a free-text
//! project description, accumulates answers to generated clarification
//! questions, produces a requirements document, and supports iterative
//! revision before the document is confirmed for downstream processing.
//!
//! The machine never generates anything itself: generation-triggering
//! transitions only raise an in-flight flag, and the external generation
//! collaborator writes results back through
//! [`RequirementSession::apply_generated_questions`] and
//! [`RequirementSession::apply_generated_document`].

mod machine;
mod session;

pub use session::{Question, RequirementSession, WorkflowStage};
