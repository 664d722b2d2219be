//! # survey-builder
//!
//! Build surveys and collect answers to them. UI-agnostic.
//!
//! This crate provides the state machines a survey UI drives:
//! - `EditorController` - add, edit, delete and reorder questions, edit the
//!   survey settings, and publish
//! - `ResponseForm` - answer a published survey and submit the responses
//! - `IntakeWizard` - the step-by-step questionnaire that seeds a new survey
//!
//! ## Usage
//!
//! ```rust
//! use survey_builder::{
//!     Answer, Draft, EditorController, QuestionType, RecordingBackend, SurveySettings,
//! };
//!
//! let mut editor = EditorController::new(SurveySettings::new("Team lunch"), Vec::new());
//!
//! let where_to = editor
//!     .commit_new_question(
//!         Draft::new()
//!             .with_prompt("Where should we go?")
//!             .with_options(["Pizza", "Sushi"])
//!             .with_required(true),
//!     )
//!     .unwrap();
//! editor.add_question_of_type(QuestionType::Rating);
//!
//! let mut form = editor.preview();
//! let mut backend = RecordingBackend::new();
//! form.set_answer(&where_to, Answer::Choice("Sushi".into()));
//! form.submit(&mut backend).unwrap();
//!
//! editor.publish(&mut backend).unwrap();
//! ```
//!
//! ## Stale references
//!
//! Every operation that names a question by id tolerates ids that no longer
//! exist: deletes, moves and answers become no-ops, and an edit commit
//! reports `EditorError::StaleEdit` without changing anything.
//!
//! ## Backends
//!
//! Publishing and response collection go through `PublishBackend` and
//! `CollectionBackend`. `RecordingBackend` implements both for tests.

// Re-export all types from survey-builder-types
pub use survey_builder_types::*;

mod editor;
pub use editor::{EditorController, EditorState, SurveyOverview};

mod form;
pub use form::{FormState, ResponseForm};

mod intake;
pub use intake::{IntakeAnswers, IntakeError, IntakeStep, IntakeWizard, SurveyDepth};

// Recording backend for testing without real services
mod test_backend;
pub use test_backend::{RecordingBackend, RecordingBackendError};
