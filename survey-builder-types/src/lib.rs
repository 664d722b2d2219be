//! Core types for the survey-builder crate.
//!
//! This crate provides the foundational types for building and answering surveys:
//! - `Question`, `QuestionKind` and `QuestionType` - Individual questions and their types
//! - `QuestionList` - The ordered, editable collection of questions
//! - `Draft` and `QuestionPatch` - Uncommitted questions and partial updates
//! - `SurveySettings` and `SurveyDefinition` - Survey-wide settings and the published pair
//! - `Answer` and `Responses` - Collected answers keyed by `QuestionId`
//! - `PublishBackend` and `CollectionBackend` traits - The external collaborators

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::{Answer, RATING_MAX, RATING_MIN};

mod responses;
pub use responses::{ResponseError, Responses};

mod question;
pub use question::{ChoiceQuestion, Question, QuestionKind, QuestionPatch, QuestionType};

mod question_list;
pub use question_list::{Direction, QuestionList};

mod draft;
pub use draft::Draft;

mod settings;
pub use settings::{SettingsPatch, SurveySettings};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::{EditorError, FormError, InvalidQuestion, ValidationIssue};

mod traits;
pub use traits::{CollectionBackend, PublishBackend};
