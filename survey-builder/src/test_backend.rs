//! Recording backend for testing editors and forms without a real service.
//!
//! `RecordingBackend` implements both `PublishBackend` and
//! `CollectionBackend`. It keeps every survey and every set of responses it
//! accepted, or rejects everything with a fixed reason.
//!
//! # Example
//!
//! ```rust
//! use survey_builder::{EditorController, RecordingBackend, SurveySettings};
//!
//! let mut editor = EditorController::new(SurveySettings::new("Empty"), Vec::new());
//! let mut backend = RecordingBackend::new();
//!
//! editor.publish(&mut backend).unwrap();
//!
//! assert_eq!(backend.published()[0].settings.title, "Empty");
//! ```

use crate::{CollectionBackend, PublishBackend, Responses, SurveyDefinition};

/// A backend that records what it is handed.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    published: Vec<SurveyDefinition>,
    collected: Vec<Responses>,
    reject: Option<String>,
}

/// Error type for RecordingBackend.
#[derive(Debug, thiserror::Error)]
pub enum RecordingBackendError {
    #[error("{0}")]
    Rejected(String),
}

impl RecordingBackend {
    /// Create a backend that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every call with the given reason.
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject = Some(reason.into());
        self
    }

    /// Surveys accepted so far, oldest first.
    pub fn published(&self) -> &[SurveyDefinition] {
        &self.published
    }

    /// Response sets accepted so far, oldest first.
    pub fn collected(&self) -> &[Responses] {
        &self.collected
    }

    fn check(&self) -> Result<(), RecordingBackendError> {
        match &self.reject {
            Some(reason) => Err(RecordingBackendError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

impl PublishBackend for RecordingBackend {
    type Error = RecordingBackendError;

    fn publish(&mut self, survey: &SurveyDefinition) -> Result<(), Self::Error> {
        self.check()?;
        self.published.push(survey.clone());
        Ok(())
    }
}

impl CollectionBackend for RecordingBackend {
    type Error = RecordingBackendError;

    fn collect(
        &mut self,
        _survey: &SurveyDefinition,
        responses: &Responses,
    ) -> Result<(), Self::Error> {
        self.check()?;
        self.collected.push(responses.clone());
        Ok(())
    }
}
