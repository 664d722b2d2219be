use crate::{Responses, SurveyDefinition};

/// The collaborator that receives a validated survey when the editor publishes.
///
/// Implementations decide what publishing means (persisting, generating a
/// share link, ...). The editor only looks at whether the call succeeded; an
/// error is surfaced to the caller as the rejection reason, uninterpreted.
pub trait PublishBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Accept or reject a survey.
    ///
    /// Only called with surveys whose questions all passed validation.
    fn publish(&mut self, survey: &SurveyDefinition) -> Result<(), Self::Error>;
}

/// The collaborator that receives a respondent's finalized answers.
pub trait CollectionBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Accept or reject a set of responses to `survey`.
    ///
    /// Only called once every required question has an answer.
    fn collect(
        &mut self,
        survey: &SurveyDefinition,
        responses: &Responses,
    ) -> Result<(), Self::Error>;
}
