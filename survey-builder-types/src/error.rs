use std::fmt;

use serde::Serialize;

use crate::QuestionId;

/// A single problem with a question that blocks committing or publishing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The prompt is empty or only whitespace.
    #[error("question text is empty")]
    EmptyPrompt,

    /// A choice question has no non-blank option.
    #[error("choice question has no options")]
    NoOptions,
}

/// A question that failed validation, with every issue found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidQuestion {
    pub id: QuestionId,
    pub issues: Vec<ValidationIssue>,
}

impl InvalidQuestion {
    pub fn new(id: QuestionId, issues: Vec<ValidationIssue>) -> Self {
        Self { id, issues }
    }

    /// Check if the given issue was reported for this question.
    pub fn has(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

impl fmt::Display for InvalidQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.id)?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Render a list of issues for an error message.
pub(crate) fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for the survey editor.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A draft or edit failed validation. Nothing was changed.
    #[error("Invalid question: {}", join(.0))]
    Invalid(Vec<ValidationIssue>),

    /// The question being edited was deleted in the meantime.
    #[error("Stale edit: question {0} no longer exists")]
    StaleEdit(QuestionId),

    /// Publishing was blocked by invalid questions.
    #[error("Survey cannot be published: {}", join(.0))]
    Unpublishable(Vec<InvalidQuestion>),

    /// The publish backend rejected the survey.
    #[error("Publish rejected: {0}")]
    Rejected(#[source] anyhow::Error),

    /// The survey was already published; the editor no longer accepts changes.
    #[error("Survey is already published")]
    Published,
}

impl EditorError {
    /// Create a rejection from any backend error type.
    pub fn rejected(err: impl Into<anyhow::Error>) -> Self {
        Self::Rejected(err.into())
    }

    /// Check if this error is a silently absorbable stale reference.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleEdit(_))
    }

    /// The validation issues, for an `Invalid` error.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Invalid(issues) => issues,
            _ => &[],
        }
    }

    /// The offending questions, for an `Unpublishable` error.
    pub fn invalid_questions(&self) -> &[InvalidQuestion] {
        match self {
            Self::Unpublishable(invalid) => invalid,
            _ => &[],
        }
    }
}

/// Error type for the respondent form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Required questions without a present answer. Nothing was submitted.
    #[error("Unanswered required questions: {}", join(.0))]
    Unanswered(Vec<QuestionId>),

    /// The collection backend rejected the responses.
    #[error("Submission rejected: {0}")]
    Rejected(#[source] anyhow::Error),

    /// The form was already submitted.
    #[error("Responses were already submitted")]
    Submitted,
}

impl FormError {
    /// Create a rejection from any backend error type.
    pub fn rejected(err: impl Into<anyhow::Error>) -> Self {
        Self::Rejected(err.into())
    }

    /// The unanswered question ids, for an `Unanswered` error.
    pub fn unanswered(&self) -> &[QuestionId] {
        match self {
            Self::Unanswered(ids) => ids,
            _ => &[],
        }
    }
}
