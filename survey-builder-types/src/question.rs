use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{QuestionId, ValidationIssue};

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, used as the key in `Responses`.
    id: QuestionId,

    /// The prompt text shown to the respondent.
    prompt: String,

    /// The kind of question (determines input widget and option list).
    #[serde(flatten)]
    kind: QuestionKind,

    /// Whether the respondent must answer before submitting.
    #[serde(default)]
    required: bool,
}

impl Question {
    /// Create a new, optional question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            required: false,
        }
    }

    /// Create a question without an id. It receives a fresh one when appended
    /// to a `QuestionList`.
    pub fn unassigned(prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self::new(QuestionId::empty(), prompt, kind)
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: QuestionId) {
        self.id = id;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }

    /// The type tag of this question.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// The option list, for choice questions.
    pub fn options(&self) -> Option<&[String]> {
        self.kind.options()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Issues that prevent committing this question from the add/edit flow.
    ///
    /// The prompt must not be blank, and choice questions need at least one
    /// non-blank option.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.prompt.trim().is_empty() {
            issues.push(ValidationIssue::EmptyPrompt);
        }
        if !self.kind.has_usable_options() {
            issues.push(ValidationIssue::NoOptions);
        }
        issues
    }

    /// Issues that prevent publishing a survey containing this question.
    ///
    /// Choice questions need a non-blank option; required questions need a
    /// non-blank prompt.
    pub fn publish_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.required && self.prompt.trim().is_empty() {
            issues.push(ValidationIssue::EmptyPrompt);
        }
        if !self.kind.has_usable_options() {
            issues.push(ValidationIssue::NoOptions);
        }
        issues
    }

    /// Merge the fields present in `patch` into this question. The id is never touched.
    pub fn apply(&mut self, patch: &QuestionPatch) {
        if let Some(prompt) = &patch.prompt {
            self.prompt.clone_from(prompt);
        }
        if let Some(required) = patch.required {
            self.required = required;
        }

        let question_type = patch
            .question_type
            .unwrap_or_else(|| self.kind.question_type());
        let options = match &patch.options {
            Some(options) => options.clone(),
            None => self.kind.options().map(<[String]>::to_vec).unwrap_or_default(),
        };
        self.kind = QuestionKind::new(question_type, options);
    }

    /// Return a copy of this question with `patch` applied.
    pub fn patched(&self, patch: &QuestionPatch) -> Self {
        let mut question = self.clone();
        question.apply(patch);
        question
    }
}

/// The closed set of question types, without payload.
///
/// Used by the add-question flow and quick-add buttons to pick a type before
/// any options exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Textarea,
    Radio,
    Checkbox,
    Dropdown,
    Rating,
}

impl QuestionType {
    /// All question types, in the order the editor offers them.
    pub const ALL: [QuestionType; 6] = [
        Self::Text,
        Self::Textarea,
        Self::Radio,
        Self::Checkbox,
        Self::Dropdown,
        Self::Rating,
    ];

    /// Human-readable label used by the editor.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Long Text",
            Self::Radio => "Multiple Choice",
            Self::Checkbox => "Checkboxes",
            Self::Dropdown => "Dropdown",
            Self::Rating => "Rating",
        }
    }

    /// Check if this type carries an option list.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox | Self::Dropdown)
    }

    /// The wire name (`"radio"`, `"textarea"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of question, determining the input widget and whether options exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    Textarea,

    /// Pick exactly one option (radio buttons).
    Radio(ChoiceQuestion),

    /// Pick any number of options.
    Checkbox(ChoiceQuestion),

    /// Pick exactly one option from a dropdown.
    Dropdown(ChoiceQuestion),

    /// A 0–10 rating scale.
    Rating,
}

impl QuestionKind {
    /// Build a kind from a type tag and an option list.
    ///
    /// Options are dropped for types that do not carry them.
    pub fn new(question_type: QuestionType, options: Vec<String>) -> Self {
        match question_type {
            QuestionType::Text => Self::Text,
            QuestionType::Textarea => Self::Textarea,
            QuestionType::Radio => Self::Radio(ChoiceQuestion::new(options)),
            QuestionType::Checkbox => Self::Checkbox(ChoiceQuestion::new(options)),
            QuestionType::Dropdown => Self::Dropdown(ChoiceQuestion::new(options)),
            QuestionType::Rating => Self::Rating,
        }
    }

    /// Shorthand for a radio question with the given options.
    pub fn radio<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::Radio(ChoiceQuestion::from_iter(options))
    }

    /// Shorthand for a checkbox question with the given options.
    pub fn checkbox<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::Checkbox(ChoiceQuestion::from_iter(options))
    }

    /// Shorthand for a dropdown question with the given options.
    pub fn dropdown<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::Dropdown(ChoiceQuestion::from_iter(options))
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Text => QuestionType::Text,
            Self::Textarea => QuestionType::Textarea,
            Self::Radio(_) => QuestionType::Radio,
            Self::Checkbox(_) => QuestionType::Checkbox,
            Self::Dropdown(_) => QuestionType::Dropdown,
            Self::Rating => QuestionType::Rating,
        }
    }

    /// Get the option list, if this kind has one.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Radio(choice) | Self::Checkbox(choice) | Self::Dropdown(choice) => {
                Some(&choice.options)
            }
            Self::Text | Self::Textarea | Self::Rating => None,
        }
    }

    /// Get a mutable reference to the option list, if this kind has one.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Self::Radio(choice) | Self::Checkbox(choice) | Self::Dropdown(choice) => {
                Some(&mut choice.options)
            }
            Self::Text | Self::Textarea | Self::Rating => None,
        }
    }

    /// Check if this is a choice kind (radio, checkbox, dropdown).
    pub fn is_choice(&self) -> bool {
        self.question_type().is_choice()
    }

    /// Non-choice kinds always pass; choice kinds need one non-blank option.
    fn has_usable_options(&self) -> bool {
        match self.options() {
            Some(options) => options.iter().any(|o| !o.trim().is_empty()),
            None => true,
        }
    }
}

/// Configuration for a choice question (radio, checkbox, dropdown).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    /// The options, in display order.
    #[serde(default)]
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl<S: Into<String>> FromIterator<S> for ChoiceQuestion {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A partial update for a question. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub prompt: Option<String>,
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
}

impl QuestionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    pub fn options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.prompt.is_none()
            && self.question_type.is_none()
            && self.options.is_none()
            && self.required.is_none()
    }
}
