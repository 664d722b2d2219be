use crate::{Question, QuestionKind, QuestionPatch, QuestionType, ValidationIssue};

/// An in-progress question held by the add/edit modal.
///
/// Unlike `Question`, a draft keeps its option strings regardless of type and
/// may hold blank options while the user is typing. Blank options are dropped
/// when the draft is turned into a question or patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub prompt: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
}

impl Draft {
    /// A fresh draft as the add-question modal opens it: a radio question
    /// with a single empty option.
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            question_type: QuestionType::Radio,
            options: vec![String::new()],
            required: false,
        }
    }

    /// A draft of the given type with no options.
    pub fn of_type(question_type: QuestionType) -> Self {
        Self {
            prompt: String::new(),
            question_type,
            options: Vec::new(),
            required: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Change the type.
    ///
    /// Switching to a type without options clears them. Switching to a choice
    /// type with no options left starts with one empty option to type into.
    pub fn set_type(&mut self, question_type: QuestionType) {
        self.question_type = question_type;
        if !question_type.is_choice() {
            self.options.clear();
        } else if self.options.is_empty() {
            self.options.push(String::new());
        }
    }

    /// Append an empty option.
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Replace the option at `index`. Out-of-range indices are ignored.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            *option = value.into();
        }
    }

    /// Remove the option at `index`, keeping at least one option.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.options.len() <= 1 || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    /// Options with blank entries dropped.
    fn filled_options(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| !o.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Every issue that blocks committing this draft.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        self.to_question().issues()
    }

    /// Build an id-less question from this draft.
    pub fn to_question(&self) -> Question {
        Question::unassigned(
            self.prompt.clone(),
            QuestionKind::new(self.question_type, self.filled_options()),
        )
        .with_required(self.required)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Question> for Draft {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_string(),
            question_type: question.question_type(),
            options: question.options().map(<[String]>::to_vec).unwrap_or_default(),
            required: question.is_required(),
        }
    }
}

impl From<Draft> for QuestionPatch {
    fn from(draft: Draft) -> Self {
        let options = draft.question_type.is_choice().then(|| draft.filled_options());
        Self {
            prompt: Some(draft.prompt),
            question_type: Some(draft.question_type),
            options,
            required: Some(draft.required),
        }
    }
}

impl From<&Draft> for QuestionPatch {
    fn from(draft: &Draft) -> Self {
        draft.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_radio_with_one_empty_option() {
        let draft = Draft::new();
        assert_eq!(draft.question_type, QuestionType::Radio);
        assert_eq!(draft.options, vec![String::new()]);
        assert_eq!(
            draft.issues(),
            vec![ValidationIssue::EmptyPrompt, ValidationIssue::NoOptions]
        );
    }

    #[test]
    fn switching_to_text_clears_options() {
        let mut draft = Draft::new().with_options(["A", "B"]);
        draft.set_type(QuestionType::Text);
        assert!(draft.options.is_empty());

        draft.set_type(QuestionType::Checkbox);
        assert_eq!(draft.options, vec![String::new()]);
    }

    #[test]
    fn option_editing() {
        let mut draft = Draft::new();
        draft.set_option(0, "Yes");
        draft.add_option();
        draft.set_option(1, "No");
        draft.set_option(7, "ignored");
        assert_eq!(draft.options, vec!["Yes", "No"]);

        assert!(draft.remove_option(0));
        assert!(!draft.remove_option(0));
        assert_eq!(draft.options, vec!["No"]);
    }

    #[test]
    fn blank_options_are_dropped() {
        let draft = Draft::new()
            .with_prompt("Pick")
            .with_options(["A", "", "  ", "B"]);
        assert_eq!(draft.to_question().options().unwrap(), ["A", "B"]);

        let patch = QuestionPatch::from(&draft);
        assert_eq!(patch.options, Some(vec!["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn round_trips_through_question() {
        let question = Question::new("1", "Q1", QuestionKind::checkbox(["A"])).required();
        let draft = Draft::from(&question);
        assert_eq!(draft.question_type, QuestionType::Checkbox);
        assert!(draft.required);

        let patched = question.patched(&draft.into());
        assert_eq!(patched, question);
    }
}
