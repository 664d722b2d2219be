use std::collections::BTreeSet;

use serde::Serialize;

use crate::QuestionKind;

/// Lowest value on the rating scale.
pub const RATING_MIN: i64 = 0;

/// Highest value on the rating scale.
pub const RATING_MAX: i64 = 10;

/// A respondent's answer to one question.
///
/// The shape depends on the question type; see [`Answer::fits`]. Serializes
/// as the bare value (string, list of strings, or number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Free text (from text and textarea questions).
    Text(String),

    /// A single selected option (from radio and dropdown questions).
    Choice(String),

    /// The set of selected options (from checkbox questions).
    Choices(BTreeSet<String>),

    /// A point on the rating scale.
    Rating(i64),
}

impl Answer {
    /// Build a checkbox answer from the selected options.
    pub fn choices<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self::Choices(options.into_iter().map(Into::into).collect())
    }

    /// Check if the answer counts as given.
    ///
    /// Blank text, an empty selection and out-of-range ratings are not
    /// present. A rating of `0` is.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) | Self::Choice(text) => !text.trim().is_empty(),
            Self::Choices(selected) => !selected.is_empty(),
            Self::Rating(rating) => (RATING_MIN..=RATING_MAX).contains(rating),
        }
    }

    /// Check if the answer has the shape the question kind expects.
    ///
    /// Chosen options must be among the question's options and ratings must
    /// lie on the scale.
    pub fn fits(&self, kind: &QuestionKind) -> bool {
        match (kind, self) {
            (QuestionKind::Text | QuestionKind::Textarea, Self::Text(_)) => true,
            (QuestionKind::Radio(choice) | QuestionKind::Dropdown(choice), Self::Choice(picked)) => {
                choice.options.contains(picked)
            }
            (QuestionKind::Checkbox(choice), Self::Choices(picked)) => {
                picked.iter().all(|p| choice.options.contains(p))
            }
            (QuestionKind::Rating, Self::Rating(rating)) => {
                (RATING_MIN..=RATING_MAX).contains(rating)
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Choices(selected) => Some(selected),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<i64> {
        match self {
            Self::Rating(rating) => Some(*rating),
            _ => None,
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
            Self::Rating(_) => "Rating",
        }
    }
}

impl From<i64> for Answer {
    fn from(rating: i64) -> Self {
        Self::Rating(rating)
    }
}

impl From<i32> for Answer {
    fn from(rating: i32) -> Self {
        Self::Rating(i64::from(rating))
    }
}

impl From<u8> for Answer {
    fn from(rating: u8) -> Self {
        Self::Rating(i64::from(rating))
    }
}

impl From<BTreeSet<String>> for Answer {
    fn from(selected: BTreeSet<String>) -> Self {
        Self::Choices(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rating_is_present() {
        assert!(Answer::Rating(0).is_present());
        assert!(Answer::Rating(10).is_present());
        assert!(!Answer::Rating(11).is_present());
        assert!(!Answer::Rating(-1).is_present());
    }

    #[test]
    fn blank_text_is_not_present() {
        assert!(!Answer::Text("   ".into()).is_present());
        assert!(Answer::Text("fine".into()).is_present());
    }

    #[test]
    fn empty_selection_is_not_present() {
        assert!(!Answer::Choices(BTreeSet::new()).is_present());
        assert!(Answer::choices(["API"]).is_present());
    }

    #[test]
    fn fits_checks_shape_and_options() {
        let radio = QuestionKind::radio(["Yes", "No"]);
        assert!(Answer::Choice("Yes".into()).fits(&radio));
        assert!(!Answer::Choice("Maybe".into()).fits(&radio));
        assert!(!Answer::Text("Yes".into()).fits(&radio));

        let checkbox = QuestionKind::checkbox(["A", "B"]);
        assert!(Answer::choices(["A", "B"]).fits(&checkbox));
        assert!(!Answer::choices(["A", "C"]).fits(&checkbox));

        assert!(Answer::Rating(7).fits(&QuestionKind::Rating));
        assert!(Answer::Rating(0).fits(&QuestionKind::Rating));
        assert!(!Answer::Rating(42).fits(&QuestionKind::Rating));
        assert!(!Answer::Rating(42).fits(&QuestionKind::Textarea));
        assert!(Answer::Text("long".into()).fits(&QuestionKind::Textarea));
    }
}
