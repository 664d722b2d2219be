use std::collections::HashMap;

use serde::Serialize;

use crate::{Answer, QuestionId};

/// Error type for typed response access.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from a respondent, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Responses {
    values: HashMap<QuestionId, Answer>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any previous one for the same question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.values.insert(id.into(), answer.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Get a mutable reference to the answer for a question.
    pub fn get_mut(&mut self, id: &QuestionId) -> Option<&mut Answer> {
        self.values.get_mut(id)
    }

    /// Check if an answer exists for a question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if the question has an answer that counts as given.
    pub fn has_value(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(Answer::is_present)
    }

    // === Convenience accessors ===

    /// Get a free-text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, ResponseError> {
        match self.get(id) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.clone())),
        }
    }

    /// Get a single-choice answer.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, ResponseError> {
        match self.get(id) {
            Some(Answer::Choice(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.clone())),
        }
    }

    /// Get the selected options of a checkbox answer.
    pub fn get_choices(&self, id: &QuestionId) -> Result<Vec<&str>, ResponseError> {
        match self.get(id) {
            Some(Answer::Choices(selected)) => Ok(selected.iter().map(String::as_str).collect()),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.clone())),
        }
    }

    /// Get a rating answer.
    pub fn get_rating(&self, id: &QuestionId) -> Result<i64, ResponseError> {
        match self.get(id) {
            Some(Answer::Rating(rating)) => Ok(*rating),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Rating",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::Missing(id.clone())),
        }
    }
}

impl IntoIterator for Responses {
    type Item = (QuestionId, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a QuestionId, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
