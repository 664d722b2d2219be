use serde::Serialize;
use tracing::{debug, trace};

use crate::{Question, QuestionId, QuestionPatch};

/// Direction for moving a question one slot with the up/down buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The ordered collection of questions backing the editor.
///
/// Order defines rendering and response order. Every operation that names
/// a question by id or index treats an unknown id or out-of-range index as a
/// no-op: a UI with a stale view may refer to a question that is already
/// gone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionList {
    questions: Vec<Question>,
}

impl QuestionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Create a list from a seed set, going through `append` so ids end up unique.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut list = Self::new();
        for question in questions {
            list.append(question);
        }
        list
    }

    /// Insert a question at the end.
    ///
    /// A question with an empty id, or an id already in the list, gets a
    /// fresh one. Returns the id the question ended up with.
    pub fn append(&mut self, mut question: Question) -> QuestionId {
        if question.id().is_empty() || self.contains(question.id()) {
            question.set_id(QuestionId::generate());
        }
        let id = question.id().clone();
        debug!(%id, kind = %question.question_type(), "append question");
        self.questions.push(question);
        id
    }

    /// Remove the question with the given id, returning it if it was present.
    pub fn remove_by_id(&mut self, id: &QuestionId) -> Option<Question> {
        let Some(index) = self.position(id) else {
            trace!(%id, "remove: unknown question");
            return None;
        };
        debug!(%id, index, "remove question");
        Some(self.questions.remove(index))
    }

    /// Merge `patch` into the question with the given id.
    ///
    /// Returns `false` if no such question exists.
    pub fn update_by_id(&mut self, id: &QuestionId, patch: &QuestionPatch) -> bool {
        let Some(question) = self.get_mut(id) else {
            trace!(%id, "update: unknown question");
            return false;
        };
        question.apply(patch);
        debug!(%id, "update question");
        true
    }

    /// Move the question at `from` to `to`, shifting the ones in between.
    ///
    /// Both indices must be in `0..len`; otherwise nothing happens and
    /// `false` is returned.
    pub fn move_by_index(&mut self, from: usize, to: usize) -> bool {
        let len = self.questions.len();
        if from >= len || to >= len {
            trace!(from, to, len, "move: index out of range");
            return false;
        }
        if from != to {
            let question = self.questions.remove(from);
            self.questions.insert(to, question);
            debug!(from, to, "move question");
        }
        true
    }

    /// Move a question one slot up or down. No-op at the boundary.
    pub fn move_adjacent(&mut self, id: &QuestionId, direction: Direction) -> bool {
        let Some(from) = self.position(id) else {
            trace!(%id, "move: unknown question");
            return false;
        };
        let to = match direction {
            Direction::Up => match from.checked_sub(1) {
                Some(to) => to,
                None => return false,
            },
            Direction::Down => from + 1,
        };
        self.move_by_index(from, to)
    }

    /// Apply a drag-and-drop drop: move `dragged` to the slot currently held by `target`.
    ///
    /// Positions are looked up at drop time, so earlier mutations in the same
    /// batch are taken into account.
    pub fn reorder(&mut self, dragged: &QuestionId, target: &QuestionId) -> bool {
        match (self.position(dragged), self.position(target)) {
            (Some(from), Some(to)) => self.move_by_index(from, to),
            _ => {
                trace!(%dragged, %target, "reorder: unknown question");
                false
            }
        }
    }

    /// Get the index of the question with the given id.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Get the question with the given id.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get a mutable reference to the question with the given id.
    pub fn get_mut(&mut self, id: &QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id() == id)
    }

    /// Check if a question with the given id exists.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.position(id).is_some()
    }

    /// Get the ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(Question::id)
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over the questions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Count the required questions.
    pub fn required_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_required()).count()
    }

    /// Consume the list, returning the questions in order.
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl FromIterator<Question> for QuestionList {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::from_questions(iter)
    }
}

impl<'a> IntoIterator for &'a QuestionList {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionKind, QuestionType};

    fn list_of(ids: &[&str]) -> QuestionList {
        ids.iter()
            .map(|id| Question::new(*id, format!("Q{id}"), QuestionKind::Text))
            .collect()
    }

    fn order(list: &QuestionList) -> Vec<&str> {
        list.ids().map(QuestionId::as_str).collect()
    }

    #[test]
    fn append_assigns_fresh_id_when_missing() {
        let mut list = list_of(&["1"]);
        let id = list.append(Question::unassigned("Q2", QuestionKind::Text));

        assert!(!id.is_empty());
        assert_ne!(id.as_str(), "1");
        assert_eq!(list.len(), 2);
        assert_eq!(list.questions()[1].id(), &id);
    }

    #[test]
    fn append_replaces_duplicate_id() {
        let mut list = list_of(&["1"]);
        let id = list.append(Question::new("1", "Again", QuestionKind::Text));

        assert_ne!(id.as_str(), "1");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut list = list_of(&["1", "2"]);
        assert!(list.remove_by_id(&"9".into()).is_none());
        assert_eq!(order(&list), ["1", "2"]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut list = list_of(&["1", "2", "3"]);
        let removed = list.remove_by_id(&"2".into()).unwrap();
        assert_eq!(removed.prompt(), "Q2");
        assert_eq!(order(&list), ["1", "3"]);
    }

    #[test]
    fn update_merges_patch() {
        let mut list = list_of(&["1"]);
        let patch = QuestionPatch::new()
            .question_type(QuestionType::Radio)
            .options(["A", "B"]);

        assert!(list.update_by_id(&"1".into(), &patch));
        let question = list.get(&"1".into()).unwrap();
        assert_eq!(question.prompt(), "Q1");
        assert_eq!(question.kind(), &QuestionKind::radio(["A", "B"]));
    }

    #[test]
    fn update_unknown_is_noop() {
        let mut list = list_of(&["1"]);
        let before = list.clone();
        assert!(!list.update_by_id(&"2".into(), &QuestionPatch::new().prompt("x")));
        assert_eq!(list, before);
    }

    #[test]
    fn move_by_index_shifts_between() {
        let mut list = list_of(&["1", "2", "3", "4"]);
        assert!(list.move_by_index(0, 2));
        assert_eq!(order(&list), ["2", "3", "1", "4"]);
        assert!(list.move_by_index(3, 0));
        assert_eq!(order(&list), ["4", "2", "3", "1"]);
    }

    #[test]
    fn move_by_index_out_of_range_is_noop() {
        let mut list = list_of(&["1", "2"]);
        assert!(!list.move_by_index(0, 2));
        assert!(!list.move_by_index(5, 0));
        assert_eq!(order(&list), ["1", "2"]);

        let mut empty = QuestionList::new();
        assert!(!empty.move_by_index(0, 0));
    }

    #[test]
    fn move_adjacent_stops_at_boundary() {
        let mut list = list_of(&["1", "2", "3"]);
        assert!(!list.move_adjacent(&"1".into(), Direction::Up));
        assert!(!list.move_adjacent(&"3".into(), Direction::Down));
        assert_eq!(order(&list), ["1", "2", "3"]);

        assert!(list.move_adjacent(&"1".into(), Direction::Down));
        assert_eq!(order(&list), ["2", "1", "3"]);
        assert!(list.move_adjacent(&"3".into(), Direction::Up));
        assert_eq!(order(&list), ["2", "3", "1"]);
    }

    #[test]
    fn reorder_moves_before_target() {
        let mut list = list_of(&["1", "2", "3"]);
        assert!(list.reorder(&"3".into(), &"1".into()));
        assert_eq!(order(&list), ["3", "1", "2"]);
    }

    #[test]
    fn reorder_downwards_takes_target_slot() {
        let mut list = list_of(&["1", "2", "3"]);
        assert!(list.reorder(&"1".into(), &"3".into()));
        assert_eq!(order(&list), ["2", "3", "1"]);
    }

    #[test]
    fn reorder_with_deleted_target_is_noop() {
        let mut list = list_of(&["1", "2", "3"]);
        list.remove_by_id(&"1".into());
        assert!(!list.reorder(&"3".into(), &"1".into()));
        assert_eq!(order(&list), ["2", "3"]);
    }

    #[test]
    fn required_count() {
        let mut list = list_of(&["1", "2"]);
        list.update_by_id(&"2".into(), &QuestionPatch::new().required(true));
        assert_eq!(list.required_count(), 1);
    }
}
