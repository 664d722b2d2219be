//! The survey editor: question list and settings behind a single entry point.

use tracing::{debug, info, warn};

use crate::{
    Direction, Draft, EditorError, PublishBackend, Question, QuestionId, QuestionKind,
    QuestionList, QuestionPatch, QuestionType, ResponseForm, SettingsPatch, SurveyDefinition,
    SurveySettings,
};

/// Editor lifecycle. `Published` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Published,
}

/// Counts shown in the editor's overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyOverview {
    pub questions: usize,
    pub required: usize,
    /// Estimated time to complete, in minutes: two questions a minute, at least two minutes.
    pub estimated_minutes: usize,
}

impl SurveyOverview {
    fn of(questions: &QuestionList) -> Self {
        Self {
            questions: questions.len(),
            required: questions.required_count(),
            estimated_minutes: questions.len().div_ceil(2).max(2),
        }
    }
}

/// The single entry point a UI layer calls to edit a survey.
///
/// Owns the question list and the survey settings. Operations that reference
/// a question that no longer exists are no-ops; validation failures leave
/// the state untouched.
#[derive(Debug, Clone)]
pub struct EditorController {
    questions: QuestionList,
    settings: SurveySettings,
    state: EditorState,
}

impl EditorController {
    /// Open the editor on a seed set of questions.
    pub fn new(settings: SurveySettings, questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: QuestionList::from_questions(questions),
            settings,
            state: EditorState::Editing,
        }
    }

    /// Open the editor on an existing survey definition.
    pub fn from_definition(survey: SurveyDefinition) -> Self {
        Self::new(survey.settings, survey.questions)
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    pub fn settings(&self) -> &SurveySettings {
        &self.settings
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_published(&self) -> bool {
        self.state == EditorState::Published
    }

    fn ensure_editing(&self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Editing => Ok(()),
            EditorState::Published => Err(EditorError::Published),
        }
    }

    /// Infallible mutators are ignored once published.
    fn ignore_if_published(&self, operation: &str) -> bool {
        if self.is_published() {
            warn!(operation, "survey already published, ignoring");
            return true;
        }
        false
    }

    // === Add / edit flows ===

    /// Start the add-question modal.
    pub fn open_add_question_flow(&self) -> Draft {
        Draft::new()
    }

    /// Validate and append a new question from the add-question modal.
    ///
    /// Returns the id assigned to the question.
    pub fn commit_new_question(&mut self, draft: Draft) -> Result<QuestionId, EditorError> {
        self.ensure_editing()?;
        let question = draft.to_question();
        let issues = question.issues();
        if !issues.is_empty() {
            debug!(?issues, "rejecting new question");
            return Err(EditorError::Invalid(issues));
        }
        Ok(self.questions.append(question))
    }

    /// Start the edit modal for a question. `None` if it no longer exists.
    pub fn open_edit_flow(&self, id: &QuestionId) -> Option<Draft> {
        self.questions.get(id).map(Draft::from)
    }

    /// Validate and apply an edit.
    ///
    /// If the question was deleted in the meantime nothing changes and
    /// `EditorError::StaleEdit` is returned.
    pub fn commit_edit(
        &mut self,
        id: &QuestionId,
        patch: impl Into<QuestionPatch>,
    ) -> Result<(), EditorError> {
        self.ensure_editing()?;
        let patch = patch.into();
        let Some(current) = self.questions.get(id) else {
            debug!(%id, "edit of deleted question");
            return Err(EditorError::StaleEdit(id.clone()));
        };
        let issues = current.patched(&patch).issues();
        if !issues.is_empty() {
            debug!(%id, ?issues, "rejecting edit");
            return Err(EditorError::Invalid(issues));
        }
        self.questions.update_by_id(id, &patch);
        Ok(())
    }

    /// Append a placeholder question of the given type, as the quick-add buttons do.
    pub fn add_question_of_type(&mut self, question_type: QuestionType) -> Option<QuestionId> {
        if self.ignore_if_published("add_question_of_type") {
            return None;
        }
        let options = if question_type.is_choice() {
            vec!["Option 1".to_string(), "Option 2".to_string()]
        } else {
            Vec::new()
        };
        let question = Question::unassigned(
            format!("New {} Question", question_type.label()),
            QuestionKind::new(question_type, options),
        );
        Some(self.questions.append(question))
    }

    /// Remove a question. Deleting an unknown question is fine.
    pub fn delete_question(&mut self, id: &QuestionId) {
        if self.ignore_if_published("delete_question") {
            return;
        }
        self.questions.remove_by_id(id);
    }

    // === Reordering ===

    /// Apply a drag-and-drop gesture: `dragged` takes the slot of `target`.
    pub fn reorder(&mut self, dragged: &QuestionId, target: &QuestionId) -> bool {
        if self.ignore_if_published("reorder") {
            return false;
        }
        self.questions.reorder(dragged, target)
    }

    /// Move a question one slot with the up/down buttons.
    pub fn move_question(&mut self, id: &QuestionId, direction: Direction) -> bool {
        if self.ignore_if_published("move_question") {
            return false;
        }
        self.questions.move_adjacent(id, direction)
    }

    pub fn move_by_index(&mut self, from: usize, to: usize) -> bool {
        if self.ignore_if_published("move_by_index") {
            return false;
        }
        self.questions.move_by_index(from, to)
    }

    // === Settings ===

    /// Merge a settings change. The title may be left empty while typing.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        if self.ignore_if_published("update_settings") {
            return;
        }
        self.settings.apply(patch);
    }

    // === Views ===

    pub fn overview(&self) -> SurveyOverview {
        SurveyOverview::of(&self.questions)
    }

    /// The survey as it currently stands.
    pub fn snapshot(&self) -> SurveyDefinition {
        SurveyDefinition::new(self.settings.clone(), self.questions.questions().to_vec())
    }

    /// Open the current survey as a respondent would see it.
    pub fn preview(&self) -> ResponseForm {
        ResponseForm::new(self.snapshot())
    }

    // === Publish ===

    /// Validate the whole survey and hand it to `backend`.
    ///
    /// Invalid questions block publishing and are all reported. A backend
    /// rejection leaves the editor in `Editing`. On success the editor becomes
    /// `Published` and accepts no further changes.
    pub fn publish<B: PublishBackend>(&mut self, backend: &mut B) -> Result<(), EditorError> {
        self.ensure_editing()?;
        let survey = self.snapshot();
        let invalid = survey.invalid_questions();
        if !invalid.is_empty() {
            debug!(count = invalid.len(), "survey not publishable");
            return Err(EditorError::Unpublishable(invalid));
        }
        backend.publish(&survey).map_err(EditorError::rejected)?;
        info!(title = %survey.settings.title, questions = survey.len(), "survey published");
        self.state = EditorState::Published;
        Ok(())
    }
}
