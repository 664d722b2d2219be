//! The respondent-facing form: answers keyed by question id, checked on submit.

use std::collections::BTreeSet;

use tracing::{debug, info, trace};

use crate::{
    Answer, CollectionBackend, FormError, QuestionId, QuestionKind, Responses, SurveyDefinition,
};

/// Form lifecycle. `Submitted` is terminal and shows the thank-you screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Answering,
    Submitted,
}

/// A respondent filling in a survey.
#[derive(Debug, Clone)]
pub struct ResponseForm {
    survey: SurveyDefinition,
    responses: Responses,
    state: FormState,
}

impl ResponseForm {
    pub fn new(survey: SurveyDefinition) -> Self {
        Self {
            survey,
            responses: Responses::new(),
            state: FormState::Answering,
        }
    }

    pub fn survey(&self) -> &SurveyDefinition {
        &self.survey
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Submitted
    }

    /// The kind of a question that may still be answered.
    fn open_question(&self, id: &QuestionId) -> Option<&QuestionKind> {
        if self.is_submitted() {
            trace!(%id, "form already submitted");
            return None;
        }
        let kind = self.survey.question(id).map(|q| q.kind());
        if kind.is_none() {
            trace!(%id, "answer for unknown question");
        }
        kind
    }

    /// Replace the answer to a question.
    ///
    /// Unknown ids are ignored, as are answers that do not fit the question:
    /// the wrong shape, an option it does not offer, or a rating off the scale.
    pub fn set_answer(&mut self, id: &QuestionId, answer: impl Into<Answer>) {
        let answer = answer.into();
        let Some(kind) = self.open_question(id) else {
            return;
        };
        if !answer.fits(kind) {
            trace!(%id, answer = answer.type_name(), "answer does not fit question");
            return;
        }
        self.responses.insert(id.clone(), answer);
    }

    /// Select or deselect one option of a checkbox question.
    ///
    /// Other question kinds and options the question does not offer are ignored.
    pub fn toggle_choice(&mut self, id: &QuestionId, option: impl Into<String>) {
        let option = option.into();
        let Some(kind) = self.open_question(id) else {
            return;
        };
        let offered = match kind {
            QuestionKind::Checkbox(choice) => choice.options.contains(&option),
            _ => {
                trace!(%id, kind = %kind.question_type(), "toggle on non-checkbox question");
                return;
            }
        };
        if !offered {
            trace!(%id, %option, "toggle of unknown option");
            return;
        }
        match self.responses.get_mut(id) {
            Some(Answer::Choices(selected)) => {
                if !selected.remove(&option) {
                    selected.insert(option);
                }
            }
            _ => self
                .responses
                .insert(id.clone(), Answer::Choices(BTreeSet::from([option]))),
        }
    }

    /// Drop the answer to a question.
    pub fn clear_answer(&mut self, id: &QuestionId) {
        if self.open_question(id).is_some() {
            self.responses.remove(id);
        }
    }

    /// Required questions, in survey order, without a present answer that
    /// fits the question.
    pub fn unanswered_required(&self) -> Vec<QuestionId> {
        self.survey
            .questions()
            .iter()
            .filter(|q| q.is_required())
            .filter(|q| !answered(q.kind(), self.responses.get(q.id())))
            .map(|q| q.id().clone())
            .collect()
    }

    /// Check required answers and hand the responses to `backend`.
    ///
    /// Nothing changes on failure. On success the form becomes `Submitted`.
    pub fn submit<B: CollectionBackend>(&mut self, backend: &mut B) -> Result<(), FormError> {
        if self.is_submitted() {
            return Err(FormError::Submitted);
        }
        let unanswered = self.unanswered_required();
        if !unanswered.is_empty() {
            debug!(?unanswered, "submission blocked");
            return Err(FormError::Unanswered(unanswered));
        }
        backend
            .collect(&self.survey, &self.responses)
            .map_err(FormError::rejected)?;
        info!(answers = self.responses.len(), "responses submitted");
        self.state = FormState::Submitted;
        Ok(())
    }
}

fn answered(kind: &QuestionKind, answer: Option<&Answer>) -> bool {
    answer.is_some_and(|a| a.is_present() && a.fits(kind))
}
