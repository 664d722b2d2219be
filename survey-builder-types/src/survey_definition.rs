use serde::Serialize;

use crate::{InvalidQuestion, Question, QuestionId, QuestionList, SurveySettings};

/// A survey as handed to the outside world: its settings and ordered questions.
///
/// This is what the publish backend receives and what a respondent form is
/// opened over. It is presentation-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyDefinition {
    #[serde(flatten)]
    pub settings: SurveySettings,

    pub questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a survey definition from settings and questions.
    pub fn new(settings: SurveySettings, questions: impl Into<Vec<Question>>) -> Self {
        Self {
            settings,
            questions: questions.into(),
        }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Every question that would block publishing, in order.
    pub fn invalid_questions(&self) -> Vec<InvalidQuestion> {
        self.questions
            .iter()
            .filter_map(|q| {
                let issues = q.publish_issues();
                (!issues.is_empty()).then(|| InvalidQuestion::new(q.id().clone(), issues))
            })
            .collect()
    }
}

impl From<(SurveySettings, QuestionList)> for SurveyDefinition {
    fn from((settings, questions): (SurveySettings, QuestionList)) -> Self {
        Self::new(settings, questions.into_questions())
    }
}
