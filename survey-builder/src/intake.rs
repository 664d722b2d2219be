//! The multi-step intake wizard that collects what a new survey should be about.
//!
//! The answers seed the editor's settings; question generation itself
//! happens elsewhere.

use std::fmt;

use crate::SurveySettings;

/// Error type for the intake wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// A required step was left blank.
    #[error("Missing answer for step: {0}")]
    Missing(IntakeStep),
}

/// The wizard's steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IntakeStep {
    #[default]
    Audience,
    Areas,
    Depth,
    Anonymity,
    Context,
}

impl IntakeStep {
    pub const ALL: [IntakeStep; 5] = [
        Self::Audience,
        Self::Areas,
        Self::Depth,
        Self::Anonymity,
        Self::Context,
    ];

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        match self {
            Self::Audience => 0,
            Self::Areas => 1,
            Self::Depth => 2,
            Self::Anonymity => 3,
            Self::Context => 4,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Audience => "Who will be taking this survey?",
            Self::Areas => "What specific areas do you want to cover?",
            Self::Depth => "Survey depth?",
            Self::Anonymity => "Should this survey be anonymous?",
            Self::Context => "Additional Context",
        }
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Audience => "audience",
            Self::Areas => "areas",
            Self::Depth => "depth",
            Self::Anonymity => "anonymity",
            Self::Context => "context",
        };
        f.write_str(name)
    }
}

/// How long the generated survey should take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurveyDepth {
    /// Quick feedback.
    #[default]
    Pulse,
    /// Comprehensive.
    DeepDive,
}

impl SurveyDepth {
    /// The value the intake form submits (`"2-min"`, `"15-min"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pulse => "2-min",
            Self::DeepDive => "15-min",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pulse => "2-min pulse",
            Self::DeepDive => "15-min deep dive",
        }
    }

    /// How many questions a survey of this depth should have.
    pub fn question_range(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Self::Pulse => 3..=5,
            Self::DeepDive => 10..=15,
        }
    }
}

/// What the wizard collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeAnswers {
    pub audience: String,
    pub areas: String,
    pub depth: SurveyDepth,
    pub anonymous: bool,
    pub context: String,
}

impl Default for IntakeAnswers {
    fn default() -> Self {
        Self {
            audience: String::new(),
            areas: String::new(),
            depth: SurveyDepth::default(),
            anonymous: true,
            context: String::new(),
        }
    }
}

impl IntakeAnswers {
    /// Settings for the survey these answers describe.
    pub fn settings(&self) -> SurveySettings {
        SurveySettings::default()
            .with_description(self.context.trim())
            .with_anonymous(self.anonymous)
    }
}

/// Step-by-step collection of `IntakeAnswers`.
///
/// Navigation is free in both directions; the blank checks run on `finish`.
#[derive(Debug, Clone, Default)]
pub struct IntakeWizard {
    step: IntakeStep,
    answers: IntakeAnswers,
}

impl IntakeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn answers(&self) -> &IntakeAnswers {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut IntakeAnswers {
        &mut self.answers
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// On the last step the wizard offers "Generate Survey" instead of "Next".
    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Advance one step. Stays put on the last step.
    pub fn next(&mut self) -> IntakeStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Go back one step. Stays put on the first step.
    pub fn back(&mut self) -> IntakeStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.answers.audience = audience.into();
    }

    pub fn set_areas(&mut self, areas: impl Into<String>) {
        self.answers.areas = areas.into();
    }

    pub fn set_depth(&mut self, depth: SurveyDepth) {
        self.answers.depth = depth;
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.answers.anonymous = anonymous;
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.answers.context = context.into();
    }

    /// Check the required steps and return the answers.
    pub fn finish(&self) -> Result<IntakeAnswers, IntakeError> {
        if self.answers.audience.trim().is_empty() {
            return Err(IntakeError::Missing(IntakeStep::Audience));
        }
        if self.answers.areas.trim().is_empty() {
            return Err(IntakeError::Missing(IntakeStep::Areas));
        }
        Ok(self.answers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_saturates() {
        let mut wizard = IntakeWizard::new();
        assert_eq!(wizard.step(), IntakeStep::Audience);
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.back(), IntakeStep::Audience);

        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), IntakeStep::Context);
        assert!(wizard.is_last_step());
        assert_eq!(wizard.back(), IntakeStep::Anonymity);
    }

    #[test]
    fn finish_requires_audience_and_areas() {
        let mut wizard = IntakeWizard::new();
        assert_eq!(
            wizard.finish(),
            Err(IntakeError::Missing(IntakeStep::Audience))
        );

        wizard.set_audience("Customers");
        assert_eq!(wizard.finish(), Err(IntakeError::Missing(IntakeStep::Areas)));

        wizard.set_areas("Product satisfaction");
        let answers = wizard.finish().unwrap();
        assert_eq!(answers.depth, SurveyDepth::Pulse);
        assert!(answers.anonymous);
    }

    #[test]
    fn answers_seed_settings() {
        let mut wizard = IntakeWizard::new();
        wizard.set_audience("Employees");
        wizard.set_areas("Engagement");
        wizard.set_anonymous(false);
        wizard.set_context("  Quarterly check-in ");

        let settings = wizard.finish().unwrap().settings();
        assert!(!settings.allow_anonymous);
        assert_eq!(settings.description, "Quarterly check-in");
    }

    #[test]
    fn depth_values() {
        assert_eq!(SurveyDepth::DeepDive.as_str(), "15-min");
        assert_eq!(SurveyDepth::Pulse.question_range(), 3..=5);
    }

    #[test]
    fn missing_step_message() {
        let err = IntakeError::Missing(IntakeStep::Areas);
        assert_eq!(err.to_string(), "Missing answer for step: areas");
    }
}
