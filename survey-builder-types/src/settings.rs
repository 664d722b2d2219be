use serde::{Deserialize, Serialize};

/// Survey-wide settings edited next to the question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySettings {
    pub title: String,
    pub description: String,
    pub allow_anonymous: bool,
    pub allow_multiple_submissions: bool,
}

impl SurveySettings {
    /// Create settings with the given title and the defaults for everything else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_anonymous(mut self, allow: bool) -> Self {
        self.allow_anonymous = allow;
        self
    }

    pub fn with_multiple_submissions(mut self, allow: bool) -> Self {
        self.allow_multiple_submissions = allow;
        self
    }

    /// Replace every field present in `patch`.
    ///
    /// No validation: the title may be empty while it is being typed.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(allow) = patch.allow_anonymous {
            self.allow_anonymous = allow;
        }
        if let Some(allow) = patch.allow_multiple_submissions {
            self.allow_multiple_submissions = allow;
        }
    }
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            allow_anonymous: true,
            allow_multiple_submissions: false,
        }
    }
}

/// A partial update for `SurveySettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub allow_anonymous: Option<bool>,
    pub allow_multiple_submissions: Option<bool>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allow_anonymous(mut self, allow: bool) -> Self {
        self.allow_anonymous = Some(allow);
        self
    }

    pub fn allow_multiple_submissions(mut self, allow: bool) -> Self {
        self.allow_multiple_submissions = Some(allow);
        self
    }
}
