use survey_builder_types::{Question, QuestionKind, SurveyDefinition, SurveySettings};

const SATISFACTION: [&str; 5] = [
    "Very Satisfied",
    "Satisfied",
    "Neutral",
    "Dissatisfied",
    "Very Dissatisfied",
];

const FEATURES: [&str; 5] = ["Dashboard", "Reports", "Integration", "Mobile App", "API"];

/// The survey the editor opens with after the intake wizard: one question of
/// each common kind, two of them required.
pub fn customer_satisfaction() -> SurveyDefinition {
    SurveyDefinition::new(
        SurveySettings::new("Customer Satisfaction Survey")
            .with_description("Help us improve our product by sharing your feedback."),
        vec![
            Question::new(
                "1",
                "How satisfied are you with our product overall?",
                QuestionKind::radio(SATISFACTION),
            )
            .required(),
            Question::new(
                "2",
                "Which features do you use most frequently? (Select all that apply)",
                QuestionKind::checkbox(FEATURES),
            ),
            Question::new(
                "3",
                "What improvements would you like to see in our product?",
                QuestionKind::Textarea,
            ),
            Question::new(
                "4",
                "How likely are you to recommend our product to others?",
                QuestionKind::Rating,
            )
            .required(),
        ],
    )
}

/// The same survey as respondents see it on the public page, with an extra
/// free-text question at the end.
pub fn public_customer_satisfaction() -> SurveyDefinition {
    let mut survey = customer_satisfaction();
    survey.settings.description = "Help us improve our product by sharing your feedback. \
         This survey takes approximately 3-5 minutes to complete."
        .to_string();
    if let Some(rating) = survey.questions.get_mut(3) {
        rating.set_prompt("How likely are you to recommend our product to others? (0-10)");
    }
    survey.questions.push(Question::new(
        "5",
        "What is your primary use case for our product?",
        QuestionKind::Text,
    ));
    survey
}
