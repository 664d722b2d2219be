/// Where a survey is in its lifecycle, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyStatus {
    Active,
    Draft,
    Closed,
}

/// One row of the dashboard's survey table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySummary {
    pub id: &'static str,
    pub title: &'static str,
    pub status: SurveyStatus,
    pub responses: u32,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

/// The header cards above the survey table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub active: usize,
    pub drafts: usize,
    pub closed: usize,
    pub total_responses: u32,
}

impl DashboardStats {
    pub fn of(surveys: &[SurveySummary]) -> Self {
        surveys.iter().fold(Self::default(), |mut stats, survey| {
            match survey.status {
                SurveyStatus::Active => stats.active += 1,
                SurveyStatus::Draft => stats.drafts += 1,
                SurveyStatus::Closed => stats.closed += 1,
            }
            stats.total_responses += survey.responses;
            stats
        })
    }
}

/// The mock surveys listed on the dashboard.
pub fn mock_surveys() -> Vec<SurveySummary> {
    vec![
        SurveySummary {
            id: "1",
            title: "Customer Satisfaction Survey",
            status: SurveyStatus::Active,
            responses: 245,
            created_at: "2024-01-15",
            updated_at: "2024-01-20",
        },
        SurveySummary {
            id: "2",
            title: "Product Feedback Form",
            status: SurveyStatus::Draft,
            responses: 0,
            created_at: "2024-01-18",
            updated_at: "2024-01-18",
        },
        SurveySummary {
            id: "3",
            title: "Employee Engagement Survey",
            status: SurveyStatus::Closed,
            responses: 89,
            created_at: "2024-01-10",
            updated_at: "2024-01-17",
        },
        SurveySummary {
            id: "4",
            title: "Website Usability Test",
            status: SurveyStatus::Active,
            responses: 156,
            created_at: "2024-01-12",
            updated_at: "2024-01-19",
        },
    ]
}
