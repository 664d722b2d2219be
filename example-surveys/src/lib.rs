pub mod customer_satisfaction;
pub mod dashboard;

// Re-export customer_satisfaction surveys
pub use customer_satisfaction::{customer_satisfaction, public_customer_satisfaction};

// Re-export dashboard types
pub use dashboard::{DashboardStats, SurveyStatus, SurveySummary, mock_surveys};
