// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CareerRecord, CourseRecord, CourseWithSkill, DraftSummary, Plan, PlanStep, Profile, Recommendation, ScoredCareer};
pub use requests::RecommendRequest;
pub use responses::HealthResponse;
