// Core algorithm exports
pub mod normalize;
pub mod plan;
pub mod recommender;
pub mod scoring;

pub use normalize::{normalize_goal, normalize_terms};
pub use plan::build_draft_plan;
pub use recommender::{aggregate_skills, select_top_careers, Recommender, COURSES_PER_SKILL, MAX_CAREERS};
pub use scoring::calculate_career_score;
