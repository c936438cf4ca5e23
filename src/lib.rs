//! Career Compass - career and course recommendations for students
//!
//! This library scores a student profile (interests, strengths, goal) against a
//! static career catalog and assembles skills, courses and a learning plan.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::Recommender;
pub use crate::models::{CareerRecord, CourseRecord, CourseWithSkill, Plan, PlanStep, Profile, Recommendation, RecommendRequest};
pub use crate::services::{Catalog, PlanEnhancer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let recommender = Recommender::new(std::sync::Arc::new(Catalog::default()));
        let result = recommender.recommend(&Profile::default());
        assert!(result.careers.is_empty());
    }
}
