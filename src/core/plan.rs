use crate::models::{CourseWithSkill, PlanStep};

/// Number of course titles listed under the first plan step
pub const PLAN_COURSE_ITEMS: usize = 3;

const FALLBACK_SKILL: &str = "core CS basics";

/// Build the deterministic 4-step learning plan
///
/// Step 1 targets the first aggregated skill and lists the first matched
/// courses; the remaining steps are fixed guidance.
pub fn build_draft_plan(skills: &[String], courses: &[CourseWithSkill]) -> Vec<PlanStep> {
    let first_skill = skills.first().map(String::as_str).unwrap_or(FALLBACK_SKILL);

    vec![
        PlanStep {
            step: 1,
            title: format!("Learn {}", first_skill),
            items: courses
                .iter()
                .take(PLAN_COURSE_ITEMS)
                .map(|c| c.title.clone())
                .collect(),
        },
        fixed_step(
            2,
            "Build a mini-project",
            &[
                "Choose a small problem in your interest area",
                "Implement and publish on GitHub",
            ],
        ),
        fixed_step(
            3,
            "Create a portfolio",
            &[
                "Add README + screenshots",
                "Write a short blog/README about what you learned",
            ],
        ),
        fixed_step(
            4,
            "Apply & network",
            &["Shortlist 5 internships", "Reach out to 3 mentors/alumni"],
        ),
    ]
}

fn fixed_step(step: u32, title: &str, items: &[&str]) -> PlanStep {
    PlanStep {
        step,
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}
