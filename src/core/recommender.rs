use crate::core::{plan::build_draft_plan, scoring::calculate_career_score};
use crate::models::{CareerRecord, CourseWithSkill, Plan, Profile, Recommendation, ScoredCareer};
use crate::services::Catalog;
use std::collections::HashSet;
use std::sync::Arc;

/// Maximum number of careers returned
pub const MAX_CAREERS: usize = 5;

/// Maximum number of courses suggested per skill
pub const COURSES_PER_SKILL: usize = 2;

/// Main recommendation orchestrator over a loaded catalog
///
/// # Pipeline Stages
/// 1. Score every career against the profile
/// 2. Select the top careers (or fall back to catalog order)
/// 3. Aggregate their skills
/// 4. Match courses per skill
/// 5. Build the draft plan
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produce a recommendation for a normalized profile
    pub fn recommend(&self, profile: &Profile) -> Recommendation {
        let careers: Vec<CareerRecord> = select_top_careers(self.rank(profile))
            .into_iter()
            .cloned()
            .collect();

        let skills = aggregate_skills(&careers);
        let courses = self.match_courses(&skills);
        let plan = build_draft_plan(&skills, &courses);

        Recommendation {
            careers,
            skills,
            courses,
            plan: Plan::Steps(plan),
        }
    }

    /// Score every career and sort by score (descending)
    ///
    /// The sort is stable, so careers with equal scores keep catalog order.
    pub fn rank(&self, profile: &Profile) -> Vec<ScoredCareer<'_>> {
        let mut scored: Vec<ScoredCareer<'_>> = self
            .catalog
            .careers()
            .iter()
            .map(|career| ScoredCareer {
                score: calculate_career_score(career, profile),
                career,
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Up to `COURSES_PER_SKILL` courses for each skill, in skill order
    fn match_courses(&self, skills: &[String]) -> Vec<CourseWithSkill> {
        skills
            .iter()
            .flat_map(|skill| {
                self.catalog
                    .courses_for(skill)
                    .iter()
                    .take(COURSES_PER_SKILL)
                    .map(move |course| CourseWithSkill::new(course, skill))
            })
            .collect()
    }
}

/// Pick the careers to recommend from a ranked list
///
/// Positive scores win; when nothing scored, the first careers of the
/// ranking (which is catalog order) are used instead.
pub fn select_top_careers<'a>(ranked: Vec<ScoredCareer<'a>>) -> Vec<&'a CareerRecord> {
    let matched: Vec<&CareerRecord> = ranked
        .iter()
        .filter(|s| s.score > 0)
        .take(MAX_CAREERS)
        .map(|s| s.career)
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    ranked.iter().take(MAX_CAREERS).map(|s| s.career).collect()
}

/// Collect skills of the selected careers in first-seen order
pub fn aggregate_skills(careers: &[CareerRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut skills = Vec::new();

    for skill in careers.iter().flat_map(|c| c.skills.iter()) {
        if seen.insert(skill.as_str()) {
            skills.push(skill.clone());
        }
    }

    skills
}
