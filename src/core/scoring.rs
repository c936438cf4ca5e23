use crate::models::{CareerRecord, Profile};

/// Calculate how well a career matches a profile
///
/// Scoring formula:
/// score = (
///     matching tags +        # career tag is one of the interests
///     matching strengths +   # career strength is one of the strengths
///     goal bonus             # goal is a substring of the career name
/// )
///
/// Catalog values are compared lower-cased; the profile is expected to be
/// normalized already.
pub fn calculate_career_score(career: &CareerRecord, profile: &Profile) -> u32 {
    let tag_score = count_matches(&career.tags, &profile.interests);
    let strength_score = count_matches(&career.strengths, &profile.strengths);
    let goal_score = calculate_goal_score(&career.name, &profile.goal);

    tag_score + strength_score + goal_score
}

/// Count catalog terms whose lower-cased form appears in the profile terms
#[inline]
fn count_matches(catalog_terms: &[String], profile_terms: &[String]) -> u32 {
    catalog_terms
        .iter()
        .filter(|term| profile_terms.contains(&term.to_lowercase()))
        .count() as u32
}

/// One point when the goal is non-empty and part of the career name
#[inline]
fn calculate_goal_score(name: &str, goal: &str) -> u32 {
    if !goal.is_empty() && name.to_lowercase().contains(goal) {
        1
    } else {
        0
    }
}
