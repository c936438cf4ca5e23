use crate::models::{Profile, RecommendRequest};
use std::collections::HashSet;

/// Trim and lower-case raw terms, dropping empty entries and duplicates
///
/// The first occurrence of each term keeps its position.
pub fn normalize_terms<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut terms: Vec<String> = Vec::new();

    for term in raw {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && seen.insert(term.clone()) {
            terms.push(term);
        }
    }

    terms
}

/// Trim and lower-case the goal; an empty goal is valid
#[inline]
pub fn normalize_goal(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Profile {
    pub fn new<I, J, S, T>(interests: I, strengths: J, goal: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            interests: normalize_terms(interests),
            strengths: normalize_terms(strengths),
            goal: normalize_goal(goal),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && self.strengths.is_empty() && self.goal.is_empty()
    }
}

impl From<&RecommendRequest> for Profile {
    fn from(request: &RecommendRequest) -> Self {
        Profile::new(&request.interests, &request.strengths, &request.goal)
    }
}
