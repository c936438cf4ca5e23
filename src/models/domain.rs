use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A career entry from the catalog
///
/// Fields beyond the ones the engine reads are kept in `extra` and echoed
/// back untouched in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A course entry from the catalog, listed under one skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A course matched for a skill, serialized as the course fields plus `skill`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseWithSkill {
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub skill: String,
}

impl CourseWithSkill {
    pub fn new(course: &CourseRecord, skill: &str) -> Self {
        let mut extra = course.extra.clone();
        // The matched skill wins over any `skill` field carried by the source
        extra.remove("skill");

        Self {
            title: course.title.clone(),
            extra,
            skill: skill.to_string(),
        }
    }
}

/// Normalized student profile
///
/// All terms are trimmed and lower-cased; lists carry no empty entries and
/// no duplicates (first-seen order is kept).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub goal: String,
}

/// Career paired with its match score
#[derive(Debug, Clone, Copy)]
pub struct ScoredCareer<'a> {
    pub score: u32,
    pub career: &'a CareerRecord,
}

/// One step of the learning plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub step: u32,
    pub title: String,
    pub items: Vec<String>,
}

/// Learning plan: the deterministic draft or free-form enhanced text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Plan {
    Steps(Vec<PlanStep>),
    Enhanced(String),
}

impl Plan {
    pub fn is_enhanced(&self) -> bool {
        matches!(self, Plan::Enhanced(_))
    }
}

/// Output of the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub careers: Vec<CareerRecord>,
    pub skills: Vec<String>,
    pub courses: Vec<CourseWithSkill>,
    pub plan: Plan,
}

impl Recommendation {
    /// Condensed view handed to the plan enhancer
    pub fn summary(&self) -> DraftSummary<'_> {
        DraftSummary {
            careers: self.careers.iter().map(|c| c.name.as_str()).collect(),
            skills: &self.skills,
            courses: &self.courses,
        }
    }
}

/// Draft recommendation as sent to the plan enhancer
#[derive(Debug, Clone, Serialize)]
pub struct DraftSummary<'a> {
    pub careers: Vec<&'a str>,
    pub skills: &'a [String],
    pub courses: &'a [CourseWithSkill],
}
