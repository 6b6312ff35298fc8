use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The root learner-profile document.
///
/// The identifier is assigned by the store on creation and is immutable
/// afterwards; it is the sole lookup key. A profile serialized without an
/// identifier omits the `_id` field entirely so the store can assign one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// Preferred content-consumption mode, e.g. "visual", "text" or "coding".
    /// This is an open label set; an empty string means no preference yet.
    pub learning_style: String,
    pub metrics: LearningMetrics,
    /// Enrollment order. The sequence carries display meaning and must be
    /// preserved across read-modify-write cycles.
    pub courses: Vec<Course>,
}

impl LearnerProfile {
    /// Builds a fresh profile with fully zeroed metrics and no enrollments.
    pub fn new(username: impl Into<String>, learning_style: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            learning_style: learning_style.into(),
            metrics: LearningMetrics::default(),
            courses: Vec::new(),
        }
    }
}

/// Aggregated learning analytics for one learner.
///
/// The whole substructure is always present in the stored document: a metric
/// with no data yet is a zero, never a missing field. `Default` therefore
/// doubles as the canonical "new learner" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningMetrics {
    pub engagement: u32,
    pub time_spent: u32,
    pub modules_completed: u32,
    pub tests_taken: u32,
    pub visual: VisualMetrics,
    pub text: TextMetrics,
    pub coding: CodingMetrics,
    pub tests: TestMetrics,
}

/// Activity counters while the learner is in visual mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualMetrics {
    pub time_spent: u32,
    pub switches: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub score: u32,
    pub switches: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingMetrics {
    pub score: u32,
    pub time_spent: u32,
    pub execution_frequency: u32,
    pub number_of_lines: u32,
    pub number_of_edits: u32,
    pub switches: u32,
}

/// Test-taking outcomes. Rates are integer percentages, 0 through 100 by
/// convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestMetrics {
    pub completion_rate: u32,
    pub average_scores: u32,
}

/// A course the learner is enrolled in, with its modules in teaching order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub modules: Vec<Module>,
}

/// One unit of course content.
///
/// A module can be delivered through one or several media at once; every
/// channel field may be empty and none is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    pub video: String,
    pub animations: Vec<String>,
    pub image: String,
    pub text: String,
    pub flowchart: String,
    pub code_snippet: String,
}
