//! Structured syllabus types.
//!
//! These types map directly to the JSON record produced by the generative
//! backend and are (de)serialized via `serde` + `serde_json`. Field names use
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Title substituted when a record or document carries none.
pub const DEFAULT_COURSE_TITLE: &str = "Untitled Course";

/// A complete course syllabus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusRecord {
    /// Full descriptive course title.
    #[serde(default = "default_course_title")]
    pub course_title: String,
    /// Course code supplied by the professor. Never model-invented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    /// Free-text description; may span several lines.
    #[serde(default)]
    pub course_description: String,
    /// Prerequisites supplied by the professor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    /// Learning objectives in display order.
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    /// Software, tools and platforms students need.
    #[serde(default)]
    pub required_materials: Vec<String>,
    /// Grading components. Weights are free text and not checked to sum to 100.
    #[serde(default)]
    pub grading_breakdown: Vec<GradingItem>,
    /// Week-by-week schedule. Week labels may repeat or skip after editing.
    #[serde(default)]
    pub weekly_schedule: Vec<WeekItem>,
    #[serde(default)]
    pub policies: Policies,
}

/// One row of the grading table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradingItem {
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub description: String,
}

/// One row of the course schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekItem {
    /// Display label for the week.
    pub week: u32,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
    /// Readings or assignments due; empty when there are none.
    #[serde(default)]
    pub assignments: String,
}

/// The three fixed course policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    #[serde(default)]
    pub attendance: String,
    #[serde(default)]
    pub late_work: String,
    #[serde(default)]
    pub academic_integrity: String,
}

impl Default for SyllabusRecord {
    fn default() -> Self {
        Self {
            course_title: default_course_title(),
            course_code: None,
            course_description: String::new(),
            prerequisites: None,
            learning_objectives: Vec::new(),
            required_materials: Vec::new(),
            grading_breakdown: Vec::new(),
            weekly_schedule: Vec::new(),
            policies: Policies::default(),
        }
    }
}

impl SyllabusRecord {
    /// Return the first schedule row labelled `week`, if any.
    pub fn week(&self, week: u32) -> Option<&WeekItem> {
        self.weekly_schedule.iter().find(|w| w.week == week)
    }
}

fn default_course_title() -> String {
    DEFAULT_COURSE_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_backend_record() {
        let json = r#"{
            "courseTitle": "Cloud Computing",
            "courseDescription": "Build things in the cloud.",
            "learningObjectives": ["Deploy services", "Scale workloads"],
            "requiredMaterials": ["Platform: AWS free tier"],
            "gradingBreakdown": [
                { "component": "Labs", "weight": "40%", "description": "Weekly labs" }
            ],
            "weeklySchedule": [
                { "week": 1, "topic": "Intro", "subtopics": ["History", "Models"], "assignments": "Read ch.1" }
            ],
            "policies": {
                "attendance": "Required",
                "lateWork": "10% per day",
                "academicIntegrity": "No AI-written submissions"
            }
        }"#;
        let record: SyllabusRecord = serde_json::from_str(json).expect("should parse");
        assert_eq!(record.course_title, "Cloud Computing");
        assert_eq!(record.course_code, None);
        assert_eq!(record.prerequisites, None);
        assert_eq!(record.learning_objectives.len(), 2);
        assert_eq!(record.grading_breakdown[0].weight, "40%");
        assert_eq!(record.weekly_schedule[0].subtopics, vec!["History", "Models"]);
        assert_eq!(record.policies.late_work, "10% per day");
    }

    #[test]
    fn deserialize_sparse_record_uses_defaults() {
        let record: SyllabusRecord = serde_json::from_str("{}").expect("should parse");
        assert_eq!(record, SyllabusRecord::default());
        assert_eq!(record.course_title, DEFAULT_COURSE_TITLE);
    }

    #[test]
    fn serialize_omits_absent_optionals() {
        let json = serde_json::to_string(&SyllabusRecord::default()).unwrap();
        assert!(!json.contains("courseCode"));
        assert!(!json.contains("prerequisites"));
        assert!(json.contains("\"lateWork\""));
    }

    #[test]
    fn week_lookup_returns_first_match() {
        let record = SyllabusRecord {
            weekly_schedule: vec![
                WeekItem {
                    week: 2,
                    topic: "First two".to_owned(),
                    ..WeekItem::default()
                },
                WeekItem {
                    week: 2,
                    topic: "Second two".to_owned(),
                    ..WeekItem::default()
                },
            ],
            ..SyllabusRecord::default()
        };
        assert_eq!(record.week(2).map(|w| w.topic.as_str()), Some("First two"));
        assert!(record.week(3).is_none());
    }
}
