//! Per-week lesson plans and their markdown converter pair.
//!
//! A lesson plan is generated for one schedule row of a syllabus. Like the
//! syllabus, its markdown form is what gets edited; the typed plan is parsed
//! back out with the same best-effort rules.

use serde::{Deserialize, Serialize};

use crate::markdown::{self, MarkdownWriter, cell, escape_cell, heading_text, split_sections};

const OBJECTIVES: &str = "objectives";
const MATERIALS: &str = "materials needed";
const OUTLINE: &str = "lesson outline";
const ASSESSMENT: &str = "assessment & homework";

const OUTLINE_COLUMNS: [&str; 3] = ["Activity", "Duration", "Description"];

/// A single class-session plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub materials_needed: Vec<String>,
    /// Activities in session order.
    #[serde(default)]
    pub lesson_outline: Vec<LessonActivity>,
    #[serde(default)]
    pub assessment_homework: String,
}

/// One timed activity within a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonActivity {
    #[serde(default)]
    pub activity: String,
    /// Free text, e.g. `"15 minutes"`.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// Render a lesson plan for `week` of the named course.
pub fn lesson_plan_to_markdown(
    plan: &LessonPlan,
    week: u32,
    topic: &str,
    course_title: &str,
) -> String {
    let mut w = MarkdownWriter::new();

    w.heading(1, &format!("Week {week}: {topic}"));
    if !course_title.is_empty() {
        w.italic(course_title);
    }
    w.blank();

    w.heading(2, "Objectives");
    for objective in &plan.objectives {
        w.bullet(objective);
    }
    w.blank();

    w.heading(2, "Materials Needed");
    for material in &plan.materials_needed {
        w.bullet(material);
    }
    w.blank();

    w.heading(2, "Lesson Outline");
    w.table_header(&OUTLINE_COLUMNS);
    for step in &plan.lesson_outline {
        w.table_row(&[
            escape_cell(&step.activity),
            escape_cell(&step.duration),
            escape_cell(&step.description),
        ]);
    }
    w.blank();

    w.heading(2, "Assessment & Homework");
    w.line(plan.assessment_homework.as_str());
    w.blank();

    w.finish()
}

/// Parse lesson-plan markdown. Never fails; missing sections are empty.
pub fn markdown_to_lesson_plan(text: &str) -> LessonPlan {
    let sections = split_sections(markdown::strip_bom(text), 2);

    LessonPlan {
        objectives: markdown::bullets(sections.body(OBJECTIVES)),
        materials_needed: markdown::bullets(sections.body(MATERIALS)),
        lesson_outline: markdown::table_rows(sections.body(OUTLINE))
            .into_iter()
            .map(|row| LessonActivity {
                activity: cell(&row, 0),
                duration: cell(&row, 1),
                description: cell(&row, 2),
            })
            .collect(),
        assessment_homework: markdown::body_text(sections.body(ASSESSMENT)),
    }
}

/// Week number from the first `# Week <n>` heading of a lesson plan.
pub fn lesson_plan_week(text: &str) -> Option<u32> {
    markdown::strip_bom(text)
        .lines()
        .filter_map(|line| heading_text(line, 1))
        .find_map(|heading| {
            let rest = heading.strip_prefix("Week")?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
}
