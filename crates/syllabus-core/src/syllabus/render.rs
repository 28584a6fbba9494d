//! Syllabus record to markdown.
//!
//! The output follows a fixed section grammar that [`super::parser`] reads
//! back. Sections are emitted in a fixed order and separated by blank lines;
//! Prerequisites and Required Materials are omitted when they have no
//! content, every other section is always present.

use crate::markdown::{MarkdownWriter, escape_cell};

use super::model::{SyllabusRecord, WeekItem};

/// Italic line introducing the learning objectives list.
pub const OBJECTIVES_PREAMBLE: &str = "By the end of this course, students will be able to:";

pub(crate) const GRADING_COLUMNS: [&str; 3] = ["Component", "Weight", "Description"];
pub(crate) const SCHEDULE_COLUMNS: [&str; 3] = ["Week", "Topic", "Subtopics & Assignments"];

/// Separates a week's subtopics from its italicised assignments.
pub(crate) const ASSIGNMENT_SEPARATOR: &str = "—";

/// Render a syllabus record as canonical markdown.
pub fn syllabus_to_markdown(record: &SyllabusRecord) -> String {
    let mut w = MarkdownWriter::new();

    w.heading(1, &record.course_title);
    if let Some(code) = non_empty(record.course_code.as_deref()) {
        w.italic(code);
    }
    w.blank();

    w.heading(2, "Course Description");
    w.line(record.course_description.as_str());
    w.blank();

    if let Some(prerequisites) = non_empty(record.prerequisites.as_deref()) {
        w.heading(2, "Prerequisites");
        w.line(prerequisites);
        w.blank();
    }

    w.heading(2, "Learning Objectives");
    w.italic(OBJECTIVES_PREAMBLE);
    for objective in &record.learning_objectives {
        w.bullet(objective);
    }
    w.blank();

    if !record.required_materials.is_empty() {
        w.heading(2, "Required Materials");
        for material in &record.required_materials {
            w.bullet(material);
        }
        w.blank();
    }

    w.heading(2, "Grading Breakdown");
    w.table_header(&GRADING_COLUMNS);
    for item in &record.grading_breakdown {
        w.table_row(&[
            escape_cell(&item.component),
            escape_cell(&item.weight),
            escape_cell(&item.description),
        ]);
    }
    w.blank();

    w.heading(2, "Course Schedule");
    w.table_header(&SCHEDULE_COLUMNS);
    for week in &record.weekly_schedule {
        w.table_row(&[
            week.week.to_string(),
            escape_cell(&week.topic),
            schedule_cell(week),
        ]);
    }
    w.blank();

    w.heading(2, "Course Policies");
    w.heading(3, "Attendance");
    w.line(record.policies.attendance.as_str());
    w.blank();
    w.heading(3, "Late Work");
    w.line(record.policies.late_work.as_str());
    w.blank();
    w.heading(3, "Academic Integrity");
    w.line(record.policies.academic_integrity.as_str());
    w.blank();

    w.finish()
}

/// Third schedule column: comma-joined subtopics, then ` — *assignments*`
/// when the week has any.
fn schedule_cell(week: &WeekItem) -> String {
    let mut cell = escape_cell(&week.subtopics.join(", "));
    if !week.assignments.is_empty() {
        cell.push_str(&format!(
            " {ASSIGNMENT_SEPARATOR} *{}*",
            escape_cell(&week.assignments)
        ));
    }
    cell
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
