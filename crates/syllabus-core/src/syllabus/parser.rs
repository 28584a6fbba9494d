//! Best-effort markdown to syllabus record parser.
//!
//! Reads text produced by [`super::render`] as well as text that has since
//! been edited by hand or by a model. Each field is extracted by an
//! independent pass; anything that cannot be located degrades to the field's
//! default. Parsing never fails.

use tracing::debug;

use crate::markdown::{self, Sections, cell, heading_text, italic_text, split_sections};

use super::model::{DEFAULT_COURSE_TITLE, GradingItem, Policies, SyllabusRecord, WeekItem};
use super::render::ASSIGNMENT_SEPARATOR;

const DESCRIPTION: &str = "course description";
const PREREQUISITES: &str = "prerequisites";
const OBJECTIVES: &str = "learning objectives";
const MATERIALS: &str = "required materials";
const GRADING: &str = "grading breakdown";
const SCHEDULE: &str = "course schedule";
const POLICIES: &str = "course policies";

const KNOWN_SECTIONS: [&str; 7] = [
    DESCRIPTION,
    PREREQUISITES,
    OBJECTIVES,
    MATERIALS,
    GRADING,
    SCHEDULE,
    POLICIES,
];

/// Parse markdown into a syllabus record.
pub fn markdown_to_syllabus(text: &str) -> SyllabusRecord {
    let text = markdown::strip_bom(text);
    let sections = split_sections(text, 2);
    for key in sections.keys().filter(|k| !KNOWN_SECTIONS.contains(k)) {
        debug!(section = key, "ignoring unrecognised syllabus section");
    }

    let (course_title, course_code) = parse_header(text);

    SyllabusRecord {
        course_title,
        course_code,
        course_description: markdown::body_text(sections.body(DESCRIPTION)),
        prerequisites: parse_prerequisites(&sections),
        learning_objectives: markdown::bullets(sections.body(OBJECTIVES)),
        required_materials: markdown::bullets(sections.body(MATERIALS)),
        grading_breakdown: parse_grading(sections.body(GRADING)),
        weekly_schedule: parse_schedule(sections.body(SCHEDULE)),
        policies: parse_policies(sections.body(POLICIES)),
    }
}

/// Title from the first level-1 heading, and the course code from an italic
/// line directly beneath it.
fn parse_header(text: &str) -> (String, Option<String>) {
    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if let Some(title) = heading_text(line, 1).filter(|t| !t.is_empty()) {
            let code = lines
                .get(i + 1)
                .and_then(|next| italic_text(next))
                .map(str::to_string);
            return (title.to_string(), code);
        }
    }
    (DEFAULT_COURSE_TITLE.to_string(), None)
}

/// Absent unless the Prerequisites section exists with a non-empty body.
fn parse_prerequisites(sections: &Sections) -> Option<String> {
    sections
        .get(PREREQUISITES)
        .map(markdown::body_text)
        .filter(|body| !body.is_empty())
}

fn parse_grading(block: &str) -> Vec<GradingItem> {
    markdown::table_rows(block)
        .into_iter()
        .map(|row| GradingItem {
            component: cell(&row, 0),
            weight: cell(&row, 1),
            description: cell(&row, 2),
        })
        .collect()
}

fn parse_schedule(block: &str) -> Vec<WeekItem> {
    markdown::table_rows(block)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let position = u32::try_from(i + 1).unwrap_or(u32::MAX);
            let week = parse_week_label(&cell(&row, 0)).unwrap_or_else(|| {
                debug!(row = position, label = %cell(&row, 0), "schedule week label not numeric, using row position");
                position
            });
            let (subtopics, assignments) = split_schedule_cell(&cell(&row, 2));
            WeekItem {
                week,
                topic: cell(&row, 1),
                subtopics,
                assignments,
            }
        })
        .collect()
}

/// Leading decimal digits of a week label. Zero counts as no label.
fn parse_week_label(label: &str) -> Option<u32> {
    let digits: String = label
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Split `subtopics — *assignments*` into its parts.
///
/// Without the separator and a non-blank italic tail, the whole cell is
/// subtopics and the assignments are empty. Trailing commas are ignored so
/// that a cell reads the same before and after its subtopics are rejoined.
pub(crate) fn split_schedule_cell(raw: &str) -> (Vec<String>, String) {
    let raw = raw.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    for (idx, _) in raw.match_indices(ASSIGNMENT_SEPARATOR) {
        let rest = raw[idx + ASSIGNMENT_SEPARATOR.len()..].trim();
        let inner = rest
            .strip_prefix('*')
            .and_then(|r| r.strip_suffix('*'))
            .filter(|inner| !inner.contains('*') && !inner.trim().is_empty());
        if let Some(assignments) = inner {
            return (split_subtopics(&raw[..idx]), assignments.trim().to_string());
        }
    }
    (split_subtopics(raw), String::new())
}

fn split_subtopics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_policies(block: &str) -> Policies {
    let sub = split_sections(block, 3);
    Policies {
        attendance: sub.body("attendance").to_string(),
        late_work: sub.body("late work").to_string(),
        academic_integrity: sub.body("academic integrity").to_string(),
    }
}
