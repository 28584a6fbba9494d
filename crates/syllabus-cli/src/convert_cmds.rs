//! `render`, `parse`, `normalize` and `week`: conversions between a syllabus
//! record and its markdown text.

use std::path::Path;

use anyhow::Context;

use syllabus_core::export::{export_file_stem, syllabus_file_name};
use syllabus_core::{SyllabusRecord, WeekItem, markdown_to_syllabus, syllabus_to_markdown};

use crate::document_io::{read_input, write_output};

/// JSON record -> markdown.
pub fn run_render(input: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let json = read_input(input)?;
    let record: SyllabusRecord = serde_json::from_str(&json)
        .with_context(|| format!("invalid syllabus record JSON in {input}"))?;

    let text = syllabus_to_markdown(&record);
    write_output(output, &syllabus_file_name(&record.course_title), &text)
}

/// Markdown -> JSON record.
pub fn run_parse(input: &str, output: Option<&Path>, compact: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let record = markdown_to_syllabus(&text);
    tracing::debug!(
        title = %record.course_title,
        weeks = record.weekly_schedule.len(),
        "parsed syllabus"
    );

    let json = if compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    let name = format!("{}.json", export_file_stem(&record.course_title));
    write_output(output, &name, &json)
}

/// Markdown -> canonical markdown.
pub fn run_normalize(input: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let record = markdown_to_syllabus(&text);
    let canonical = syllabus_to_markdown(&record);
    if canonical == text {
        tracing::debug!("document is already canonical");
    }
    write_output(output, &syllabus_file_name(&record.course_title), &canonical)
}

/// Print the schedule row labelled `week` as JSON.
pub fn run_week(input: &str, week: u32, output: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let record = markdown_to_syllabus(&text);
    let item = find_week(&record, week)?;

    let json = serde_json::to_string_pretty(item)?;
    let name = format!("{} - Week {week}.json", export_file_stem(&record.course_title));
    write_output(output, &name, &json)
}

/// The first schedule row labelled `week`, or an error listing the labels present.
pub fn find_week(record: &SyllabusRecord, week: u32) -> anyhow::Result<&WeekItem> {
    if let Some(item) = record.week(week) {
        return Ok(item);
    }
    let labels: Vec<String> = record
        .weekly_schedule
        .iter()
        .map(|w| w.week.to_string())
        .collect();
    if labels.is_empty() {
        anyhow::bail!("week {week} not found: the syllabus has no schedule");
    }
    anyhow::bail!(
        "week {week} not found in the schedule (weeks: {})",
        labels.join(", ")
    )
}
