//! `decode course|lesson|chat`: turn a generative backend reply into a document.

use std::path::Path;

use anyhow::Context;

use syllabus_core::export::{lesson_plan_file_name, syllabus_file_name};
use syllabus_core::response::{decode_chat_reply, decode_lesson_plan, decode_syllabus};
use syllabus_core::{
    CourseRequest, lesson_plan_to_markdown, markdown_to_syllabus, split_chat_document,
    syllabus_to_markdown,
};

use crate::convert_cmds::find_week;
use crate::document_io::{read_input, write_output};

/// Decode a syllabus generation reply into markdown, merging the
/// professor's course code and prerequisites.
pub fn run_decode_course(
    reply: &str,
    course_code: Option<String>,
    prerequisites: Option<String>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let text = read_input(reply)?;
    let req = CourseRequest {
        course_code,
        prerequisites,
        ..CourseRequest::new("")
    };
    let record = decode_syllabus(&text, &req)
        .with_context(|| format!("failed to decode syllabus reply from {reply}"))?;
    tracing::debug!(
        title = %record.course_title,
        weeks = record.weekly_schedule.len(),
        "decoded syllabus"
    );

    let markdown = syllabus_to_markdown(&record);
    write_output(output, &syllabus_file_name(&record.course_title), &markdown)
}

/// Decode a lesson-plan reply for `week` of the given syllabus.
pub fn run_decode_lesson(
    reply: &str,
    syllabus: &str,
    week: u32,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    if reply == syllabus && reply == crate::document_io::STDIN {
        anyhow::bail!("the reply and the syllabus cannot both be read from stdin");
    }
    let record = markdown_to_syllabus(&read_input(syllabus)?);
    let item = find_week(&record, week)?;

    let text = read_input(reply)?;
    let plan = decode_lesson_plan(&text)
        .with_context(|| format!("failed to decode lesson plan reply from {reply}"))?;

    let markdown = lesson_plan_to_markdown(&plan, item.week, &item.topic, &record.course_title);
    write_output(
        output,
        &lesson_plan_file_name(&record.course_title, week),
        &markdown,
    )
}

/// Decode an editing-assistant reply. The explanation goes to stderr. The
/// updated syllabus goes to the output; lesson plans carried in the same
/// document are written next to it under their export names.
pub fn run_decode_chat(reply: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(reply)?;
    let decoded = decode_chat_reply(&text);

    eprintln!("{}", decoded.explanation.trim_end());

    let Some(markdown) = decoded.updated_markdown else {
        eprintln!("(no changes to the syllabus)");
        return Ok(());
    };

    let (syllabus, plans) = split_chat_document(&markdown);
    let plan_dir = if plans.is_empty() {
        None
    } else {
        Some(lesson_plan_dir(output, &plans)?)
    };

    let title = markdown_to_syllabus(&syllabus).course_title;
    if !syllabus.is_empty() {
        write_output(output, &syllabus_file_name(&title), &syllabus)?;
    }

    if let Some(dir) = plan_dir {
        for (week, plan) in &plans {
            tracing::debug!(week, "writing edited lesson plan");
            write_output(Some(dir), &lesson_plan_file_name(&title, *week), plan)?;
        }
    }
    Ok(())
}

/// Directory that receives edited lesson plans: `output` itself when it is a
/// directory, otherwise the directory holding the output file.
fn lesson_plan_dir<'a>(
    output: Option<&'a Path>,
    plans: &[(u32, String)],
) -> anyhow::Result<&'a Path> {
    let Some(output) = output else {
        let weeks: Vec<String> = plans.iter().map(|(week, _)| week.to_string()).collect();
        anyhow::bail!(
            "reply edits lesson plans for weeks {}; pass --output <dir>",
            weeks.join(", ")
        );
    };
    if output.is_dir() {
        return Ok(output);
    }
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent),
        _ => Ok(Path::new(".")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_need_an_output() {
        let plans = vec![(2, "# Week 2".to_owned()), (5, "# Week 5".to_owned())];
        let msg = lesson_plan_dir(None, &plans).unwrap_err().to_string();
        assert!(msg.contains("weeks 2, 5"), "unexpected error: {msg}");
    }

    #[test]
    fn plans_go_next_to_output_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let plans = vec![(1, "# Week 1".to_owned())];

        assert_eq!(lesson_plan_dir(Some(tmp.path()), &plans).unwrap(), tmp.path());

        let file = tmp.path().join("course.md");
        assert_eq!(lesson_plan_dir(Some(&file), &plans).unwrap(), tmp.path());
        assert_eq!(
            lesson_plan_dir(Some(Path::new("course.md")), &plans).unwrap(),
            Path::new(".")
        );
    }
}
