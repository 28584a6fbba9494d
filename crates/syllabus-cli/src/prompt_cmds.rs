//! `prompt course|lesson|chat`: print the prompt for one generative call.

use std::path::Path;

use syllabus_core::export::export_file_stem;
use syllabus_core::prompt::{
    LessonPlanRequest, Prompt, build_chat_prompt, build_lesson_plan_prompt, build_syllabus_prompt,
};
use syllabus_core::{CourseRequest, chat_context, lesson_plan_week, markdown_to_syllabus};

use crate::config::{CourseDefaults, CourseOverrides};
use crate::convert_cmds::find_week;
use crate::document_io::{read_input, write_output};

/// Answers to the course wizard that have no configured default.
#[derive(Debug, Default)]
pub struct CourseAnswers {
    pub topic: String,
    pub goal: Option<String>,
    pub course_code: Option<String>,
    pub prerequisites: Option<String>,
}

/// Build the full request from explicit answers plus resolved defaults.
pub fn course_request(
    answers: CourseAnswers,
    overrides: &CourseOverrides,
) -> anyhow::Result<CourseRequest> {
    let defaults = CourseDefaults::resolve(overrides)?;
    let req = CourseRequest {
        topic: answers.topic.trim().to_string(),
        audience: defaults.audience,
        duration_weeks: defaults.weeks,
        frequency: defaults.frequency,
        goal: answers.goal.unwrap_or_default(),
        teaching: defaults.teaching,
        assessment: defaults.assessment,
        course_code: answers.course_code,
        prerequisites: answers.prerequisites,
    };
    req.validate()?;
    Ok(req)
}

pub fn run_prompt_course(
    answers: CourseAnswers,
    overrides: &CourseOverrides,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let req = course_request(answers, overrides)?;
    tracing::debug!(topic = %req.topic, weeks = req.duration_weeks, "building syllabus prompt");

    let prompt = build_syllabus_prompt(&req);
    let name = format!("{} - prompt.txt", export_file_stem(&req.topic));
    write_output(output, &name, &format_prompt(&prompt, json)?)
}

pub fn run_prompt_lesson(
    input: &str,
    week: u32,
    overrides: &CourseOverrides,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let defaults = CourseDefaults::resolve(overrides)?;
    let record = markdown_to_syllabus(&read_input(input)?);
    let item = find_week(&record, week)?;

    let req = LessonPlanRequest::from_week(&record, item, defaults.audience, defaults.teaching);
    let prompt = build_lesson_plan_prompt(&req);
    let name = format!(
        "{} - Week {week} prompt.txt",
        export_file_stem(&record.course_title)
    );
    write_output(output, &name, &format_prompt(&prompt, json)?)
}

pub fn run_prompt_chat(
    input: &str,
    lessons: &[String],
    message: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let plans = read_lesson_plans(lessons)?;
    let context = chat_context(&text, &plans);

    let prompt = build_chat_prompt(&context, message.unwrap_or_default());
    let title = markdown_to_syllabus(&text).course_title;
    let name = format!("{} - chat prompt.txt", export_file_stem(&title));
    write_output(output, &name, &format_prompt(&prompt, json)?)
}

/// Read lesson plan files, keyed by the week in their `# Week <n>` heading.
pub fn read_lesson_plans(paths: &[String]) -> anyhow::Result<Vec<(u32, String)>> {
    paths
        .iter()
        .map(|path| {
            let text = read_input(path)?;
            let Some(week) = lesson_plan_week(&text) else {
                anyhow::bail!("lesson plan {path} has no \"# Week <n>\" heading");
            };
            Ok((week, text))
        })
        .collect()
}

/// Plain text with one labelled block per role, or a `{system, user}` JSON object.
pub fn format_prompt(prompt: &Prompt, json: bool) -> anyhow::Result<String> {
    if json {
        let value = serde_json::json!({
            "system": prompt.system,
            "user": prompt.user,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::with_capacity(prompt.system.len() + prompt.user.len() + 64);
    out.push_str("===== system =====\n");
    out.push_str(prompt.system.trim_end());
    out.push('\n');
    if !prompt.user.is_empty() {
        out.push_str("\n===== user =====\n");
        out.push_str(prompt.user.trim_end());
        out.push('\n');
    }
    Ok(out)
}
