//! Decoding of generative backend replies.
//!
//! Replies are asked to be bare JSON but frequently arrive wrapped in a
//! markdown code fence; [`strip_code_fences`] removes it before decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::course::CourseRequest;
use crate::lesson::LessonPlan;
use crate::syllabus::SyllabusRecord;

/// Errors from decoding a generation reply.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("model reply is empty")]
    Empty,

    #[error("model reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The editing assistant's answer to one chat turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Short description of the edit, or the answer to a question.
    #[serde(default)]
    pub explanation: String,
    /// Complete replacement document, or `None` when nothing changed.
    #[serde(default)]
    pub updated_markdown: Option<String>,
}

/// Remove a surrounding ```` ``` ```` or ```` ```json ```` fence and trim.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Decode a generated syllabus and merge the professor's own fields.
///
/// The course code and prerequisites always come from `req`; values the
/// model supplied for them are discarded.
pub fn decode_syllabus(text: &str, req: &CourseRequest) -> Result<SyllabusRecord, ResponseError> {
    let mut record: SyllabusRecord = decode_json(text)?;

    if record.course_code.is_some() || record.prerequisites.is_some() {
        debug!("discarding model-supplied course code / prerequisites");
    }
    record.course_code = professor_value(req.course_code.as_deref());
    record.prerequisites = professor_value(req.prerequisites.as_deref());

    Ok(record)
}

/// Decode a generated lesson plan.
pub fn decode_lesson_plan(text: &str) -> Result<LessonPlan, ResponseError> {
    decode_json(text)
}

/// Decode an editing assistant reply. Never fails: a reply that is not the
/// expected JSON object becomes the explanation, with no edit.
pub fn decode_chat_reply(text: &str) -> ChatReply {
    match serde_json::from_str::<ChatReply>(strip_code_fences(text)) {
        Ok(mut reply) => {
            reply.updated_markdown = reply.updated_markdown.filter(|md| !md.trim().is_empty());
            reply
        }
        Err(e) => {
            warn!(error = %e, "chat reply is not JSON, treating it as a plain answer");
            ChatReply {
                explanation: text.to_string(),
                updated_markdown: None,
            }
        }
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ResponseError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(ResponseError::Empty);
    }
    Ok(serde_json::from_str(body)?)
}

fn professor_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_fences_variants() {
        assert_eq!(strip_code_fences("{}"), "{}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```JSON {}```"), "{}");
        assert_eq!(strip_code_fences("  ```\n{}\n```  "), "{}");
        assert_eq!(strip_code_fences("```"), "");
    }

    #[test]
    fn decode_syllabus_merges_professor_fields() {
        let text = r#"```json
{
  "courseTitle": "Compilers",
  "courseCode": "MODEL 999",
  "courseDescription": "Build one.",
  "weeklySchedule": [{ "week": 1, "topic": "Lexing", "subtopics": ["DFA"], "assignments": "" }]
}
```"#;
        let req = CourseRequest {
            course_code: Some("CS 432".to_owned()),
            prerequisites: Some("  ".to_owned()),
            ..CourseRequest::new("Compilers")
        };
        let record = decode_syllabus(text, &req).expect("should decode");
        assert_eq!(record.course_title, "Compilers");
        assert_eq!(record.course_code.as_deref(), Some("CS 432"));
        assert_eq!(record.prerequisites, None);
        assert_eq!(record.weekly_schedule[0].topic, "Lexing");
    }

    #[test]
    fn decode_syllabus_drops_model_course_code() {
        let text = r#"{ "courseTitle": "X", "courseCode": "INVENTED 1" }"#;
        let record = decode_syllabus(text, &CourseRequest::new("X")).unwrap();
        assert_eq!(record.course_code, None);
    }

    #[test]
    fn decode_syllabus_rejects_empty_and_garbage() {
        let req = CourseRequest::new("X");
        assert!(matches!(decode_syllabus("```json\n```", &req), Err(ResponseError::Empty)));
        assert!(matches!(
            decode_syllabus("Sorry, I can't help.", &req),
            Err(ResponseError::Json(_))
        ));
    }

    #[test]
    fn decode_lesson_plan_reads_outline() {
        let text = r#"{"objectives":["A"],"lessonOutline":[{"activity":"Intro","duration":"5 minutes","description":"Hi"}]}"#;
        let plan = decode_lesson_plan(text).unwrap();
        assert_eq!(plan.objectives, vec!["A"]);
        assert_eq!(plan.lesson_outline[0].activity, "Intro");
        assert!(plan.materials_needed.is_empty());
    }

    #[test]
    fn chat_reply_with_edit() {
        let reply = decode_chat_reply(
            r##"```json
{"explanation": "Added a week.", "updatedMarkdown": "# New"}
```"##,
        );
        assert_eq!(reply.explanation, "Added a week.");
        assert_eq!(reply.updated_markdown.as_deref(), Some("# New"));
    }

    #[test]
    fn chat_reply_without_edit() {
        let reply = decode_chat_reply(r#"{"explanation": "Ten weeks.", "updatedMarkdown": null}"#);
        assert_eq!(reply.explanation, "Ten weeks.");
        assert_eq!(reply.updated_markdown, None);
    }

    #[test]
    fn chat_reply_plain_text_falls_back() {
        let reply = decode_chat_reply("The course covers ten weeks.");
        assert_eq!(reply.explanation, "The course covers ten weeks.");
        assert_eq!(reply.updated_markdown, None);
    }
}
