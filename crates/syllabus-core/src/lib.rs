//! Core logic for syllabus authoring.
//!
//! The editable markdown text is the source of truth for a syllabus; the
//! typed [`SyllabusRecord`] is recomputed from it on demand. This crate holds
//! the converter pair between the two, the lesson-plan converter built on the
//! same grammar, prompt construction for the generative backend, and decoding
//! of its replies. Everything here is pure: no I/O, no network.

pub mod chat;
pub mod course;
pub mod export;
pub mod lesson;
pub mod markdown;
pub mod prompt;
pub mod response;
pub mod syllabus;

pub use chat::{chat_context, split_chat_document};
pub use course::{
    AssessmentStyle, Audience, CourseRequest, CourseRequestError, MeetingFrequency,
    TeachingApproach,
};
pub use lesson::{
    LessonActivity, LessonPlan, lesson_plan_to_markdown, lesson_plan_week, markdown_to_lesson_plan,
};
pub use syllabus::{
    GradingItem, Policies, SyllabusRecord, WeekItem, markdown_to_syllabus, syllabus_to_markdown,
};
