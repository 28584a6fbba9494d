//! Syllabus record and its markdown converter pair.

pub mod model;
pub mod parser;
pub mod render;

pub use model::{DEFAULT_COURSE_TITLE, GradingItem, Policies, SyllabusRecord, WeekItem};
pub use parser::markdown_to_syllabus;
pub use render::{OBJECTIVES_PREAMBLE, syllabus_to_markdown};
