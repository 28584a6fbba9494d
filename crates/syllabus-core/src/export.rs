//! File naming for exported documents.

/// Stem used when a course title has no usable characters.
const FALLBACK_STEM: &str = "syllabus";

/// File stem derived from a course title: ASCII letters, digits and
/// whitespace are kept, everything else is dropped.
pub fn export_file_stem(course_title: &str) -> String {
    let stem: String = course_title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let stem = stem.trim();
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// `"<stem>.md"`
pub fn syllabus_file_name(course_title: &str) -> String {
    format!("{}.md", export_file_stem(course_title))
}

/// `"<stem> - Week <n> Lesson Plan.md"`
pub fn lesson_plan_file_name(course_title: &str, week: u32) -> String {
    format!(
        "{} - Week {week} Lesson Plan.md",
        export_file_stem(course_title)
    )
}
