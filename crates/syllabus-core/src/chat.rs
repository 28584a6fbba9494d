//! The combined document the editing assistant works on.
//!
//! The syllabus comes first, followed by each lesson plan, separated by
//! `---` lines. An edited document comes back in the same layout and is
//! split apart again; lesson plans are recognised by their `# Week <n>`
//! heading.

use tracing::debug;

use crate::lesson::lesson_plan_week;

/// Placed between the documents of a chat context.
pub const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Matched when splitting an edited chat document.
const SPLIT_MARKER: &str = "\n---\n";

/// Join a syllabus and its lesson plans into one editing context.
///
/// Lesson plans are ordered by week.
pub fn chat_context(syllabus: &str, lesson_plans: &[(u32, String)]) -> String {
    let mut plans: Vec<&(u32, String)> = lesson_plans.iter().collect();
    plans.sort_by_key(|(week, _)| *week);

    let mut context = syllabus.trim_end().to_string();
    for (_, plan) in plans {
        context.push_str(DOCUMENT_SEPARATOR);
        context.push_str(plan.trim());
    }
    context
}

/// Whether `context` carries lesson plans after the syllabus.
pub fn has_lesson_plans(context: &str) -> bool {
    context.contains(SPLIT_MARKER)
}

/// Split an edited chat document into the syllabus and the lesson plans it
/// contains, keyed by week.
///
/// The first non-blank chunk is the syllabus. Later chunks without a
/// `# Week <n>` heading are dropped; when a week appears twice the later
/// chunk wins.
pub fn split_chat_document(markdown: &str) -> (String, Vec<(u32, String)>) {
    let normalized = markdown.replace("\r\n", "\n");
    let mut chunks = normalized
        .split(SPLIT_MARKER)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty());

    let syllabus = chunks.next().unwrap_or_default().to_string();

    let mut plans: Vec<(u32, String)> = Vec::new();
    for chunk in chunks {
        let Some(week) = lesson_plan_week(chunk) else {
            debug!(chunk_len = chunk.len(), "dropping chat chunk without a week heading");
            continue;
        };
        match plans.iter_mut().find(|(w, _)| *w == week) {
            Some(existing) => existing.1 = chunk.to_string(),
            None => plans.push((week, chunk.to_string())),
        }
    }

    (syllabus, plans)
}
