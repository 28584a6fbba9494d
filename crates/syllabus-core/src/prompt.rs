//! Prompt construction for the generative backend.
//!
//! Assembles the system and user messages for the three generation calls:
//! drafting a syllabus, drafting one week's lesson plan, and the chat-based
//! editing assistant. This module contains pure logic (no I/O).

use crate::chat::has_lesson_plans;
use crate::course::{Audience, CourseRequest, TeachingApproach};
use crate::syllabus::{SyllabusRecord, WeekItem};

/// System and user messages for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Everything needed to ask for one week's lesson plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPlanRequest {
    pub course_title: String,
    pub week: u32,
    pub topic: String,
    pub subtopics: Vec<String>,
    pub assignments: String,
    pub audience: Audience,
    pub teaching: TeachingApproach,
}

impl LessonPlanRequest {
    /// Build a request for `week` of a parsed syllabus.
    pub fn from_week(
        record: &SyllabusRecord,
        week: &WeekItem,
        audience: Audience,
        teaching: TeachingApproach,
    ) -> Self {
        Self {
            course_title: record.course_title.clone(),
            week: week.week,
            topic: week.topic.clone(),
            subtopics: week.subtopics.clone(),
            assignments: week.assignments.clone(),
            audience,
            teaching,
        }
    }
}

const JSON_ONLY: &str =
    "Always respond with valid JSON only -- no markdown fences, no text outside the JSON object.";

/// JSON shape requested for a generated syllabus.
const SYLLABUS_SCHEMA: &str = r#"{
  "courseTitle": "full descriptive course title",
  "courseDescription": "1 concise paragraph (3-5 sentences) describing the course and what students will experience",
  "learningObjectives": [
    "action-verb phrase only, e.g. 'Design and deploy scalable cloud applications'",
    "..."
  ],
  "requiredMaterials": [
    "Software: ...",
    "Platform: ...",
    "..."
  ],
  "gradingBreakdown": [
    { "component": "component name", "weight": "XX%", "description": "brief description" }
  ],
  "weeklySchedule": [
    { "week": 1, "topic": "week topic title", "subtopics": ["subtopic 1", "subtopic 2"], "assignments": "readings or assignment due" }
  ],
  "policies": {
    "attendance": "clear, specific attendance policy",
    "lateWork": "clear late work and extension policy",
    "academicIntegrity": "academic integrity and AI usage policy"
  }
}"#;

/// JSON shape requested for a generated lesson plan.
const LESSON_PLAN_SCHEMA: &str = r#"{
  "objectives": [
    "specific learning objective for this week (action-verb phrase)"
  ],
  "materialsNeeded": [
    "material or resource needed for this lesson"
  ],
  "lessonOutline": [
    {
      "activity": "activity name",
      "duration": "XX minutes",
      "description": "what happens during this activity"
    }
  ],
  "assessmentHomework": "description of assessment or homework for this week"
}"#;

/// Build the prompt that drafts a complete syllabus.
///
/// The model is told not to invent a course code or prerequisites; the
/// professor's values are merged in after decoding.
pub fn build_syllabus_prompt(req: &CourseRequest) -> Prompt {
    let system = format!(
        "You are an expert academic syllabus designer. Generate comprehensive, realistic, \
         ready-to-use course syllabi. {JSON_ONLY}"
    );

    let audience = req.audience.label();
    let weeks = req.duration_weeks;

    let mut user = String::with_capacity(4096);
    user.push_str("Generate a complete course syllabus:\n\n");
    user.push_str(&format!("Course: {}\n", req.topic));
    user.push_str(&format!("Target Audience: {audience}\n"));
    user.push_str(&format!(
        "Duration: {weeks} weeks, meeting {} ({})\n",
        req.frequency.label(),
        req.total_sessions()
    ));
    user.push_str(&format!("Learning Objectives: {}\n", req.goal));
    user.push_str(&format!("Teaching Approach: {}\n", req.teaching.label()));
    user.push_str(&format!("Assessment Style: {}\n", req.assessment.label()));
    if let Some(prerequisites) = req.prerequisites.as_deref().filter(|p| !p.is_empty()) {
        user.push_str(&format!(
            "Prerequisites (provided by professor): {prerequisites}\n"
        ));
    }
    user.push('\n');

    user.push_str(
        "Return this exact JSON structure -- do NOT invent a course code, credits, or \
         prerequisites; those are omitted from the schema intentionally:\n",
    );
    user.push_str(SYLLABUS_SCHEMA);
    user.push_str("\n\nRequirements:\n");
    user.push_str(&format!("- weeklySchedule must have exactly {weeks} entries\n"));
    user.push_str("- gradingBreakdown weights must sum to 100%\n");
    user.push_str(
        "- learningObjectives: 3-5 items max, each is a short action-verb phrase only \
         (no \"By the end...\" prefix -- that is added when the syllabus is rendered)\n",
    );
    user.push_str(
        "- requiredMaterials: list only software, tools, and platforms genuinely needed -- \
         do NOT invent textbook titles; omit textbooks entirely unless the course truly \
         requires specific reading\n",
    );
    user.push_str(&format!(
        "- Content depth must be appropriate for {audience}\n"
    ));
    user.push_str("- Weekly topics must show progressive complexity\n");
    user.push_str("- Be specific and realistic -- use real field terminology");

    Prompt { system, user }
}

/// Build the prompt that drafts one week's lesson plan.
pub fn build_lesson_plan_prompt(req: &LessonPlanRequest) -> Prompt {
    let system = format!(
        "You are an expert educator who creates detailed, actionable lesson plans. {JSON_ONLY}"
    );

    let assignments = if req.assignments.is_empty() {
        "None"
    } else {
        req.assignments.as_str()
    };

    let mut user = String::with_capacity(2048);
    user.push_str(&format!(
        "Create a detailed lesson plan for Week {} of a course titled {:?}.\n\n",
        req.week, req.course_title
    ));
    user.push_str(&format!("Topic: {}\n", req.topic));
    user.push_str(&format!("Subtopics: {}\n", req.subtopics.join(", ")));
    user.push_str(&format!("Assignments due: {assignments}\n"));
    user.push_str(&format!("Target Audience: {}\n", req.audience.label()));
    user.push_str(&format!("Teaching Approach: {}\n\n", req.teaching.label()));

    user.push_str("Return this exact JSON structure:\n");
    user.push_str(LESSON_PLAN_SCHEMA);
    user.push_str("\n\nRequirements:\n");
    user.push_str("- objectives: 3-5 specific, measurable objectives for this week only\n");
    user.push_str(
        "- materialsNeeded: realistic materials/resources needed (slides, software, handouts, etc.)\n",
    );
    user.push_str(
        "- lessonOutline: 4-8 activities that fill a typical class session \
         (50-75 minutes total), each with a clear duration\n",
    );
    user.push_str(
        "- assessmentHomework: tie back to the assignments listed above if any; \
         otherwise suggest appropriate practice\n",
    );
    user.push_str(
        "- Be specific and practical -- a real instructor should be able to follow this plan",
    );

    Prompt { system, user }
}

/// Build the editing assistant's prompt around the current document and the
/// professor's request.
///
/// `context` is the syllabus, optionally followed by lesson plans as built by
/// [`crate::chat::chat_context`].
pub fn build_chat_prompt(context: &str, message: &str) -> Prompt {
    let mut system = String::with_capacity(context.len() + 1792);
    system.push_str(
        "You are an AI assistant helping a professor edit their course syllabus. \
         The current syllabus is in markdown format below.\n\n",
    );
    system.push_str("<current_syllabus>\n");
    system.push_str(context);
    system.push_str("\n</current_syllabus>\n\n");
    system.push_str(
        "When the user asks you to make changes to the syllabus, respond with a JSON object containing:\n\
         - \"explanation\": A brief, friendly description of what you did (or your answer if no edits needed)\n\
         - \"updatedMarkdown\": The full updated markdown if you made changes, or null if no changes were needed\n\n",
    );
    system.push_str("IMPORTANT:\n");
    system.push_str("- Always return valid JSON with exactly these two keys.\n");
    system.push_str(
        "- When editing, return the COMPLETE updated markdown, not just the changed parts.\n",
    );
    system.push_str(
        "- Preserve the overall structure: # title, ## sections, tables, bullet lists.\n",
    );
    if has_lesson_plans(context) {
        system.push_str(
            "- The syllabus is followed by weekly lesson plans, each starting with a \
             \"# Week <n>\" heading and separated by lines containing only ---. \
             Keep the syllabus first and keep every document and separator in updatedMarkdown.\n",
        );
    }
    system.push_str(
        "- For questions that don't require edits (e.g. \"what topics are covered?\"), \
         set updatedMarkdown to null.\n",
    );
    system.push_str("- Keep your explanations concise (1-2 sentences).\n");
    system.push_str("- Do not wrap the JSON in markdown code fences.");

    Prompt {
        system,
        user: message.trim().to_string(),
    }
}
