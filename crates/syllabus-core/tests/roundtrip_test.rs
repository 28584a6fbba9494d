//! Integration tests for the syllabus markdown converter pair.
//!
//! Exercises the public API end to end: exact reconstruction of records from
//! their rendered text, totality of the parser over awkward input, and
//! tolerance of hand-edited documents.

use syllabus_core::syllabus::DEFAULT_COURSE_TITLE;
use syllabus_core::{
    GradingItem, Policies, SyllabusRecord, WeekItem, markdown_to_syllabus, syllabus_to_markdown,
};

// -----------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------

fn intro_to_x() -> SyllabusRecord {
    SyllabusRecord {
        course_title: "Intro to X".to_owned(),
        course_code: Some("CS 101".to_owned()),
        course_description: "A course.".to_owned(),
        prerequisites: None,
        learning_objectives: vec!["Do A".to_owned()],
        required_materials: vec![],
        grading_breakdown: vec![GradingItem {
            component: "Exam".to_owned(),
            weight: "50%".to_owned(),
            description: "Final".to_owned(),
        }],
        weekly_schedule: vec![WeekItem {
            week: 1,
            topic: "Basics".to_owned(),
            subtopics: vec!["Intro".to_owned()],
            assignments: "Read ch.1".to_owned(),
        }],
        policies: Policies {
            attendance: "Required".to_owned(),
            late_work: "None".to_owned(),
            academic_integrity: "Strict".to_owned(),
        },
    }
}

fn full_record() -> SyllabusRecord {
    SyllabusRecord {
        course_title: "Introduction to Cloud Computing".to_owned(),
        course_code: Some("CLD 210".to_owned()),
        course_description: "Students design, deploy and operate services.\n\nThe second half focuses on reliability."
            .to_owned(),
        prerequisites: Some("Intro to Programming; basic Linux".to_owned()),
        learning_objectives: vec![
            "Design scalable cloud architectures".to_owned(),
            "Deploy containerized workloads".to_owned(),
            "Evaluate cost and reliability trade-offs".to_owned(),
        ],
        required_materials: vec![
            "Platform: AWS Educate account".to_owned(),
            "Software: Docker Desktop".to_owned(),
        ],
        grading_breakdown: vec![
            GradingItem {
                component: "Labs".to_owned(),
                weight: "40%".to_owned(),
                description: "Weekly hands-on labs".to_owned(),
            },
            GradingItem {
                component: "Labs".to_owned(),
                weight: "10%".to_owned(),
                description: "Bonus labs, pass | fail".to_owned(),
            },
            GradingItem {
                component: "Final Project".to_owned(),
                weight: "50%".to_owned(),
                description: String::new(),
            },
        ],
        weekly_schedule: vec![
            WeekItem {
                week: 1,
                topic: "What is the cloud?".to_owned(),
                subtopics: vec!["History".to_owned(), "Service models".to_owned()],
                assignments: "Read chapter 1".to_owned(),
            },
            WeekItem {
                week: 2,
                topic: "Virtualization".to_owned(),
                subtopics: vec!["Hypervisors".to_owned()],
                assignments: String::new(),
            },
            WeekItem {
                week: 3,
                topic: "Containers".to_owned(),
                subtopics: vec![],
                assignments: "Lab 1 due".to_owned(),
            },
            WeekItem {
                week: 3,
                topic: "Containers, continued".to_owned(),
                subtopics: vec![],
                assignments: String::new(),
            },
        ],
        policies: Policies {
            attendance: "Attendance is expected.\nTwo absences are excused.".to_owned(),
            late_work: "10% per day, up to three days.".to_owned(),
            academic_integrity: String::new(),
        },
    }
}

// -----------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------

#[test]
fn end_to_end_example_reparses_exactly() {
    let record = intro_to_x();
    let text = syllabus_to_markdown(&record);
    assert_eq!(markdown_to_syllabus(&text), record);
}

#[test]
fn full_record_round_trips() {
    let record = full_record();
    let text = syllabus_to_markdown(&record);
    assert_eq!(markdown_to_syllabus(&text), record);
}

#[test]
fn default_record_round_trips() {
    let record = SyllabusRecord::default();
    let text = syllabus_to_markdown(&record);
    assert_eq!(markdown_to_syllabus(&text), record);
}

#[test]
fn optional_sections_round_trip_both_ways() {
    let with = SyllabusRecord {
        prerequisites: Some("Linear algebra".to_owned()),
        required_materials: vec!["Graphing calculator".to_owned()],
        ..intro_to_x()
    };
    assert_eq!(markdown_to_syllabus(&syllabus_to_markdown(&with)), with);

    let without = SyllabusRecord {
        course_code: None,
        ..intro_to_x()
    };
    assert_eq!(markdown_to_syllabus(&syllabus_to_markdown(&without)), without);
}

#[test]
fn pipe_in_grading_description_survives() {
    let record = SyllabusRecord {
        grading_breakdown: vec![GradingItem {
            component: "Participation".to_owned(),
            weight: "10%".to_owned(),
            description: "In-class | online".to_owned(),
        }],
        ..intro_to_x()
    };
    let parsed = markdown_to_syllabus(&syllabus_to_markdown(&record));
    assert_eq!(parsed.grading_breakdown[0].description, "In-class | online");
}

#[test]
fn pipes_in_schedule_cells_survive() {
    let record = SyllabusRecord {
        weekly_schedule: vec![WeekItem {
            week: 4,
            topic: "Pipes | filters".to_owned(),
            subtopics: vec!["a|b".to_owned(), "c".to_owned()],
            assignments: "Write a | pipeline".to_owned(),
        }],
        ..intro_to_x()
    };
    assert_eq!(markdown_to_syllabus(&syllabus_to_markdown(&record)), record);
}

#[test]
fn parse_render_is_idempotent() {
    let once = markdown_to_syllabus(&syllabus_to_markdown(&full_record()));
    let twice = markdown_to_syllabus(&syllabus_to_markdown(&once));
    assert_eq!(once, twice);
}

#[test]
fn render_of_reparse_is_stable_for_hand_edited_text() {
    let edited = "# Edited\n## course schedule\n| W | T | S |\n|---|---|---|\n| x | Topic | a, b — *hw* |\n## Notes\nignored\n";
    let first = syllabus_to_markdown(&markdown_to_syllabus(edited));
    let second = syllabus_to_markdown(&markdown_to_syllabus(&first));
    assert_eq!(first, second);
}

// -----------------------------------------------------------------------
// Lossy cases
// -----------------------------------------------------------------------

#[test]
fn newlines_in_cells_become_spaces() {
    let record = SyllabusRecord {
        grading_breakdown: vec![GradingItem {
            component: "Essay".to_owned(),
            weight: "20%".to_owned(),
            description: "Two parts:\nthesis and draft".to_owned(),
        }],
        ..intro_to_x()
    };
    let parsed = markdown_to_syllabus(&syllabus_to_markdown(&record));
    assert_eq!(parsed.grading_breakdown[0].description, "Two parts: thesis and draft");
}

#[test]
fn commas_in_subtopics_split_on_reparse() {
    let record = SyllabusRecord {
        weekly_schedule: vec![WeekItem {
            week: 1,
            topic: "T".to_owned(),
            subtopics: vec!["Sets, relations".to_owned()],
            assignments: String::new(),
        }],
        ..intro_to_x()
    };
    let parsed = markdown_to_syllabus(&syllabus_to_markdown(&record));
    assert_eq!(parsed.weekly_schedule[0].subtopics, vec!["Sets", "relations"]);
}

// -----------------------------------------------------------------------
// Totality and defaults
// -----------------------------------------------------------------------

#[test]
fn parse_is_total_over_awkward_input() {
    let inputs = [
        "",
        "\n\n\n",
        "plain prose with no structure at all",
        "#",
        "# ",
        "##",
        "## Grading Breakdown",
        "## Grading Breakdown\n| Component | Weight |",
        "## Course Schedule\n| Week | Topic | S |\n| --- | --- | --- |\n|",
        "## Course Schedule\n| Week | Topic | S |\n| --- | --- | --- |\n| 99999999999999999999 | x | — * |",
        "## Course Policies\n###\n### \n#### Attendance\nx",
        "\u{feff}# Title with BOM\r\n*CODE*\r\n",
        "| | | |\n| | | |\n| | | |",
        "## Course Schedule\n| 1 | a | \\",
    ];
    for input in inputs {
        let record = markdown_to_syllabus(input);
        assert!(!record.course_title.is_empty(), "input {input:?}");
    }
}

#[test]
fn byte_order_mark_and_crlf_do_not_hide_the_header() {
    let record = markdown_to_syllabus("\u{feff}# Title with BOM\r\n*CODE*\r\n");
    assert_eq!(record.course_title, "Title with BOM");
    assert_eq!(record.course_code.as_deref(), Some("CODE"));
}

#[test]
fn truncated_schedule_row_uses_position_and_empty_cells() {
    let md = "## Course Schedule\n| Week | Topic | S |\n| --- | --- | --- |\n| 1 | Intro | a |\n| oops";
    let schedule = markdown_to_syllabus(md).weekly_schedule;
    assert_eq!(schedule.len(), 2);
    assert_eq!(
        schedule[1],
        WeekItem {
            week: 2,
            topic: String::new(),
            subtopics: vec![],
            assignments: String::new(),
        }
    );
}

#[test]
fn missing_sections_default() {
    let record = markdown_to_syllabus("# Only a title\n");
    assert_eq!(record.course_title, "Only a title");
    assert_eq!(record.prerequisites, None);
    assert!(record.required_materials.is_empty());
    assert!(record.learning_objectives.is_empty());
    assert_eq!(record.policies, Policies::default());
}

#[test]
fn untitled_document_gets_default_title() {
    let record = markdown_to_syllabus("## Course Description\nNo title here.\n");
    assert_eq!(record.course_title, DEFAULT_COURSE_TITLE);
    assert_eq!(record.course_description, "No title here.");
}

// -----------------------------------------------------------------------
// Hand-edited documents
// -----------------------------------------------------------------------

#[test]
fn hand_edited_document_is_read_best_effort() {
    let md = "\
Some notes the professor left at the top.

# Operating Systems
*CS 350*

## Course Description
Processes, memory and files.

## Office Hours
Mondays 2-4pm.

## Learning Objectives
*By the end of this course, students will be able to:*
* Explain scheduling
- Implement a shell

## Grading Breakdown
|Component|Weight|Description|
|:--|:--|:--|
|Projects|60%|Four projects|
|Exams|40%|

## Course Schedule
| Week | Topic | Subtopics & Assignments |
| --- | --- | --- |
| 1 | Processes | fork, exec — *Project 0* |
| 1 | Threads | pthreads |
| Week 3 | Memory | paging,  , TLBs |

## course policies
### Late Work
No late work.
";
    let record = markdown_to_syllabus(md);
    assert_eq!(record.course_title, "Operating Systems");
    assert_eq!(record.course_code.as_deref(), Some("CS 350"));
    assert_eq!(record.course_description, "Processes, memory and files.");
    assert_eq!(
        record.learning_objectives,
        vec!["Explain scheduling", "Implement a shell"]
    );
    assert_eq!(record.grading_breakdown.len(), 2);
    assert_eq!(record.grading_breakdown[1].description, "");
    assert_eq!(record.weekly_schedule[0].assignments, "Project 0");
    assert_eq!(record.weekly_schedule[0].subtopics, vec!["fork", "exec"]);
    assert_eq!(record.weekly_schedule[1].week, 1);
    assert_eq!(record.weekly_schedule[2].week, 3);
    assert_eq!(record.weekly_schedule[2].subtopics, vec!["paging", "TLBs"]);
    assert_eq!(record.policies.late_work, "No late work.");
    assert_eq!(record.policies.attendance, "");
    assert_eq!(record.week(1).map(|w| w.topic.as_str()), Some("Processes"));
}
