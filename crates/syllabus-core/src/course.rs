//! Course request: the professor's answers that seed syllabus generation.
//!
//! Each multiple-choice answer is a closed vocabulary with a short wire value
//! (`"high-school"`, `"2x"`, ...) and a longer label used in prompts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from building or validating a [`CourseRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourseRequestError {
    #[error("course topic must not be empty")]
    EmptyTopic,

    #[error("course must run for at least one week")]
    ZeroWeeks,

    #[error("invalid {field} {value:?} (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value, in presentation order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Short value used on the command line and in config files.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Human-readable label used in prompts.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CourseRequestError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(CourseRequestError::UnknownValue {
                        field: $field,
                        value: other.to_owned(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Who the course is for.
    Audience, "audience" {
        HighSchool => ("high-school", "High School students"),
        #[default]
        Undergraduate => ("undergraduate", "Undergraduate students"),
        Graduate => ("graduate", "Graduate students"),
        Professional => ("professional", "Working Professionals"),
    }
}

vocabulary! {
    /// How often the class meets.
    MeetingFrequency, "frequency" {
        Once => ("1x", "once a week"),
        #[default]
        Twice => ("2x", "twice a week"),
        Thrice => ("3x", "three times a week"),
        Async => ("async", "asynchronously (online, self-paced)"),
    }
}

vocabulary! {
    TeachingApproach, "teaching approach" {
        Lecture => ("lecture", "Lecture-based"),
        Project => ("project", "Project-based"),
        Lab => ("lab", "Lab / Hands-on"),
        Seminar => ("seminar", "Discussion / Seminar"),
        #[default]
        Mixed => ("mixed", "Mixed approach"),
    }
}

vocabulary! {
    AssessmentStyle, "assessment style" {
        Exams => ("exams", "Exams-focused"),
        Projects => ("projects", "Projects-focused"),
        #[default]
        Balanced => ("balanced", "Balanced (mix of exams and projects)"),
        Assignments => ("assignments", "Continuous assignments"),
    }
}

impl MeetingFrequency {
    /// Class meetings per week; `None` for self-paced courses.
    pub fn sessions_per_week(self) -> Option<u32> {
        match self {
            Self::Once => Some(1),
            Self::Twice => Some(2),
            Self::Thrice => Some(3),
            Self::Async => None,
        }
    }
}

/// Course length used when none is given.
pub const DEFAULT_DURATION_WEEKS: u32 = 16;

/// Everything the generator needs to draft a syllabus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRequest {
    /// Course subject, e.g. "Introduction to Cloud Computing".
    pub topic: String,
    pub audience: Audience,
    /// Number of weeks; also the number of schedule rows requested.
    pub duration_weeks: u32,
    pub frequency: MeetingFrequency,
    /// Professor's own learning goals. Empty lets the model choose.
    pub goal: String,
    pub teaching: TeachingApproach,
    pub assessment: AssessmentStyle,
    /// Professor-supplied course code, merged into the generated record.
    pub course_code: Option<String>,
    /// Professor-supplied prerequisites, merged into the generated record.
    pub prerequisites: Option<String>,
}

impl CourseRequest {
    /// A request for `topic` with every other answer at its default.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: Audience::default(),
            duration_weeks: DEFAULT_DURATION_WEEKS,
            frequency: MeetingFrequency::default(),
            goal: String::new(),
            teaching: TeachingApproach::default(),
            assessment: AssessmentStyle::default(),
            course_code: None,
            prerequisites: None,
        }
    }

    pub fn validate(&self) -> Result<(), CourseRequestError> {
        if self.topic.trim().is_empty() {
            return Err(CourseRequestError::EmptyTopic);
        }
        if self.duration_weeks == 0 {
            return Err(CourseRequestError::ZeroWeeks);
        }
        Ok(())
    }

    /// `"<n> sessions total"`, or `"self-paced"` for asynchronous courses.
    pub fn total_sessions(&self) -> String {
        match self.frequency.sessions_per_week() {
            Some(per_week) => {
                let total = u64::from(per_week) * u64::from(self.duration_weeks);
                format!("{total} sessions total")
            }
            None => "self-paced".to_string(),
        }
    }
}
