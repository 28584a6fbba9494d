mod config;
mod convert_cmds;
mod decode_cmds;
mod document_io;
mod prompt_cmds;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use syllabus_core::{AssessmentStyle, Audience, MeetingFrequency, TeachingApproach};

use config::CourseOverrides;
use prompt_cmds::CourseAnswers;

#[derive(Parser)]
#[command(
    name = "syllabus",
    version,
    about = "Course syllabus and lesson plan authoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a syllabus config file with the built-in course defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Render a JSON syllabus record as markdown
    Render {
        /// JSON record file ("-" for stdin)
        input: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Parse a markdown syllabus into a JSON record
    Parse {
        /// Markdown syllabus file ("-" for stdin)
        input: String,
        /// Print JSON on one line
        #[arg(long)]
        compact: bool,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Rewrite a hand-edited markdown syllabus in canonical form
    Normalize {
        /// Markdown syllabus file ("-" for stdin)
        input: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Show one week of the schedule as JSON
    Week {
        /// Markdown syllabus file ("-" for stdin)
        input: String,
        /// Week number as labelled in the schedule
        week: u32,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Print the prompt for a generation request
    Prompt {
        #[command(subcommand)]
        command: PromptCommands,
    },
    /// Turn a generation reply into a document
    Decode {
        #[command(subcommand)]
        command: DecodeCommands,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum PromptCommands {
    /// Prompt that drafts a full syllabus
    Course {
        /// Course subject, e.g. "Introduction to Cloud Computing"
        #[arg(long)]
        topic: String,
        /// Your own learning goals for the course
        #[arg(long)]
        goal: Option<String>,
        #[command(flatten)]
        course: CourseArgs,
        #[command(flatten)]
        style: StyleArgs,
        /// Weeks in the course [default: 16]
        #[arg(long)]
        weeks: Option<u32>,
        /// How often the class meets: 1x, 2x, 3x, async [default: 2x]
        #[arg(long)]
        frequency: Option<MeetingFrequency>,
        /// Assessment style: exams, projects, balanced, assignments [default: balanced]
        #[arg(long)]
        assessment: Option<AssessmentStyle>,
        #[command(flatten)]
        prompt_out: PromptOutputArgs,
    },
    /// Prompt that drafts a lesson plan for one week of a syllabus
    Lesson {
        /// Markdown syllabus file ("-" for stdin)
        input: String,
        /// Week number as labelled in the schedule
        week: u32,
        #[command(flatten)]
        style: StyleArgs,
        #[command(flatten)]
        prompt_out: PromptOutputArgs,
    },
    /// Prompt for the syllabus editing assistant
    Chat {
        /// Markdown syllabus file ("-" for stdin)
        input: String,
        /// Lesson plan file to edit alongside the syllabus (repeatable)
        #[arg(long = "lesson", value_name = "FILE")]
        lessons: Vec<String>,
        /// The professor's request to the assistant
        #[arg(long, short)]
        message: Option<String>,
        #[command(flatten)]
        prompt_out: PromptOutputArgs,
    },
}

#[derive(Subcommand)]
enum DecodeCommands {
    /// Decode a syllabus reply into markdown
    Course {
        /// Reply text file ("-" for stdin)
        reply: String,
        #[command(flatten)]
        course: CourseArgs,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Decode a lesson plan reply into markdown
    Lesson {
        /// Reply text file ("-" for stdin)
        reply: String,
        /// Markdown syllabus the lesson belongs to ("-" for stdin)
        syllabus: String,
        /// Week number as labelled in the schedule
        week: u32,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Decode an editing assistant reply, writing any lesson plans it carries
    Chat {
        /// Reply text file ("-" for stdin)
        reply: String,
        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write to this file, or into this directory under the exported name
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PromptOutputArgs {
    /// Print the prompt as a {"system", "user"} JSON object
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    out: OutputArgs,
}

/// Professor-supplied fields merged into the generated syllabus.
#[derive(Args)]
struct CourseArgs {
    /// Course code, e.g. "CS 101"
    #[arg(long)]
    course_code: Option<String>,
    /// Prerequisites, as free text
    #[arg(long)]
    prerequisites: Option<String>,
}

#[derive(Args)]
struct StyleArgs {
    /// Audience: high-school, undergraduate, graduate, professional [default: undergraduate]
    #[arg(long)]
    audience: Option<Audience>,
    /// Teaching approach: lecture, project, lab, seminar, mixed [default: mixed]
    #[arg(long)]
    teaching: Option<TeachingApproach>,
}

// -----------------------------------------------------------------------
// Init
// -----------------------------------------------------------------------

fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::with_builtin_defaults();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    let d = &cfg.defaults;
    for (key, value) in [
        ("audience", d.audience.clone()),
        ("weeks", d.weeks.map(|w| w.to_string())),
        ("frequency", d.frequency.clone()),
        ("teaching", d.teaching.clone()),
        ("assessment", d.assessment.clone()),
    ] {
        if let Some(value) = value {
            println!("  defaults.{key} = {value}");
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Entry point
// -----------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cmd_init(force)?,
        Commands::Render { input, out } => {
            convert_cmds::run_render(&input, out.output.as_deref())?;
        }
        Commands::Parse {
            input,
            compact,
            out,
        } => {
            convert_cmds::run_parse(&input, out.output.as_deref(), compact)?;
        }
        Commands::Normalize { input, out } => {
            convert_cmds::run_normalize(&input, out.output.as_deref())?;
        }
        Commands::Week { input, week, out } => {
            convert_cmds::run_week(&input, week, out.output.as_deref())?;
        }
        Commands::Prompt { command } => run_prompt_command(command)?,
        Commands::Decode { command } => run_decode_command(command)?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "syllabus",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

fn run_prompt_command(command: PromptCommands) -> anyhow::Result<()> {
    match command {
        PromptCommands::Course {
            topic,
            goal,
            course,
            style,
            weeks,
            frequency,
            assessment,
            prompt_out,
        } => {
            let answers = CourseAnswers {
                topic,
                goal,
                course_code: course.course_code,
                prerequisites: course.prerequisites,
            };
            let overrides = CourseOverrides {
                audience: style.audience,
                weeks,
                frequency,
                teaching: style.teaching,
                assessment,
            };
            prompt_cmds::run_prompt_course(
                answers,
                &overrides,
                prompt_out.json,
                prompt_out.out.output.as_deref(),
            )
        }
        PromptCommands::Lesson {
            input,
            week,
            style,
            prompt_out,
        } => {
            let overrides = CourseOverrides {
                audience: style.audience,
                teaching: style.teaching,
                ..CourseOverrides::default()
            };
            prompt_cmds::run_prompt_lesson(
                &input,
                week,
                &overrides,
                prompt_out.json,
                prompt_out.out.output.as_deref(),
            )
        }
        PromptCommands::Chat {
            input,
            lessons,
            message,
            prompt_out,
        } => prompt_cmds::run_prompt_chat(
            &input,
            &lessons,
            message.as_deref(),
            prompt_out.json,
            prompt_out.out.output.as_deref(),
        ),
    }
}

fn run_decode_command(command: DecodeCommands) -> anyhow::Result<()> {
    match command {
        DecodeCommands::Course { reply, course, out } => decode_cmds::run_decode_course(
            &reply,
            course.course_code,
            course.prerequisites,
            out.output.as_deref(),
        ),
        DecodeCommands::Lesson {
            reply,
            syllabus,
            week,
            out,
        } => decode_cmds::run_decode_lesson(&reply, &syllabus, week, out.output.as_deref()),
        DecodeCommands::Chat { reply, out } => {
            decode_cmds::run_decode_chat(&reply, out.output.as_deref())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn vocabulary_flags_parse() {
        let cli = Cli::try_parse_from([
            "syllabus",
            "prompt",
            "course",
            "--topic",
            "Databases",
            "--audience",
            "graduate",
            "--frequency",
            "async",
        ])
        .unwrap();
        match cli.command {
            Commands::Prompt {
                command:
                    PromptCommands::Course {
                        style, frequency, ..
                    },
            } => {
                assert_eq!(style.audience, Some(Audience::Graduate));
                assert_eq!(frequency, Some(MeetingFrequency::Async));
            }
            _ => panic!("expected prompt course"),
        }
    }

    #[test]
    fn unknown_vocabulary_value_lists_choices() {
        let err = Cli::try_parse_from([
            "syllabus", "prompt", "course", "--topic", "X", "--teaching", "osmosis",
        ])
        .err()
        .unwrap();
        let msg = err.to_string();
        assert!(msg.contains("osmosis"), "unexpected error: {msg}");
        assert!(msg.contains("lecture, project, lab, seminar, mixed"), "unexpected error: {msg}");
    }
}
