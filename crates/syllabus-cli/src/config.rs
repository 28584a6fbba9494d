//! Configuration file management for syllabus.
//!
//! Provides a TOML-based config file at `~/.config/syllabus/config.toml`
//! holding the course defaults used when a flag is not given, and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use syllabus_core::course::DEFAULT_DURATION_WEEKS;
use syllabus_core::{AssessmentStyle, Audience, MeetingFrequency, TeachingApproach};

pub const ENV_AUDIENCE: &str = "SYLLABUS_AUDIENCE";
pub const ENV_WEEKS: &str = "SYLLABUS_WEEKS";
pub const ENV_FREQUENCY: &str = "SYLLABUS_FREQUENCY";
pub const ENV_TEACHING: &str = "SYLLABUS_TEACHING";
pub const ENV_ASSESSMENT: &str = "SYLLABUS_ASSESSMENT";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[defaults]`: every key is optional; absent keys fall through to the
/// built-in default.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
}

impl ConfigFile {
    /// The file written by `syllabus init`: every default spelled out.
    pub fn with_builtin_defaults() -> Self {
        Self {
            defaults: DefaultsSection {
                audience: Some(Audience::default().to_string()),
                weeks: Some(DEFAULT_DURATION_WEEKS),
                frequency: Some(MeetingFrequency::default().to_string()),
                teaching: Some(TeachingApproach::default().to_string()),
                assessment: Some(AssessmentStyle::default().to_string()),
            },
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the syllabus config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/syllabus` or `~/.config/syllabus`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("syllabus");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("syllabus")
}

/// Return the path to the syllabus config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns `Ok(None)` if it does not exist.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Course answers given explicitly on the command line.
#[derive(Debug, Default, Clone)]
pub struct CourseOverrides {
    pub audience: Option<Audience>,
    pub weeks: Option<u32>,
    pub frequency: Option<MeetingFrequency>,
    pub teaching: Option<TeachingApproach>,
    pub assessment: Option<AssessmentStyle>,
}

/// Fully resolved course defaults, ready for use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDefaults {
    pub audience: Audience,
    pub weeks: u32,
    pub frequency: MeetingFrequency,
    pub teaching: TeachingApproach,
    pub assessment: AssessmentStyle,
}

impl CourseDefaults {
    /// Resolve each answer using the chain: CLI flag > env var > config file > default.
    pub fn resolve(cli: &CourseOverrides) -> Result<Self> {
        let file = load_config()?.unwrap_or_default().defaults;

        let resolved = Self {
            audience: resolve_field(cli.audience, ENV_AUDIENCE, file.audience)?
                .unwrap_or_default(),
            weeks: resolve_field(cli.weeks, ENV_WEEKS, file.weeks.map(|w| w.to_string()))?
                .unwrap_or(DEFAULT_DURATION_WEEKS),
            frequency: resolve_field(cli.frequency, ENV_FREQUENCY, file.frequency)?
                .unwrap_or_default(),
            teaching: resolve_field(cli.teaching, ENV_TEACHING, file.teaching)?
                .unwrap_or_default(),
            assessment: resolve_field(cli.assessment, ENV_ASSESSMENT, file.assessment)?
                .unwrap_or_default(),
        };
        tracing::debug!(?resolved, "resolved course defaults");
        Ok(resolved)
    }
}

/// Resolve one value from the first source that supplies it, or `None`.
fn resolve_field<T>(cli: Option<T>, env_key: &str, file_value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if cli.is_some() {
        return Ok(cli);
    }
    if let Ok(raw) = std::env::var(env_key) {
        let value = raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value in {env_key} env var"))?;
        return Ok(Some(value));
    }
    if let Some(raw) = file_value {
        let value = raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value in config file {}", config_path().display()))?;
        return Ok(Some(value));
    }
    Ok(None)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
