use crate::domain::PomodoroSettings;
use crate::validate::{validate_long_timer, validate_short_timer, validate_work_timer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the `.studydesk` lookup when set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_notifications")]
    pub notifications: bool,

    #[serde(default)]
    pub allow_auto_dnd: bool,

    #[serde(default)]
    pub pomodoro: PomodoroConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_sessions")]
    pub sessions: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notifications() -> bool {
    true
}

fn default_work_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_sessions() -> u32 {
    4
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sessions: default_sessions(),
        }
    }
}

impl PomodoroConfig {
    pub fn settings(&self) -> PomodoroSettings {
        PomodoroSettings {
            work_minutes: self.work_minutes,
            short_break_minutes: self.short_break_minutes,
            long_break_minutes: self.long_break_minutes,
            sessions: self.sessions,
        }
    }

    /// Check durations against the allowed ranges
    pub fn validate(&self) -> Result<()> {
        if !validate_work_timer(i64::from(self.work_minutes)) {
            anyhow::bail!("Work sessions must be 15-60 minutes (got {})", self.work_minutes);
        }
        if !validate_short_timer(i64::from(self.short_break_minutes)) {
            anyhow::bail!(
                "Short breaks must be 3-15 minutes (got {})",
                self.short_break_minutes
            );
        }
        if !validate_long_timer(i64::from(self.long_break_minutes)) {
            anyhow::bail!(
                "Long breaks must be 10-45 minutes (got {})",
                self.long_break_minutes
            );
        }
        if self.sessions == 0 {
            anyhow::bail!("At least one work session is required");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
            notifications: default_notifications(),
            allow_auto_dnd: false,
            pomodoro: PomodoroConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults. A file that cannot be read or fails to
    /// parse is reported on stderr and also yields defaults, since logging is
    /// not up yet.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path(),
        };

        let contents = match read_config_file(&path) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Self::default(),
            Err(e) => {
                eprintln!("Warning: {:#}; using default settings", e);
                return Self::default();
            }
        };

        let mut config: Config = toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Error parsing config file {}: {}", path.display(), e);
            Self::default()
        });

        if let Some(dir) = &config.data_dir {
            config.data_dir = Some(expand_tilde(dir));
        }

        config
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        crate::persistence::atomic_write(path, &toml_string)
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("studydesk");
        path.push("config.toml");
        path
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Read the config file; `Ok(None)` when it does not exist
fn read_config_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read config file: {}", path.display())),
    }
}
