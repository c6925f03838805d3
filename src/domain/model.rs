use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the desktop entry that gets installed as an autostart entry.
pub const DESKTOP_FILE: &str = "nm-applet.desktop";

/// Paths derived from the install prefix and the data root handed over by
/// the build system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    prefix: PathBuf,
    data_root: PathBuf,
}

impl InstallLayout {
    pub fn new(prefix: impl Into<PathBuf>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            data_root: data_root.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// `<prefix>/glib-2.0/schemas`
    pub fn schema_dir(&self) -> PathBuf {
        self.prefix.join("glib-2.0").join("schemas")
    }

    /// `<prefix>/applications/nm-applet.desktop`
    pub fn desktop_source(&self) -> PathBuf {
        self.prefix.join("applications").join(DESKTOP_FILE)
    }

    /// `<data_root>/xdg/autostart`
    pub fn autostart_dir(&self) -> PathBuf {
        self.data_root.join("xdg").join("autostart")
    }

    /// `<data_root>/xdg/autostart/nm-applet.desktop`
    pub fn autostart_target(&self) -> PathBuf {
        self.autostart_dir().join(DESKTOP_FILE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Skipped { reason: String },
    Planned { description: String },
    Completed { description: String },
    /// Only produced by steps whose failure does not abort the run.
    Failed { description: String },
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed { .. })
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Skipped { reason } => write!(f, "skipped ({})", reason),
            StepOutcome::Planned { description } => write!(f, "would {}", description),
            StepOutcome::Completed { description } => write!(f, "{}", description),
            StepOutcome::Failed { description } => write!(f, "failed: {}", description),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub staged: bool,
    pub compile: StepOutcome,
    pub stage: StepOutcome,
}
