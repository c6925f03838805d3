use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidArgumentError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Schema compiler '{program}' failed: {message}")]
    CompilerError { program: String, message: String },

    #[error("Could not run schema compiler '{program}': {source}")]
    CompilerSpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HookError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HookError::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the desktop file was installed under <prefix>/applications"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Re-run the install with permission to write the data root, or set DESTDIR"
                }
                _ => "Check the install prefix and data root paths",
            },
            HookError::InvalidArgumentError { .. } => {
                "Pass the install prefix and data root as the two positional arguments"
            }
            HookError::CompilerError { .. } => "Check the schema files under <prefix>/glib-2.0/schemas",
            HookError::CompilerSpawnError { .. } => {
                "Install glib-compile-schemas or point --schema-compiler at it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = HookError::io(
            "/etc/xdg/autostart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/etc/xdg/autostart"));
        assert!(err.recovery_suggestion().contains("DESTDIR"));
    }

    #[test]
    fn test_missing_source_suggestion() {
        let err = HookError::io(
            "/usr/share/applications/nm-applet.desktop",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.recovery_suggestion().contains("applications"));
    }
}
