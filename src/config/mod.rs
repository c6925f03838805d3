pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::model::InstallLayout;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_SCHEMA_COMPILER: &str = "glib-compile-schemas";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "nm-applet-post-install")]
#[command(about = "Compile GSettings schemas and install the nm-applet autostart entry")]
pub struct CliConfig {
    /// Install prefix holding glib-2.0/schemas and applications/
    pub prefix: String,

    /// Data root that receives xdg/autostart
    pub data_root: String,

    /// Staging root set by packaging tools; suppresses every side effect
    #[arg(long, env = "DESTDIR", hide = true)]
    pub destdir: Option<String>,

    #[arg(long, default_value = DEFAULT_SCHEMA_COMPILER)]
    pub schema_compiler: String,

    /// Log what would happen without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn new(prefix: impl Into<String>, data_root: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            data_root: data_root.into(),
            destdir: None,
            schema_compiler: DEFAULT_SCHEMA_COMPILER.to_string(),
            dry_run: false,
            verbose: false,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn layout(&self) -> InstallLayout {
        InstallLayout::new(&self.prefix, &self.data_root)
    }

    fn staging_root(&self) -> Option<&str> {
        self.destdir.as_deref()
    }

    fn schema_compiler(&self) -> &str {
        &self.schema_compiler
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("prefix", &self.prefix)?;
        validate_path("data_root", &self.data_root)?;
        validate_non_empty_string("schema_compiler", &self.schema_compiler)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let config =
            CliConfig::try_parse_from(["nm-applet-post-install", "/usr/share", "/etc"]).unwrap();

        assert_eq!(config.prefix, "/usr/share");
        assert_eq!(config.data_root, "/etc");
        assert_eq!(config.schema_compiler, DEFAULT_SCHEMA_COMPILER);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_requires_both_positionals() {
        assert!(CliConfig::try_parse_from(["nm-applet-post-install", "/usr/share"]).is_err());
    }

    #[test]
    fn test_destdir_flag_marks_staged() {
        let config = CliConfig::try_parse_from([
            "nm-applet-post-install",
            "/usr/share",
            "/etc",
            "--destdir",
            "/tmp/stage",
        ])
        .unwrap();

        assert_eq!(config.staging_root(), Some("/tmp/stage"));
        assert!(config.is_staged());
    }

    #[test]
    fn test_empty_destdir_is_not_staged() {
        let mut config = CliConfig::new("/usr/share", "/etc");
        assert!(!config.is_staged());

        config.destdir = Some(String::new());
        assert!(!config.is_staged());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let config = CliConfig::new("", "/etc");
        assert!(config.validate().is_err());
    }
}
