pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{compiler::GlibSchemaCompiler, engine::PostInstallEngine, hook::NmAppletHook};
pub use domain::model::{InstallLayout, RunReport, StepOutcome, DESKTOP_FILE};
pub use utils::error::{HookError, Result};
