pub mod compiler;
pub mod engine;
pub mod hook;

pub use crate::domain::model::{InstallLayout, RunReport, StepOutcome};
pub use crate::domain::ports::{ConfigProvider, PostInstall, SchemaCompiler, Storage};
pub use crate::utils::error::Result;
