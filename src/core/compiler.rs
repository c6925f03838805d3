use crate::domain::ports::SchemaCompiler;
use crate::utils::error::{HookError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs `glib-compile-schemas` (or a substitute program) on a schema directory.
#[derive(Debug, Clone)]
pub struct GlibSchemaCompiler {
    program: String,
}

impl GlibSchemaCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl SchemaCompiler for GlibSchemaCompiler {
    async fn compile(&self, schema_dir: &Path) -> Result<()> {
        tracing::debug!("Running {} {}", self.program, schema_dir.display());

        let status = Command::new(&self.program)
            .arg(schema_dir)
            .status()
            .await
            .map_err(|e| HookError::CompilerSpawnError {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(HookError::CompilerError {
                program: self.program.clone(),
                message: format!("exited with {}", status),
            });
        }

        Ok(())
    }
}
