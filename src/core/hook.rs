use crate::core::{ConfigProvider, PostInstall, SchemaCompiler, StepOutcome, Storage};
use crate::domain::model::InstallLayout;
use crate::utils::error::{HookError, Result};

/// Post-install hook for nm-applet: schema compilation plus the autostart entry.
pub struct NmAppletHook<S: Storage, C: SchemaCompiler, P: ConfigProvider> {
    storage: S,
    compiler: C,
    config: P,
    layout: InstallLayout,
}

impl<S: Storage, C: SchemaCompiler, P: ConfigProvider> NmAppletHook<S, C, P> {
    pub fn new(storage: S, compiler: C, config: P) -> Self {
        let layout = config.layout();
        Self {
            storage,
            compiler,
            config,
            layout,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SchemaCompiler, P: ConfigProvider> PostInstall for NmAppletHook<S, C, P> {
    fn is_staged(&self) -> bool {
        self.config.is_staged()
    }

    async fn compile_schemas(&self) -> Result<StepOutcome> {
        let schema_dir = self.layout.schema_dir();
        let description = format!(
            "compile schemas in {} with {}",
            schema_dir.display(),
            self.config.schema_compiler()
        );

        if self.config.dry_run() {
            return Ok(StepOutcome::Planned { description });
        }

        println!("Compile gsettings schemas...");

        // A non-zero exit is ignored; a compiler that cannot be started aborts the install
        match self.compiler.compile(&schema_dir).await {
            Ok(()) => Ok(StepOutcome::Completed { description }),
            Err(e @ HookError::CompilerError { .. }) => {
                tracing::debug!("Ignoring schema compilation failure: {}", e);
                Ok(StepOutcome::Failed {
                    description: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn stage_autostart(&self) -> Result<StepOutcome> {
        let autostart_dir = self.layout.autostart_dir();
        let source = self.layout.desktop_source();
        let target = self.layout.autostart_target();
        let description = format!("copy {} to {}", source.display(), target.display());

        if self.config.dry_run() {
            return Ok(StepOutcome::Planned { description });
        }

        self.storage.ensure_dir(&autostart_dir).await?;
        let bytes = self.storage.copy_file(&source, &target).await?;
        tracing::debug!("Copied {} bytes", bytes);

        Ok(StepOutcome::Completed { description })
    }
}
