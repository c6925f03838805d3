use crate::core::{PostInstall, RunReport, StepOutcome};
use crate::utils::error::Result;

pub struct PostInstallEngine<P: PostInstall> {
    hook: P,
}

impl<P: PostInstall> PostInstallEngine<P> {
    pub fn new(hook: P) -> Self {
        Self { hook }
    }

    pub async fn run(&self) -> Result<RunReport> {
        if self.hook.is_staged() {
            tracing::debug!("DESTDIR is set, leaving schema compilation and autostart to the packager");
            let reason = "DESTDIR is set".to_string();
            return Ok(RunReport {
                staged: true,
                compile: StepOutcome::Skipped {
                    reason: reason.clone(),
                },
                stage: StepOutcome::Skipped { reason },
            });
        }

        let compile = self.hook.compile_schemas().await?;
        tracing::debug!("Schema compilation: {}", compile);

        let stage = self.hook.stage_autostart().await?;
        tracing::debug!("Autostart entry: {}", stage);

        Ok(RunReport {
            staged: false,
            compile,
            stage,
        })
    }
}
