use crate::domain::model::{InstallLayout, StepOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn ensure_dir(&self, path: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
    fn copy_file(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn layout(&self) -> InstallLayout;
    /// Staging root requested by a packaging tool, if any.
    fn staging_root(&self) -> Option<&str>;
    fn schema_compiler(&self) -> &str;
    fn dry_run(&self) -> bool;

    fn is_staged(&self) -> bool {
        self.staging_root().is_some_and(|root| !root.is_empty())
    }
}

#[async_trait]
pub trait SchemaCompiler: Send + Sync {
    async fn compile(&self, schema_dir: &Path) -> Result<()>;
}

#[async_trait]
pub trait PostInstall: Send + Sync {
    fn is_staged(&self) -> bool;
    async fn compile_schemas(&self) -> Result<StepOutcome>;
    async fn stage_autostart(&self) -> Result<StepOutcome>;
}
