use clap::Parser;
use nm_applet_post_install::utils::{logger, validation::Validate};
use nm_applet_post_install::{
    CliConfig, GlibSchemaCompiler, LocalStorage, NmAppletHook, PostInstallEngine,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let compiler = GlibSchemaCompiler::new(config.schema_compiler.clone());
    let hook = NmAppletHook::new(storage, compiler, config);
    let engine = PostInstallEngine::new(hook);

    match engine.run().await {
        Ok(report) if report.staged => {
            tracing::debug!("Staged install, nothing to do");
        }
        Ok(report) => {
            tracing::debug!("Post-install finished: {:?}", report);
        }
        Err(e) => {
            tracing::error!("Post-install failed: {}", e);
            eprintln!("{}", e);
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
