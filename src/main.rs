mod deploy;
mod model;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use deploy::{DeployError, Deployer, ScpRunner};
use model::config::InstallConfig;

const LOG_FILTER: &str = "koreader_install=warn";

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet unless something is wrong, so the
    // copy program's output and the result line are all the user sees.
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(LOG_FILTER)
        .init();

    tracing::debug!("koreader-install starting");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("koreader-install error: {e:?}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn run() -> Result<()> {
    let config = InstallConfig::load().context("loading configuration")?;
    let deployer = Deployer::new(&config);

    tracing::debug!("installing customizations with {}", deployer.program());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    deployer.install(&ScpRunner, &mut out)?;

    Ok(())
}

/// The copy program's own exit code when there is one, otherwise a generic failure.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DeployError>()
        .and_then(DeployError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
