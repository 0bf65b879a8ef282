use std::ffi::OsString;
use std::process::Command;

use crate::deploy::error::{DeployError, Result};

/// Runs the external copy program to completion.
pub trait CopyRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()>;
}

/// Spawns the copy program with inherited stdio, so password prompts and
/// host-key questions from scp reach the terminal.
#[derive(Debug, Default)]
pub struct ScpRunner;

impl CopyRunner for ScpRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        tracing::debug!("running {program} with {} arguments", args.len());

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| DeployError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(DeployError::Failed {
                program: program.to_string(),
                status,
            });
        }

        tracing::debug!("{program} finished");
        Ok(())
    }
}
