use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use crate::deploy::error::Result;
use crate::deploy::runner::CopyRunner;
use crate::model::config::InstallConfig;
use crate::model::target::{CUSTOMIZATIONS_DIR, Destination, SourceSet};

pub const SUCCESS_MESSAGE: &str = "Customizations successfully installed! Restart KOReader.";

/// Copies the plugin and settings directories to the device in one scp call.
#[derive(Debug, Clone)]
pub struct Deployer {
    program: String,
    recursive_flag: String,
    sources: SourceSet,
    destination: Destination,
}

impl Deployer {
    pub fn new(config: &InstallConfig) -> Self {
        Self::with_base(config, Path::new(CUSTOMIZATIONS_DIR))
    }

    pub fn with_base(config: &InstallConfig, base: &Path) -> Self {
        Self {
            program: config.copy.program.clone(),
            recursive_flag: config.copy.recursive_flag.clone(),
            sources: SourceSet::new(base, &config.source.subdirs),
            destination: Destination::from_config(&config.remote),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `[recursive flag, plugins, settings, "host:dir/"]`
    pub fn copy_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        args.push(OsString::from(&self.recursive_flag));
        args.extend(
            self.sources
                .paths()
                .iter()
                .map(|path| path.as_os_str().to_os_string()),
        );
        args.push(OsString::from(self.destination.to_string()));
        args
    }

    /// Runs the copy and, only once it has succeeded, writes the success line.
    pub fn install<R, W>(&self, runner: &R, out: &mut W) -> Result<()>
    where
        R: CopyRunner + ?Sized,
        W: Write,
    {
        let args = self.copy_args();
        tracing::debug!("copy command: {} {:?}", self.program, args);

        runner.run(&self.program, &args)?;

        writeln!(out, "{SUCCESS_MESSAGE}")?;
        out.flush()?;
        Ok(())
    }
}
