use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::config::RemoteConfig;

/// Local checkout holding the KOReader customizations, fixed at build time.
pub const CUSTOMIZATIONS_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/koreader-customizations");

/// The two local directories copied on every install. Existence is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    paths: [PathBuf; 2],
}

impl SourceSet {
    pub fn new(base: &Path, subdirs: &[String; 2]) -> Self {
        Self {
            paths: [base.join(&subdirs[0]), base.join(&subdirs[1])],
        }
    }

    pub fn paths(&self) -> &[PathBuf; 2] {
        &self.paths
    }
}

/// `<host>:<dir>/`, the form scp expects for a remote directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    host: String,
    dir: String,
}

impl Destination {
    pub fn new(host: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            dir: dir.into(),
        }
    }

    pub fn from_config(remote: &RemoteConfig) -> Self {
        Self::new(&remote.host, &remote.dir)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/", self.host, self.dir.trim_end_matches('/'))
    }
}
