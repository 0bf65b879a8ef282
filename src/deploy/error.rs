use std::io;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, DeployError>;

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("failed to report install result: {0}")]
    Output(#[from] io::Error),
}

impl DeployError {
    /// Exit code of the copy program, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DeployError::Failed { status, .. } => status.code(),
            _ => None,
        }
    }
}
