pub mod deployer;
pub mod error;
pub mod runner;

pub use deployer::Deployer;
pub use error::DeployError;
pub use runner::ScpRunner;
