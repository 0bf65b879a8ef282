use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {origin}: {reason}")]
    Invalid { origin: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallConfig {
    pub source: SourceConfig,
    pub remote: RemoteConfig,
    pub copy: CopyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Plugins first, settings second. Order is kept on the copy command line.
    pub subdirs: [String; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Host alias, resolved by the user's ssh config.
    pub host: String,
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CopyConfig {
    pub program: String,
    pub recursive_flag: String,
}

impl InstallConfig {
    /// The install target baked into the binary. Nothing is read at runtime.
    pub fn load() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG, "<defaults>")
    }

    pub fn parse(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: InstallConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            origin: origin.to_string(),
            reason: reason.to_string(),
        };

        if self.source.subdirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(invalid("source.subdirs must not contain empty names"));
        }
        if self.remote.host.trim().is_empty() {
            return Err(invalid("remote.host must not be empty"));
        }
        if self.remote.dir.trim().is_empty() {
            return Err(invalid("remote.dir must not be empty"));
        }
        if self.copy.program.trim().is_empty() {
            return Err(invalid("copy.program must not be empty"));
        }
        if self.copy.recursive_flag.trim().is_empty() {
            return Err(invalid("copy.recursive_flag must not be empty"));
        }

        Ok(())
    }
}
