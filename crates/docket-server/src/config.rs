use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use docket_types::{default_actors, Actor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot render config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Server settings, loadable from TOML.
///
/// Every field may be omitted from the file; missing fields take their
/// default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// The actor set the service is seeded with.
    pub actors: Vec<Actor>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            actors: default_actors(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.actors.len(), 3);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = ServerConfig::from_toml_str(r#"bind_addr = "0.0.0.0:9000""#).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.actors, default_actors());
    }

    #[test]
    fn custom_actor_seed() {
        let c = ServerConfig::from_toml_str(
            r#"
            [[actors]]
            id = 10
            name = "Shemp"
            "#,
        )
        .unwrap();
        assert_eq!(c.actors, vec![Actor::new(10, "Shemp")]);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = ServerConfig::from_toml_str(r#"bind_addr = "not an address""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn render_then_load_from_file() {
        let rendered = ServerConfig::default().to_toml_string().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(rendered.as_bytes()).unwrap();

        assert_eq!(ServerConfig::load(file.path()).unwrap(), ServerConfig::default());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
