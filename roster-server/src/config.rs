//! Server configuration.
//!
//! Read from an optional TOML file; every key may be omitted.
//!
//! ```toml
//! bind = "127.0.0.1:8080"
//! context_path = "/workintech"
//!
//! [tax]
//! simple = 15
//! middle = 25
//! upper = 35
//! ```
//!
//! Command-line flags are applied on top by the binary, after which
//! [`ServerConfig::validate`] runs once more.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use roster_core::{TaxRateError, TaxRates};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTEXT_PATH: &str = "/workintech";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tax rates: {0}")]
    TaxRate(#[from] TaxRateError),

    #[error("invalid context path '{0}'")]
    ContextPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Prefix under which the developer routes are mounted.
    /// Empty or `/` mounts them at the root.
    pub context_path: String,
    pub tax: TaxRates,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            context_path: DEFAULT_CONTEXT_PATH.to_string(),
            tax: TaxRates::default(),
        }
    }
}

impl ServerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tax.validate()?;
        self.mount_path()?;
        Ok(())
    }

    /// The normalised route prefix, or `None` when routes sit at the root.
    ///
    /// Surrounding whitespace and trailing slashes are dropped and a leading
    /// slash is added if missing, so `"api/"` becomes `"/api"`.
    pub fn mount_path(&self) -> Result<Option<String>, ConfigError> {
        let trimmed = self.context_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(None);
        }
        let invalid = trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '*' | '?' | '#'))
            || trimmed.contains("//");
        if invalid {
            return Err(ConfigError::ContextPath(self.context_path.clone()));
        }
        Ok(Some(format!("/{trimmed}")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn with_context_path(path: &str) -> ServerConfig {
        ServerConfig {
            context_path: path.to_string(),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.context_path, "/workintech");
        assert_eq!(config.tax, TaxRates::default());
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn full_document_overrides_everything() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:9000"
            context_path = "/api"

            [tax]
            simple = 10
            middle = 20.5
            upper = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.context_path, "/api");
        assert_eq!(config.tax, TaxRates::new(dec!(10), dec!(20.5), dec!(30)));
    }

    #[test]
    fn partial_tax_table_keeps_other_defaults() {
        let config = ServerConfig::from_toml_str("[tax]\nupper = 40\n").unwrap();

        assert_eq!(config.tax, TaxRates::new(dec!(15), dec!(25), dec!(40)));
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let result = ServerConfig::from_toml_str("[tax]\nsimple = 150\n");

        assert!(matches!(result, Err(ConfigError::TaxRate(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = ServerConfig::from_toml_str("bind = ");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bad_bind_address_is_a_parse_error() {
        let result = ServerConfig::from_toml_str(r#"bind = "not-an-address""#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = ServerConfig::load(Path::new("/definitely/not/here/roster.toml"));

        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/roster.toml"));
            }
            other => panic!("expected Read error, got {other:#?}"),
        }
    }

    #[test]
    fn mount_path_normalises_slashes() {
        assert_eq!(
            with_context_path("workintech/").mount_path().unwrap(),
            Some("/workintech".to_string())
        );
        assert_eq!(
            with_context_path(" /a/b/ ").mount_path().unwrap(),
            Some("/a/b".to_string())
        );
    }

    #[test]
    fn root_context_path_mounts_at_root() {
        assert_eq!(with_context_path("").mount_path().unwrap(), None);
        assert_eq!(with_context_path("/").mount_path().unwrap(), None);
    }

    #[test]
    fn context_path_with_route_syntax_is_rejected() {
        assert!(matches!(
            with_context_path("/{tenant}").mount_path(),
            Err(ConfigError::ContextPath(_))
        ));
        assert!(matches!(
            with_context_path("/a b").mount_path(),
            Err(ConfigError::ContextPath(_))
        ));
    }
}
