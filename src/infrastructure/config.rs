use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_max_request_bytes() -> usize {
  64 * 1024
}

fn default_token_length_bytes() -> usize {
  32
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub limits: LimitsConfig,
  #[serde(default)]
  pub security: SecurityConfig,
}

/// Request-size limits enforced by the service shell
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
  #[serde(default = "default_max_request_bytes")]
  pub max_request_bytes: usize,
}

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      max_request_bytes: default_max_request_bytes(),
    }
  }
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  /// Raw length of generated authentication tokens, before encoding
  #[serde(default = "default_token_length_bytes")]
  pub token_length_bytes: usize,
}

impl Default for SecurityConfig {
  fn default() -> Self {
    Self {
      token_length_bytes: default_token_length_bytes(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables.
  ///
  /// Sources are layered, later ones overriding earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if present)
  /// 3. config/{RUN_MODE}.toml (if present)
  /// 4. Environment variables with the HABITMODE_ prefix, separated by
  ///    double underscores, e.g. `HABITMODE_SECURITY__TOKEN_LENGTH_BYTES=48`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("HABITMODE")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_parses_full_toml() {
    let toml = r#"
            [limits]
            max_request_bytes = 1024

            [security]
            token_length_bytes = 48
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.limits.max_request_bytes, 1024);
    assert_eq!(config.security.token_length_bytes, 48);
  }

  #[test]
  fn test_config_defaults_apply() {
    let config: Config = toml::from_str("").expect("Failed to parse config");

    assert_eq!(config.limits.max_request_bytes, 64 * 1024);
    assert_eq!(config.security.token_length_bytes, 32);
  }
}
