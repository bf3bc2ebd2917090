//! Configuration for the Atrium demo server.
//!
//! All sections have serde defaults so a missing or partial `atrium.toml`
//! still yields a runnable configuration. None of the knobs here change the
//! behavior of the mock auth flow itself; they only pick the bind address,
//! the simulated latency, and where (if anywhere) sessions persist.

use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtriumConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Default for AtriumConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "127.0.0.1:8080"
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated network latency applied to successful mock requests, in
    /// milliseconds. Tests set this to zero.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Prefix embedded in minted session tokens. The token is otherwise
    /// opaque; the prefix only supports a well-formedness check.
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_token_prefix() -> String {
    "atrium_session_".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            token_prefix: default_token_prefix(),
        }
    }
}

/// Which storage backend holds the session record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// In-process map. Sessions vanish on restart.
    Memory,
    /// Single JSON file on disk.
    File,
    /// No storage at all; every read reports an absent session.
    Null,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_backend")]
    pub backend: SessionBackend,

    /// Path of the JSON file used by the `file` backend.
    #[serde(default = "default_session_file_path")]
    pub file_path: String,
}

fn default_session_backend() -> SessionBackend {
    SessionBackend::Memory
}

fn default_session_file_path() -> String {
    "data/atrium-session.json".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: default_session_backend(),
            file_path: default_session_file_path(),
        }
    }
}

/// Load configuration from `$ATRIUM_CONFIG` or `./atrium.toml`.
///
/// A missing file is not an error; defaults apply.
pub fn load_config() -> anyhow::Result<AtriumConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AtriumConfig::default());
    }
    load_config_from(path)
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: impl AsRef<std::path::Path>) -> anyhow::Result<AtriumConfig> {
    let raw = fs::read_to_string(path.as_ref())?;
    let cfg: AtriumConfig = toml::from_str(&raw)?;
    Ok(cfg)
}

fn config_path() -> PathBuf {
    if let Ok(p) = env::var("ATRIUM_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("atrium.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AtriumConfig::default();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.auth.login_delay_ms, 1000);
        assert_eq!(cfg.session.backend, SessionBackend::Memory);
    }

    #[test]
    fn partial_toml_keeps_section_defaults() {
        let cfg: AtriumConfig = toml::from_str(
            r#"
            [auth]
            login_delay_ms = 0

            [session]
            backend = "file"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.auth.login_delay_ms, 0);
        assert_eq!(cfg.auth.token_prefix, "atrium_session_");
        assert_eq!(cfg.session.backend, SessionBackend::File);
        assert_eq!(cfg.session.file_path, "data/atrium-session.json");
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
    }
}
