//! Configuration for eero-cli.
//!
//! One TOML file holds the session token, the active network and optional
//! API overrides. Loading layers defaults, the file, then `EERO_*`
//! environment variables; saving writes the file only, owner-readable.
//! [`FileConfigStore`] plugs this into `eero_core::Session`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use eero_core::{ConfigStore, CoreError, SessionConfig, StoredConfig};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "EERO_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        CoreError::Config {
            message: err.to_string(),
        }
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Everything the config file may contain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Session token from a verified login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Active network, chosen at login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,

    /// API root override (mock servers, staging).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            network_id: None,
            api_url: None,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Build the runtime session settings, validating overrides.
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let mut session = SessionConfig::default();
        if let Some(raw) = self.api_url.as_deref().filter(|u| !u.is_empty()) {
            session.base_url = raw.parse().map_err(|e: url::ParseError| ConfigError::Validation {
                field: "api_url".into(),
                reason: format!("{e}: {raw}"),
            })?;
        }
        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        session.timeout = Duration::from_secs(self.timeout);
        Ok(session)
    }

    fn stored(&self) -> StoredConfig {
        StoredConfig {
            token: self
                .token
                .clone()
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            network_id: self.network_id.clone().filter(|n| !n.is_empty()),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "eero-cli", "eero-cli").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("eero-cli");
    p
}

// ── Loading and saving ──────────────────────────────────────────────

/// Load config from `path` and the environment. A missing file yields
/// defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;
    Ok(config)
}

/// File contents only, ignoring the environment. Used before rewriting the
/// file so environment overrides are never persisted.
fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    Ok(config)
}

/// Serialize config to TOML and write it to `path` with mode 0600.
pub fn save_config(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        create_private_dir(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(toml_str.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    debug!(path = %path.display(), "config saved");
    Ok(())
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(dir)
    }
}

// ── ConfigStore implementation ──────────────────────────────────────

/// [`ConfigStore`] backed by the TOML config file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> Self {
        Self::new(config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rewrite(&self, update: impl FnOnce(&mut Config)) -> Result<(), ConfigError> {
        let mut cfg = load_file(&self.path)?;
        update(&mut cfg);
        save_config(&self.path, &cfg)
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<StoredConfig, CoreError> {
        Ok(load_config(&self.path)?.stored())
    }

    fn save(&self, config: &StoredConfig) -> Result<(), CoreError> {
        let token = config.token.as_ref().map(|t| t.expose_secret().to_owned());
        self.rewrite(|cfg| {
            cfg.token = token;
            cfg.network_id.clone_from(&config.network_id);
        })?;
        Ok(())
    }

    fn save_network_id(&self, network_id: &str) -> Result<(), CoreError> {
        self.rewrite(|cfg| cfg.network_id = Some(network_id.to_owned()))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        self.rewrite(|cfg| {
            cfg.token = None;
            cfg.network_id = None;
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().join("nested").join("config.toml"));
        (dir, store)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let (_dir, store) = temp_store();
        let stored = store.load().unwrap();
        assert!(!stored.has_token());
        assert!(stored.network_id.is_none());
        assert_eq!(load_file(store.path()).unwrap().timeout, 30);
    }

    #[test]
    fn save_then_load() {
        let (_dir, store) = temp_store();
        store
            .save(&StoredConfig {
                token: Some(SecretString::from("tok_abc123".to_owned())),
                network_id: Some("42".into()),
            })
            .unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored.token.unwrap().expose_secret(), "tok_abc123");
        assert_eq!(stored.network_id.as_deref(), Some("42"));
    }

    #[test]
    fn save_keeps_other_keys() {
        let (_dir, store) = temp_store();
        save_config(
            store.path(),
            &Config {
                api_url: Some("http://localhost:9999/2.2".into()),
                timeout: 5,
                ..Config::default()
            },
        )
        .unwrap();

        store
            .save(&StoredConfig {
                token: Some(SecretString::from("tok".to_owned())),
                network_id: None,
            })
            .unwrap();

        let cfg = load_file(store.path()).unwrap();
        assert_eq!(cfg.api_url.as_deref(), Some("http://localhost:9999/2.2"));
        assert_eq!(cfg.timeout, 5);
        assert_eq!(cfg.token.as_deref(), Some("tok"));
    }

    #[test]
    fn saving_network_keeps_file_token_only() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "timeout = 5\n").unwrap();

        store.save_network_id("42").unwrap();

        let cfg = load_file(store.path()).unwrap();
        assert_eq!(cfg.network_id.as_deref(), Some("42"));
        assert!(cfg.token.is_none());
        assert_eq!(cfg.timeout, 5);
        assert!(!fs::read_to_string(store.path()).unwrap().contains("token"));
    }

    #[test]
    fn saving_network_preserves_stored_token() {
        let (_dir, store) = temp_store();
        store
            .save(&StoredConfig {
                token: Some(SecretString::from("tok_file".to_owned())),
                network_id: None,
            })
            .unwrap();

        store.save_network_id("7").unwrap();

        let cfg = load_file(store.path()).unwrap();
        assert_eq!(cfg.token.as_deref(), Some("tok_file"));
        assert_eq!(cfg.network_id.as_deref(), Some("7"));
    }

    #[test]
    fn clear_forgets_token_and_network() {
        let (_dir, store) = temp_store();
        store
            .save(&StoredConfig {
                token: Some(SecretString::from("tok".to_owned())),
                network_id: Some("42".into()),
            })
            .unwrap();
        store.clear().unwrap();

        assert!(!store.has_token());
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(!text.contains("tok"));
    }

    #[test]
    fn empty_token_counts_as_logged_out() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "token = \"\"\nnetwork_id = \"\"\n").unwrap();
        let stored = store.load().unwrap();
        assert!(!stored.has_token());
        assert!(stored.network_id.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        store.save(&StoredConfig::default()).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn session_config_applies_overrides() {
        let cfg = Config {
            api_url: Some("http://127.0.0.1:8080/2.2".into()),
            timeout: 7,
            ..Config::default()
        };
        let session = cfg.session_config().unwrap();
        assert_eq!(session.base_url.as_str(), "http://127.0.0.1:8080/2.2");
        assert_eq!(session.timeout, Duration::from_secs(7));
    }

    #[test]
    fn session_config_rejects_bad_url_and_zero_timeout() {
        let bad_url = Config {
            api_url: Some("not a url".into()),
            ..Config::default()
        };
        assert!(matches!(
            bad_url.session_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "api_url"
        ));

        let zero = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(zero.session_config().is_err());
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        assert!(config_path().ends_with("config.toml"));
    }
}
