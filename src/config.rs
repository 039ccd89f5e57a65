//! Configuration loading.
//!
//! The optional `pattern-hygiene.toml` file controls which overlap checks
//! run, which deferred-work marker tokens the convention check looks for,
//! and the name of the allowlist file inside the pattern directory. Every
//! field carries a default so the file can be omitted entirely.
//!
//! ```rust,no_run
//! use pattern_hygiene::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.is_check_enabled("convention"));
//! ```

use std::path::Path;

/// Main configuration for the hygiene audit.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Per-check on/off toggles.
    pub checks: ChecksConfig,
    /// Deferred-work marker tokens recognized by the convention check.
    pub markers: MarkersConfig,
    /// File name of the allowlist inside the pattern directory. The loader
    /// excludes this file from rule parsing by name.
    pub allowlist_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            checks: ChecksConfig::default(),
            markers: MarkersConfig::default(),
            allowlist_file: "hygiene_allowlist.toml".to_string(),
        }
    }
}

/// Per-check on/off toggles. Every check defaults to **enabled**.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Textual deferred-work-marker overlap check (built-in).
    pub convention: bool,
    /// Probe-based overlap check via clippy (external tool).
    pub clippy: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            convention: true,
            clippy: true,
        }
    }
}

/// Marker tokens the convention check recognizes.
///
/// These names are well-known diagnostics in nearly all standard linters
/// (pylint, ESLint, clippy all report them out of the box), so a custom
/// pattern matching them is redundant by definition.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MarkersConfig {
    pub tokens: Vec<String>,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        MarkersConfig {
            tokens: vec!["TODO".to_string(), "FIXME".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `pattern-hygiene.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("pattern-hygiene.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Actionable hint attached to every finding, pointing the operator at
    /// the allowlist file for deliberate exemptions.
    pub fn remediation_hint(&self) -> String {
        format!(
            "Add the regex to {} if the overlap is intentional",
            self.allowlist_file
        )
    }

    /// Returns `true` if the named check is enabled.
    ///
    /// Unknown check names are considered enabled.
    pub fn is_check_enabled(&self, name: &str) -> bool {
        match name {
            "convention" => self.checks.convention,
            "clippy" => self.checks.clippy,
            _ => true,
        }
    }
}
