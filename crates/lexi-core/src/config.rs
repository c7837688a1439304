//! Configuration types for lexi.
//!
//! [`Config::load`] reads `~/.config/lexi/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
default           = ""
http_timeout_secs = 10

[search]
regex_size_limit = 1048576

[ui]
show_variants       = true
show_dialect        = true
list_pane_width_pct = 40
theme               = "default"

[log]
file = "/tmp/lexi-debug.log"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/lexi/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Dictionary opened when none is given on the command line. Empty = none.
    #[serde(default)]
    pub default: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_http_timeout_secs() -> u64 { 10 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            default: String::new(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// The configured default dictionary, if one is set.
    pub fn default_source(&self) -> Option<&str> {
        Some(self.default.trim()).filter(|s| !s.is_empty())
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Upper bound, in bytes, on a compiled query.
    #[serde(default = "default_regex_size_limit")]
    pub regex_size_limit: usize,
}

fn default_regex_size_limit() -> usize { 1 << 20 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: default_regex_size_limit(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_variants: bool,
    #[serde(default = "default_true")]
    pub show_dialect: bool,
    #[serde(default = "default_list_pane_width_pct")]
    pub list_pane_width_pct: u16,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_true() -> bool { true }
fn default_list_pane_width_pct() -> u16 { 40 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_variants: true,
            show_dialect: true,
            list_pane_width_pct: default_list_pane_width_pct(),
            theme: default_theme(),
        }
    }
}

/// `[log]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Where `--debug` writes its trace.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_file() -> PathBuf { PathBuf::from("/tmp/lexi-debug.log") }

impl Default for LogConfig {
    fn default() -> Self {
        Self { file: default_log_file() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/lexi/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file over the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("lexi")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
