//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/genealogy/genealogy.toml`
//! 3. Local config: `<data_dir>/.genealogy.toml`
//! 4. Environment variables: `GENEALOGY_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::Rank;

/// How the CLI draws a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One block per generation with connector lines
    #[default]
    Rows,
    /// Indented descent from the eldest generation
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Rows => f.write_str("rows"),
            RenderStyle::Tree => f.write_str("tree"),
        }
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" => Ok(RenderStyle::Rows),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(format!("unknown render style: {other}")),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub style: RenderStyle,
    /// Print parent -> children connector lines between rows
    pub show_links: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Rows,
            show_links: true,
        }
    }
}

/// Raw render config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderConfig {
    pub style: Option<RenderStyle>,
    pub show_links: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub fallback_rank: Option<Rank>,
    #[serde(default)]
    pub render: RawRenderConfig,
}

/// Unified configuration for genealogy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `students.json` and `families/` (default: XDG data dir)
    pub data_dir: PathBuf,
    /// Rank given to records whose rank code is not recognized
    pub fallback_rank: Rank,
    pub render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            fallback_rank: Rank::Alumni,
            render: RenderConfig::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "genealogy")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.genealogy"))
}

/// Get the XDG config directory for genealogy.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "genealogy").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("genealogy.toml"))
}

/// Get the path to the local config file in a data directory.
pub fn local_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".genealogy.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            fallback_rank: overlay.fallback_rank.unwrap_or(self.fallback_rank),
            render: RenderConfig {
                style: overlay.render.style.unwrap_or(self.render.style),
                show_links: overlay.render.show_links.unwrap_or(self.render.show_links),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory holding the local config; when None the
    ///   `data_dir` resolved from the lower layers is used
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. defaults
        let mut current = Self::default();

        // 2. global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }
        current.expand_paths();

        // 3. local config
        let local_dir = local_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| current.data_dir.clone());
        let local_path = local_config_path(&local_dir);
        if local_path.exists() {
            let raw = load_raw_settings(&local_path)?;
            current = current.merge_with(&raw);
        }

        // 4. environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply GENEALOGY_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("GENEALOGY").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_dir") {
            settings.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("fallback_rank") {
            settings.fallback_rank = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("GENEALOGY_FALLBACK_RANK: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("render.style") {
            settings.render.style = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("render.show_links") {
            settings.render.show_links = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# genealogy configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/genealogy/genealogy.toml
#   Local:  <data_dir>/.genealogy.toml
#   Env:    GENEALOGY_* environment variables (GENEALOGY_RENDER__STYLE=tree)

# Directory with students.json and families/<id>.json
# data_dir = "~/.local/share/genealogy"

# Rank for records with an unknown rank code: alumni, i3, i2, i1, p2, p1
# fallback_rank = "alumni"

[render]
# rows: one block per generation; tree: indented descent
# style = "rows"

# Print connector lines between generations
# show_links = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
