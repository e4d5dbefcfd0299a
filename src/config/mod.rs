use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::poi::{DEFAULT_COLOR, DEFAULT_MAX_LOD};

fn default_max_lod() -> i32 {
    DEFAULT_MAX_LOD
}
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_interpolate_distance() -> f64 {
    0.0
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `shape2poi.toml`
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    #[serde(default = "default_max_lod")]
    pub max_lod: i32,
    #[serde(default = "default_color")]
    pub color: String,
    /// Meters between densified points, 0 disables
    #[serde(default = "default_interpolate_distance")]
    pub interpolate_distance: f64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output: None,
            manifest: None,
            max_lod: default_max_lod(),
            color: default_color(),
            interpolate_distance: default_interpolate_distance(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First parsable config file on the search path
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::{Context, bail};

        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("shape2poi.toml"));
    paths.push(PathBuf::from(".shape2poi.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("shape2poi").join("config.toml"));
        paths.push(config_dir.join("shape2poi.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".shape2poi.toml"));
        paths.push(home.join(".config").join("shape2poi").join("config.toml"));
    }

    paths
}
