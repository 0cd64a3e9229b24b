use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::{BatchOptions, CollisionPolicy};
use crate::slug::{Separator, SlugOptions};

/// Global configuration loaded from `~/.config/logoslug/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Directory holding the original logos.
    pub source_dir: PathBuf,
    /// Name of the output directory, created inside `source_dir`.
    pub output_subdir: String,
    /// File that is never copied or renamed.
    pub sentinel: String,
    /// Extensions (without dot) that are picked up; matched case-insensitively.
    pub extensions: Vec<String>,
    /// "-" (default) or "_".
    pub separator: Separator,
    /// Fold Turkish diacritics to ASCII.
    pub transliterate: bool,
    /// "overwrite" (default, last write wins) or "skip".
    pub on_collision: CollisionPolicy,
    /// Write `manifest.json` into the output directory.
    pub manifest: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("frontend/public/events"),
            output_subdir: "processed".to_string(),
            sentinel: "default-tournament-logo.png".to_string(),
            extensions: vec!["png".to_string()],
            separator: Separator::Hyphen,
            transliterate: true,
            on_collision: CollisionPolicy::Overwrite,
            manifest: false,
        }
    }
}

impl SlugConfig {
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions {
            separator: self.separator,
            transliterate: self.transliterate,
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            source_dir: self.source_dir.clone(),
            output_subdir: self.output_subdir.clone(),
            sentinel: self.sentinel.clone(),
            extensions: self.extensions.clone(),
            slug: self.slug_options(),
            on_collision: self.on_collision,
            manifest: self.manifest,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logoslug")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Render `cfg` the way it is stored on disk.
pub fn render(cfg: &SlugConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<SlugConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing the defaults there first if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<SlugConfig> {
    if !path.exists() {
        let default_cfg = SlugConfig::default();
        let toml = render(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SlugConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
