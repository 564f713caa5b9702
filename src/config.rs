//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root next to the `data/` directory; user values are merged on
//! top of stock defaults, so a config file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"       # <title> suffix and sidebar heading fallback
//! owner = ""                # Your name, shown in the hero and sidebar
//! headline = ""             # One-line role summary under the name
//! language = "en"           # <html lang>
//!
//! [previews]
//! sidebar_highlights = 3    # Achievements listed in the sidebar
//! spotlight_achievements = 6  # Achievements on the About page
//! quick_stats = 3           # Quick stats in the hero snapshot
//!
//! [gallery]
//! initial_selection = "all" # "all" or "first-category"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#333333"
//! link_hover = "#000000"
//! accent = "#4f46e5"        # Chips, progress bars, current nav item
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#cccccc"
//! link_hover = "#ffffff"
//! accent = "#818cf8"
//! ```
//!
//! Unknown keys are rejected to catch typos early. This is stricter than the
//! content documents, which ignore unknown fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity shown in page titles, the hero, and the sidebar.
    pub site: SiteInfo,
    /// How many achievements and stats each section previews.
    pub previews: PreviewConfig,
    /// Portfolio gallery behaviour.
    pub gallery: GalleryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let previews = [
            ("previews.sidebar_highlights", self.previews.sidebar_highlights),
            (
                "previews.spotlight_achievements",
                self.previews.spotlight_achievements,
            ),
            ("previews.quick_stats", self.previews.quick_stats),
        ];
        for (key, value) in previews {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{key} must be at least 1")));
            }
        }
        if self.site.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.language must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Name shown in the hero greeting and sidebar, falling back to the title.
    pub fn display_owner(&self) -> &str {
        if self.site.owner.is_empty() {
            &self.site.title
        } else {
            &self.site.owner
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub owner: String,
    pub headline: String,
    pub language: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: String::new(),
            headline: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Preview truncation counts. Content keeps its full lists; views show the
/// first N entries in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub sidebar_highlights: usize,
    pub spotlight_achievements: usize,
    pub quick_stats: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            sidebar_highlights: 3,
            spotlight_achievements: 6,
            quick_stats: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Which projects the portfolio landing page shows.
    pub initial_selection: InitialSelection,
}

/// Selection applied to the portfolio landing page before any facet is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialSelection {
    /// Every project.
    #[default]
    All,
    /// Only projects in the alphabetically first category.
    FirstCategory,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Muted/secondary text color (captions, sidebar notes).
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Chips, progress bars, and the current navigation item.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#4f46e5".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#818cf8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from the content root as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at content/config.toml, next to the data/ directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Used in every page <title> and as the sidebar heading when owner is empty.
title = "Portfolio"

# Your name, shown in the About page greeting and the sidebar.
owner = ""

# One-line role summary shown under your name in the sidebar.
headline = ""

# Value of <html lang="...">.
language = "en"

# ---------------------------------------------------------------------------
# Preview sizes
# ---------------------------------------------------------------------------
[previews]
# Achievements listed under "Recent Highlights" in the sidebar.
sidebar_highlights = 3

# Achievements shown in the About page spotlight grid.
spotlight_achievements = 6

# Quick stats shown in the About page snapshot.
quick_stats = 3

# ---------------------------------------------------------------------------
# Portfolio gallery
# ---------------------------------------------------------------------------
[gallery]
# Projects shown on portfolio/index.html before a facet is chosen:
#   "all"            -> every project
#   "first-category" -> only the alphabetically first category
initial_selection = "all"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Captions, sidebar notes
border = "#e0e0e0"
link = "#333333"
link_hover = "#000000"
accent = "#4f46e5"        # Chips, progress bars, current nav item

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
link_hover = "#ffffff"
accent = "#818cf8"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_vars(&colors.light, "    "),
        dark = color_vars(&colors.dark, "        "),
    )
}

fn color_vars(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-link", &scheme.link),
        ("--color-link-hover", &scheme.link_hover),
        ("--color-accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
