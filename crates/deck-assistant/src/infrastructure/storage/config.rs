//! TOML-based configuration persistence.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\DeckAssistant\config.toml`
//! - Linux:    `~/.config/deckassistant/config.toml`
//! - macOS:    `~/Library/Application Support/DeckAssistant/config.toml`
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return
//! value of `some_fn()` when absent from the file, so the app works on first
//! run and when upgrading from an older config that lacks newer fields.
//!
//! Color values stay plain strings here; they are parsed (and rejected as
//! [`ConfigurationError::InvalidColor`]) when a snapshot is assembled, before
//! any page is built.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use deck_core::catalog::{Group, GroupDisplay, SortMode};
use deck_core::domain::content::{Rgb, StylePalette};
use deck_core::domain::device::{DeviceGrid, DeviceModel};
use deck_core::domain::geometry::Corner;
use deck_core::domain::ConfigurationError;
use deck_core::graph::LayoutSettings;
use deck_core::CatalogEntity;

use crate::application::rebuild_profile::SelectionSnapshot;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Entity fixtures for the CLI path; the live path fetches these from
    /// the entity source instead.
    #[serde(default)]
    pub entities: Vec<CatalogEntity>,
}

/// Profile naming and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    /// Display name of the generated profile.
    #[serde(default = "default_profile_name")]
    pub name: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Target device description. Explicit `cols`/`rows` win over `model`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeviceConfig {
    /// Model name from the device catalog, e.g. `"standard"`, `"xl"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

/// Colors and corner preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_controllable")]
    pub controllable: String,
    #[serde(default = "default_informational")]
    pub informational: String,
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Corner hosting the prev/next pair.
    #[serde(default = "default_nav_corner")]
    pub nav_corner: Corner,
    /// Corner of the entry page carrying the return action.
    #[serde(default = "default_back_corner")]
    pub back_corner: Corner,
    /// Corner for folder-up; unset uses the corner opposite the nav pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_up_corner: Option<Corner>,
}

/// The persisted selection: groups plus the ungrouped pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    #[serde(default = "default_sort")]
    pub sort: SortMode,
    #[serde(default)]
    pub ungrouped: Vec<String>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// One persisted group definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default = "default_group_display")]
    pub display: GroupDisplay,
    #[serde(default)]
    pub entities: Vec<String>,
    /// Per-group color overrides; unset fields inherit the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controllable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub informational: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_profile_name() -> String {
    "Home Assistant".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_background() -> String {
    "#1C1C1C".to_string()
}
fn default_controllable() -> String {
    "#4CAF50".to_string()
}
fn default_informational() -> String {
    "#9E9E9E".to_string()
}
fn default_trigger() -> String {
    "#FF5722".to_string()
}
fn default_nav_corner() -> Corner {
    Corner::BottomRight
}
fn default_back_corner() -> Corner {
    Corner::TopRight
}
fn default_sort() -> SortMode {
    SortMode::Selection
}
fn default_group_display() -> GroupDisplay {
    GroupDisplay::Folder
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            controllable: default_controllable(),
            informational: default_informational(),
            trigger: default_trigger(),
            nav_corner: default_nav_corner(),
            back_corner: default_back_corner(),
            folder_up_corner: None,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            ungrouped: Vec::new(),
            groups: Vec::new(),
        }
    }
}

// ── Snapshot assembly ─────────────────────────────────────────────────────────

impl ThemeConfig {
    /// Parses the theme colors into a palette.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidColor`] for malformed values.
    pub fn palette(&self) -> Result<StylePalette, ConfigurationError> {
        Ok(StylePalette {
            background: self.background.parse()?,
            controllable: self.controllable.parse()?,
            informational: self.informational.parse()?,
            trigger: self.trigger.parse()?,
        })
    }
}

impl AppConfig {
    /// Resolves the configured device grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for zero dimensions or unknown models.
    pub fn device_grid(&self) -> Result<DeviceGrid, ConfigurationError> {
        match (self.device.cols, self.device.rows) {
            (Some(cols), Some(rows)) => DeviceGrid::new(cols, rows),
            _ => match &self.device.model {
                Some(model) => Ok(DeviceModel::from_name(model)?.grid()),
                None => Ok(DeviceModel::Standard.grid()),
            },
        }
    }

    /// Assembles the rebuild snapshot from this config and the fetched
    /// entity list. All color and grid validation happens here, before any
    /// page is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for invalid grids, unknown models, or
    /// malformed colors.
    pub fn to_snapshot(
        &self,
        entities: Vec<CatalogEntity>,
    ) -> Result<SelectionSnapshot, ConfigurationError> {
        let default_palette = self.theme.palette()?;
        let grid = self.device_grid()?;

        let groups = self
            .selection
            .groups
            .iter()
            .map(|g| {
                Ok(Group {
                    name: g.name.clone(),
                    display: g.display,
                    entities: g.entities.clone(),
                    palette: group_palette(g, default_palette)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(SelectionSnapshot {
            entities,
            groups,
            ungrouped: self.selection.ungrouped.clone(),
            sort: self.selection.sort,
            default_palette,
            settings: LayoutSettings {
                grid,
                nav_corner: self.theme.nav_corner,
                folder_up_corner: self.theme.folder_up_corner,
            },
        })
    }
}

/// Builds a group's palette override, if it configures any color.
fn group_palette(
    group: &GroupConfig,
    base: StylePalette,
) -> Result<Option<StylePalette>, ConfigurationError> {
    if group.background.is_none()
        && group.controllable.is_none()
        && group.informational.is_none()
        && group.trigger.is_none()
    {
        return Ok(None);
    }

    let parse = |value: &Option<String>, fallback: Rgb| -> Result<Rgb, ConfigurationError> {
        match value {
            Some(s) => s.parse(),
            None => Ok(fallback),
        }
    };
    Ok(Some(StylePalette {
        background: parse(&group.background, base.background)?,
        controllable: parse(&group.controllable, base.controllable)?,
        informational: parse(&group.informational, base.informational)?,
        trigger: parse(&group.trigger, base.trigger)?,
    }))
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from an explicit path.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found" (which yields defaults), and [`ConfigError::Parse`] for malformed
/// TOML.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path: path.to_path_buf(), source: e }),
    }
}

/// Loads `AppConfig` from the platform config path, returning defaults if
/// the file does not yet exist.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Persists `config` to the platform config path, creating directories as
/// needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })?;
    Ok(())
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("DeckAssistant"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("deckassistant"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("DeckAssistant")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
