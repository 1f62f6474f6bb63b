//! Content items, button styles, and the domain category tables.
//!
//! A content item is the occupant of one grid cell: an entity action button,
//! a folder button that jumps into a sub-chain, or one of the three
//! navigation controls. Cells are a closed tagged union and every consumer
//! matches it exhaustively; there is no free-form "cell with a type string"
//! anywhere in the engine.

use std::fmt;
use std::str::FromStr;

use crate::domain::page::PageId;
use crate::domain::ConfigurationError;

/// The occupant of a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// An entity action button; pressing it invokes the entity.
    Entity(EntityButton),
    /// A folder button; pressing it jumps to the first page of the folder's
    /// sub-chain. The target is resolved before the button is created, so
    /// folder links never need back-patching.
    Folder { group_name: String, target: PageId },
    /// Navigation to the previous page in the linear chain.
    NavPrev,
    /// Navigation to the next page in the linear chain.
    NavNext,
    /// Return from a folder sub-chain to the page that opened it.
    FolderUp,
}

/// An entity button with its resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityButton {
    /// Entity identifier, e.g. `light.kitchen_ceiling`.
    pub entity_id: String,
    /// The entity's domain, e.g. `light`.
    pub domain: String,
    /// Display label shown on the key.
    pub label: String,
    /// Resolved colors for this button.
    pub style: ButtonStyle,
}

// ── Colors ────────────────────────────────────────────────────────────────────

/// A 24-bit RGB color parsed from `#RRGGBB` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Rgb {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ConfigurationError::InvalidColor(s.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigurationError::InvalidColor(s.to_string()));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| ConfigurationError::InvalidColor(s.to_string()))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| ConfigurationError::InvalidColor(s.to_string()))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| ConfigurationError::InvalidColor(s.to_string()))?;
        Ok(Rgb { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The color set a group (or the ungrouped pool) configures: one background
/// plus one accent per domain category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub background: Rgb,
    pub controllable: Rgb,
    pub informational: Rgb,
    pub trigger: Rgb,
}

impl StylePalette {
    /// The accent color for a given category.
    pub fn accent(&self, category: DomainCategory) -> Rgb {
        match category {
            DomainCategory::Controllable => self.controllable,
            DomainCategory::Informational => self.informational,
            DomainCategory::Trigger => self.trigger,
        }
    }

    /// Resolves the concrete style for one entity domain.
    pub fn style_for(&self, domain: &str) -> ButtonStyle {
        ButtonStyle {
            background: self.background,
            accent: self.accent(DomainCategory::of(domain)),
        }
    }
}

impl Default for StylePalette {
    /// The stock palette: dark background, green for controls, grey for
    /// read-only values, orange for triggers.
    fn default() -> Self {
        StylePalette {
            background: Rgb { r: 0x1C, g: 0x1C, b: 0x1C },
            controllable: Rgb { r: 0x4C, g: 0xAF, b: 0x50 },
            informational: Rgb { r: 0x9E, g: 0x9E, b: 0x9E },
            trigger: Rgb { r: 0xFF, g: 0x57, b: 0x22 },
        }
    }
}

/// The resolved colors for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: Rgb,
    pub accent: Rgb,
}

// ── Domain categories ─────────────────────────────────────────────────────────

/// Three-way classification of entity domains, used to pick the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainCategory {
    /// Something the user switches or adjusts (lights, switches, covers, …).
    Controllable,
    /// A read-only value or feed (sensors, cameras).
    Informational,
    /// A fire-and-forget invocation (automations, scripts, scenes).
    Trigger,
}

impl DomainCategory {
    /// Classifies an entity domain.
    ///
    /// Unknown domains fall back to [`DomainCategory::Informational`], the
    /// least surprising treatment for something the engine cannot name.
    pub fn of(domain: &str) -> Self {
        match domain {
            "light" | "switch" | "climate" | "media_player" | "cover" | "fan" | "lock"
            | "vacuum" | "input_boolean" | "input_number" | "input_select" => {
                DomainCategory::Controllable
            }
            "sensor" | "binary_sensor" | "camera" => DomainCategory::Informational,
            "automation" | "script" | "scene" => DomainCategory::Trigger,
            _ => DomainCategory::Informational,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
