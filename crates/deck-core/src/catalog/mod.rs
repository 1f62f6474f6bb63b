//! Content catalog: resolves the user's grouping decisions into the ordered
//! content lists the packer consumes.
//!
//! The catalog does not decide *what* the user wants grouped. It takes the
//! group definitions and the ungrouped selection exactly as given and
//! produces, in a fixed order:
//!
//! 1. One folder button per Folder-type group, in group-creation order.
//! 2. All entities of Flat-type groups, group order then entity order.
//! 3. Ungrouped entities in the active sort order.
//!
//! Page-type groups never appear in that lead list; each becomes its own
//! chain segment appended after the lead segment, starting on a fresh page.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::content::{ContentItem, EntityButton, StylePalette};
use crate::domain::page::PageId;
use crate::domain::ConfigurationError;

/// An entity as the catalog sees it: identity plus the attributes the sort
/// modes key on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntity {
    /// Entity identifier, e.g. `light.kitchen_ceiling`.
    pub id: String,
    /// Domain prefix of the identifier, e.g. `light`.
    pub domain: String,
    /// Human-readable name.
    pub name: String,
    /// Area membership, if the source assigned one.
    #[serde(default)]
    pub area: Option<String>,
    /// Floor membership, if the source assigned one.
    #[serde(default)]
    pub floor: Option<String>,
}

/// How a group is rendered on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupDisplay {
    /// A folder button on the linear chain opening a sub-chain of pages.
    Folder,
    /// A dedicated top-level page segment in the linear chain.
    Page,
    /// Entities inlined into the lead segment.
    Flat,
}

/// A user-defined group of entities. Groups partition the selected entities;
/// their order is creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub display: GroupDisplay,
    /// Member entity ids, in the user's chosen order.
    pub entities: Vec<String>,
    /// Color overrides for this group; `None` inherits the default palette.
    pub palette: Option<StylePalette>,
}

/// Sort order applied to the ungrouped entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// The order entities were selected in.
    Selection,
    /// Case-insensitive by display name.
    Alphabetical,
    ByDomain,
    ByArea,
    ByFloor,
    /// The user's explicit drag order, passed through untouched.
    Manual,
}

/// Immutable snapshot of everything the catalog needs for one rebuild.
#[derive(Debug, Clone)]
pub struct Selection {
    /// All known entities, for id resolution and sort attributes.
    pub entities: Vec<CatalogEntity>,
    /// Group definitions in creation order.
    pub groups: Vec<Group>,
    /// Ungrouped entity ids, in selection (or manual) order.
    pub ungrouped: Vec<String>,
    pub sort: SortMode,
    /// Palette for ungrouped entities and groups without an override.
    pub default_palette: StylePalette,
}

/// One appended chain segment: a named, ordered run of content items.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub items: Vec<ContentItem>,
}

/// The catalog's output: the lead item list plus the appended segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPlan {
    /// Folder buttons, flat-group entities, and sorted ungrouped entities.
    pub lead: Vec<ContentItem>,
    /// One segment per Page-type group, in group order.
    pub page_segments: Vec<Segment>,
    /// One segment per Folder-type group, in group order.
    pub folder_segments: Vec<Segment>,
}

/// Structural label of a folder group's chain segment; page ids inside the
/// sub-chain derive from it, which lets the folder button know its target
/// before the sub-chain is packed.
pub fn folder_segment_label(group_name: &str) -> String {
    format!("folder:{group_name}")
}

/// Structural label of a page group's chain segment.
pub fn page_segment_label(group_name: &str) -> String {
    format!("page:{group_name}")
}

/// Resolves a selection into the packer's input lists.
///
/// Entity ids that resolve to no known entity are skipped with a warning,
/// matching the editor's behaviour of silently compacting stale selections.
///
/// # Errors
///
/// Returns [`ConfigurationError::DuplicateGroup`] when two groups share a
/// name; group names key the page-identity derivation and must be unique.
pub fn resolve(selection: &Selection) -> Result<ContentPlan, ConfigurationError> {
    let mut seen = HashSet::new();
    for group in &selection.groups {
        if !seen.insert(group.name.as_str()) {
            return Err(ConfigurationError::DuplicateGroup(group.name.clone()));
        }
    }

    let by_id: HashMap<&str, &CatalogEntity> =
        selection.entities.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut lead = Vec::new();

    // 1. Folder buttons, group-creation order.
    for group in &selection.groups {
        if group.display == GroupDisplay::Folder {
            lead.push(ContentItem::Folder {
                group_name: group.name.clone(),
                target: PageId::derive(&folder_segment_label(&group.name), 0),
            });
        }
    }

    // 2. Flat-group entities, group order then per-group entity order.
    for group in &selection.groups {
        if group.display == GroupDisplay::Flat {
            let palette = group.palette.unwrap_or(selection.default_palette);
            lead.extend(
                group
                    .entities
                    .iter()
                    .filter_map(|id| lookup(&by_id, id))
                    .map(|e| entity_button(e, &palette)),
            );
        }
    }

    // 3. Ungrouped entities, in the active sort order.
    let mut ungrouped: Vec<&CatalogEntity> = selection
        .ungrouped
        .iter()
        .filter_map(|id| lookup(&by_id, id))
        .collect();
    sort_entities(&mut ungrouped, selection.sort);
    lead.extend(
        ungrouped
            .into_iter()
            .map(|e| entity_button(e, &selection.default_palette)),
    );

    let segment = |group: &Group| -> Segment {
        let palette = group.palette.unwrap_or(selection.default_palette);
        Segment {
            name: group.name.clone(),
            items: group
                .entities
                .iter()
                .filter_map(|id| lookup(&by_id, id))
                .map(|e| entity_button(e, &palette))
                .collect(),
        }
    };

    let page_segments = selection
        .groups
        .iter()
        .filter(|g| g.display == GroupDisplay::Page)
        .map(segment)
        .collect();
    let folder_segments = selection
        .groups
        .iter()
        .filter(|g| g.display == GroupDisplay::Folder)
        .map(segment)
        .collect();

    Ok(ContentPlan { lead, page_segments, folder_segments })
}

/// Resolves an id against the entity index, warning on stale references.
fn lookup<'a>(
    by_id: &HashMap<&str, &'a CatalogEntity>,
    id: &str,
) -> Option<&'a CatalogEntity> {
    let found = by_id.get(id).copied();
    if found.is_none() {
        warn!(entity = id, "selection references unknown entity; skipping");
    }
    found
}

fn entity_button(entity: &CatalogEntity, palette: &StylePalette) -> ContentItem {
    ContentItem::Entity(EntityButton {
        entity_id: entity.id.clone(),
        domain: entity.domain.clone(),
        label: entity.name.clone(),
        style: palette.style_for(&entity.domain),
    })
}

/// Applies a sort mode in place. Sorts are stable, so entities that compare
/// equal keep their selection order.
fn sort_entities(entities: &mut [&CatalogEntity], sort: SortMode) {
    match sort {
        // Both pass the caller's ordering through untouched: `Selection` is
        // click order, `Manual` is the drag order the editor already applied.
        SortMode::Selection | SortMode::Manual => {}
        SortMode::Alphabetical => {
            entities.sort_by(|a, b| {
                name_key(a).cmp(&name_key(b)).then_with(|| a.id.cmp(&b.id))
            });
        }
        SortMode::ByDomain => {
            entities.sort_by(|a, b| {
                a.domain
                    .cmp(&b.domain)
                    .then_with(|| name_key(a).cmp(&name_key(b)))
            });
        }
        SortMode::ByArea => {
            entities.sort_by(|a, b| option_key(&a.area, a).cmp(&option_key(&b.area, b)));
        }
        SortMode::ByFloor => {
            entities.sort_by(|a, b| option_key(&a.floor, a).cmp(&option_key(&b.floor, b)));
        }
    }
}

fn name_key(e: &CatalogEntity) -> String {
    e.name.to_lowercase()
}

/// Sort key for area/floor modes: entities without the attribute sort last.
fn option_key<'a>(attr: &'a Option<String>, e: &CatalogEntity) -> (bool, &'a str, String) {
    match attr {
        Some(v) => (false, v.as_str(), name_key(e)),
        None => (true, "", name_key(e)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
