//! RebuildProfileUseCase: one full layout rebuild per user edit.
//!
//! Every edit to the selection, grouping, styling, or device triggers a
//! complete rebuild from an immutable [`SelectionSnapshot`]; the previous
//! graph is dropped atomically. There is no incremental mutation anywhere:
//! the build is a pure, synchronous function of the snapshot, bounded by
//! entity count times device capacity.

use deck_core::catalog::{Group, Selection, SortMode};
use deck_core::domain::content::StylePalette;
use deck_core::domain::ConfigurationError;
use deck_core::graph::{build_from_selection, LayoutSettings, NavigationGraph};
use deck_core::CatalogEntity;
use tracing::{info, warn};

/// Everything one rebuild reads, captured before the build starts.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    /// All known entities.
    pub entities: Vec<CatalogEntity>,
    /// Group definitions in creation order.
    pub groups: Vec<Group>,
    /// Ungrouped entity ids.
    pub ungrouped: Vec<String>,
    pub sort: SortMode,
    /// Palette for ungrouped entities and groups without overrides.
    pub default_palette: StylePalette,
    /// Device grid and corner preferences.
    pub settings: LayoutSettings,
}

/// Builds a fresh navigation graph from `snapshot`.
///
/// Recoverable conditions (unplaceable navigation buttons on degenerate
/// grids) are logged and carried on the returned graph's diagnostics list.
///
/// # Errors
///
/// Returns [`ConfigurationError`] for invalid grids or duplicate group
/// names; nothing partial is produced.
pub fn rebuild(snapshot: &SelectionSnapshot) -> Result<NavigationGraph, ConfigurationError> {
    let selection = Selection {
        entities: snapshot.entities.clone(),
        groups: snapshot.groups.clone(),
        ungrouped: snapshot.ungrouped.clone(),
        sort: snapshot.sort,
        default_palette: snapshot.default_palette,
    };

    let graph = build_from_selection(&selection, &snapshot.settings)?;

    for diagnostic in graph.diagnostics() {
        warn!("build diagnostic: {diagnostic}");
    }
    info!(
        pages = graph.pages().len(),
        linear = graph.linear_pages().count(),
        diagnostics = graph.diagnostics().len(),
        "profile rebuilt"
    );
    Ok(graph)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::catalog::GroupDisplay;
    use deck_core::domain::device::DeviceGrid;
    use deck_core::domain::geometry::Corner;

    fn snapshot(entity_count: usize) -> SelectionSnapshot {
        let entities: Vec<CatalogEntity> = (0..entity_count)
            .map(|i| CatalogEntity {
                id: format!("light.e{i}"),
                domain: "light".to_string(),
                name: format!("Light {i}"),
                area: None,
                floor: None,
            })
            .collect();
        let ungrouped = entities.iter().map(|e| e.id.clone()).collect();
        SelectionSnapshot {
            entities,
            groups: vec![],
            ungrouped,
            sort: SortMode::Selection,
            default_palette: StylePalette::default(),
            settings: LayoutSettings {
                grid: DeviceGrid { cols: 5, rows: 3 },
                nav_corner: Corner::BottomRight,
                folder_up_corner: None,
            },
        }
    }

    #[test]
    fn test_rebuild_produces_graph_for_plain_selection() {
        let graph = rebuild(&snapshot(8)).unwrap();
        assert_eq!(graph.pages().len(), 1);
        assert_eq!(graph.entry_page().entity_count(), 8);
    }

    #[test]
    fn test_rebuild_rejects_invalid_grid() {
        let mut snap = snapshot(3);
        snap.settings.grid = DeviceGrid { cols: 0, rows: 3 };
        assert!(matches!(
            rebuild(&snap),
            Err(ConfigurationError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_rebuild_rejects_duplicate_groups_before_building() {
        let mut snap = snapshot(4);
        let group = Group {
            name: "Twice".to_string(),
            display: GroupDisplay::Folder,
            entities: vec!["light.e0".to_string()],
            palette: None,
        };
        snap.groups = vec![group.clone(), group];
        assert!(matches!(
            rebuild(&snap),
            Err(ConfigurationError::DuplicateGroup(_))
        ));
    }

    #[test]
    fn test_rebuild_twice_from_same_snapshot_is_identical() {
        let snap = snapshot(20);
        let a = rebuild(&snap).unwrap();
        let b = rebuild(&snap).unwrap();
        assert_eq!(a, b);
    }
}
