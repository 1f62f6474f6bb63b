//! Folder sub-chains: an independent page chain per Folder-type group.
//!
//! A sub-chain is packed exactly like a linear segment, with one additional
//! permanent reservation: every sub-page keeps a folder-up cell pointing back
//! at the opener. Sub-chain pages never join the outer chain's prev/next
//! sequence; the graph builder wires their edges internally and sets the
//! opener as parent.

use crate::catalog::folder_segment_label;
use crate::domain::content::ContentItem;
use crate::domain::device::DeviceGrid;
use crate::domain::geometry::NavPlacement;
use crate::domain::page::{Page, PageKind};
use crate::packing::packer::{pack_segment, SegmentSpec};
use crate::packing::BuildDiagnostic;

/// Packs one folder group's entities into its sub-chain.
///
/// The first page's id equals `PageId::derive(folder_segment_label(name), 0)`,
/// which is the target the catalog stamped onto the group's folder button.
pub fn build_folder_chain(
    group_name: &str,
    items: &[ContentItem],
    grid: DeviceGrid,
    nav: &NavPlacement,
    diagnostics: &mut Vec<BuildDiagnostic>,
) -> Vec<Page> {
    let label = folder_segment_label(group_name);
    let spec = SegmentSpec {
        label: &label,
        group: Some(group_name.to_string()),
        kind_first: PageKind::FolderSub,
        kind_rest: PageKind::FolderSub,
        chain_start: true,
        more_after: false,
        reserve_folder_up: true,
    };
    pack_segment(items, grid, nav, &spec, diagnostics)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{EntityButton, StylePalette};
    use crate::domain::geometry::{nav_cells, Corner};
    use crate::domain::page::PageId;

    fn entities(n: usize) -> Vec<ContentItem> {
        let palette = StylePalette::default();
        (0..n)
            .map(|i| {
                ContentItem::Entity(EntityButton {
                    entity_id: format!("light.e{i}"),
                    domain: "light".to_string(),
                    label: format!("E{i}"),
                    style: palette.style_for("light"),
                })
            })
            .collect()
    }

    #[test]
    fn test_ten_entities_on_mini_grid_spread_over_three_pages() {
        let grid = DeviceGrid { cols: 3, rows: 2 };
        let nav = nav_cells(grid, Corner::BottomRight, None);
        let mut diags = Vec::new();

        let pages = build_folder_chain("Office", &entities(10), grid, &nav, &mut diags);

        assert_eq!(pages.len(), 3);
        let placed: usize = pages.iter().map(Page::entity_count).sum();
        assert_eq!(placed, 10);
        for page in &pages {
            assert_eq!(page.kind, PageKind::FolderSub);
            assert!(page.occupied().any(|(_, it)| *it == ContentItem::FolderUp));
        }
        // Interior pages carry next; non-first pages carry prev.
        assert!(pages[0].occupied().any(|(_, it)| *it == ContentItem::NavNext));
        assert!(pages[1].occupied().any(|(_, it)| *it == ContentItem::NavPrev));
        assert!(pages[2].occupied().any(|(_, it)| *it == ContentItem::NavPrev));
        assert!(!pages[2].occupied().any(|(_, it)| *it == ContentItem::NavNext));
    }

    #[test]
    fn test_first_sub_page_id_matches_catalog_target_derivation() {
        let grid = DeviceGrid { cols: 3, rows: 2 };
        let nav = nav_cells(grid, Corner::BottomRight, None);
        let mut diags = Vec::new();

        let pages = build_folder_chain("Office", &entities(2), grid, &nav, &mut diags);

        assert_eq!(pages[0].id, PageId::derive("folder:Office", 0));
    }

    #[test]
    fn test_empty_folder_group_still_yields_one_sub_page() {
        let grid = DeviceGrid { cols: 3, rows: 2 };
        let nav = nav_cells(grid, Corner::BottomRight, None);
        let mut diags = Vec::new();

        let pages = build_folder_chain("Empty", &[], grid, &nav, &mut diags);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].entity_count(), 0);
        assert!(pages[0].occupied().any(|(_, it)| *it == ContentItem::FolderUp));
    }

    #[test]
    fn test_sub_chain_entities_preserve_group_order() {
        let grid = DeviceGrid { cols: 3, rows: 2 };
        let nav = nav_cells(grid, Corner::BottomRight, None);
        let mut diags = Vec::new();
        let items = entities(7);

        let pages = build_folder_chain("Office", &items, grid, &nav, &mut diags);

        let ids: Vec<String> = pages
            .iter()
            .flat_map(|p| {
                p.occupied().filter_map(|(_, it)| match it {
                    ContentItem::Entity(e) => Some(e.entity_id.clone()),
                    _ => None,
                })
            })
            .collect();
        let expected: Vec<String> = (0..7).map(|i| format!("light.e{i}")).collect();
        assert_eq!(ids, expected);
    }
}
