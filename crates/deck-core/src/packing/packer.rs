//! The page bin-packer.
//!
//! One call packs one linear-chain segment: an ordered run of content items
//! destined for consecutive pages. Reservation arithmetic:
//!
//! - `next` is reserved iff items remain after this page's free cells are
//!   filled, or further chain segments follow this one.
//! - `prev` is reserved on every page except the first page of the chain.
//! - Folder sub-pages additionally reserve `folder-up` on every page.
//!
//! Content that exactly fills the last page's free cells produces no trailing
//! empty page and no `next` reservation.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::content::ContentItem;
use crate::domain::device::DeviceGrid;
use crate::domain::geometry::{Cell, NavPlacement, NavSlot};
use crate::domain::page::{Page, PageId, PageKind};
use crate::packing::BuildDiagnostic;

/// Describes one chain segment to the packer.
#[derive(Debug, Clone)]
pub struct SegmentSpec<'a> {
    /// Structural label; page ids derive from `label` + ordinal.
    pub label: &'a str,
    /// Owning group name, carried onto the produced pages.
    pub group: Option<String>,
    /// Kind of the segment's first page.
    pub kind_first: PageKind,
    /// Kind of every following page.
    pub kind_rest: PageKind,
    /// Whether this segment's first page is the first page of the whole
    /// chain (and therefore gets no `prev` reservation).
    pub chain_start: bool,
    /// Whether further segments follow; forces a `next` reservation on this
    /// segment's last page.
    pub more_after: bool,
    /// Reserve a `folder-up` cell on every page (folder sub-chains only).
    pub reserve_folder_up: bool,
}

/// Packs `items` into the minimum number of pages.
///
/// Empty input still yields exactly one page. While items remain, every page
/// keeps at least one content cell: reservations are surrendered in inverse
/// priority order (`prev`, then `next`, then `folder-up`) and each surrender
/// is recorded in `diagnostics`.
pub fn pack_segment(
    items: &[ContentItem],
    grid: DeviceGrid,
    nav: &NavPlacement,
    spec: &SegmentSpec<'_>,
    diagnostics: &mut Vec<BuildDiagnostic>,
) -> Vec<Page> {
    let capacity = grid.capacity();
    let mut pages = Vec::new();
    let mut cursor = 0usize;

    loop {
        let index = pages.len();
        let id = PageId::derive(spec.label, index);
        let kind = if index == 0 { spec.kind_first } else { spec.kind_rest };
        let mut page = Page::new(id, kind, spec.group.clone(), grid);

        let mut up_cell = spec.reserve_folder_up.then_some(nav.folder_up);

        let want_prev = !(spec.chain_start && index == 0);
        let mut prev_cell = None;
        if want_prev {
            match nav.prev {
                Some(cell) => prev_cell = Some(cell),
                None => record(diagnostics, BuildDiagnostic::NavButtonUnplaceable {
                    page: id,
                    slot: NavSlot::Prev,
                }),
            }
        }

        // Free cells if no `next` is reserved; decides whether one is needed.
        let free_without_next =
            capacity - up_cell.iter().count() - prev_cell.iter().count();
        let remaining = items.len() - cursor;
        let want_next = remaining > free_without_next || spec.more_after;
        let mut next_cell = None;
        if want_next {
            match nav.next {
                Some(cell) => next_cell = Some(cell),
                None => record(diagnostics, BuildDiagnostic::NavButtonUnplaceable {
                    page: id,
                    slot: NavSlot::Next,
                }),
            }
        }

        // Keep at least one content cell while items remain, surrendering
        // reservations lowest-priority first.
        if remaining > 0 {
            let surrender_order: [(NavSlot, &mut Option<Cell>); 3] = [
                (NavSlot::Prev, &mut prev_cell),
                (NavSlot::Next, &mut next_cell),
                (NavSlot::FolderUp, &mut up_cell),
            ];
            let mut reserved = surrender_order.iter().filter(|(_, c)| c.is_some()).count();
            for (slot, cell) in surrender_order {
                if capacity > reserved {
                    break;
                }
                if cell.take().is_some() {
                    reserved -= 1;
                    record(diagnostics, BuildDiagnostic::ReservationSurrendered {
                        page: id,
                        slot,
                    });
                }
            }
        }

        let reserved: HashSet<Cell> =
            [up_cell, prev_cell, next_cell].into_iter().flatten().collect();

        // Row-major fill of unreserved cells, in input order.
        'fill: for row in 0..grid.rows {
            for col in 0..grid.cols {
                let cell = Cell { col, row };
                if reserved.contains(&cell) {
                    continue;
                }
                if cursor >= items.len() {
                    break 'fill;
                }
                page.set(cell, items[cursor].clone());
                cursor += 1;
            }
        }

        if let Some(cell) = prev_cell {
            page.set(cell, ContentItem::NavPrev);
        }
        if let Some(cell) = next_cell {
            page.set(cell, ContentItem::NavNext);
        }
        if let Some(cell) = up_cell {
            page.set(cell, ContentItem::FolderUp);
        }

        debug!(
            segment = spec.label,
            page = index,
            placed = page.entity_count(),
            remaining = items.len() - cursor,
            "packed page"
        );
        pages.push(page);

        if cursor >= items.len() {
            break;
        }
    }

    pages
}

fn record(diagnostics: &mut Vec<BuildDiagnostic>, diagnostic: BuildDiagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
