//! Pages: a fixed grid of optional content items plus navigation edges.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::content::ContentItem;
use crate::domain::device::DeviceGrid;
use crate::domain::geometry::Cell;

/// Namespace for deriving page identities. Page ids are UUID v5 hashes of a
/// structural path ("which chain, which segment, which ordinal"), so a
/// rebuild of an identical snapshot reproduces identical ids.
const PAGE_NAMESPACE: Uuid = Uuid::from_u128(0x8f9d2c41_6a7b_4e02_9c33_5d1ce0a4b917);

/// Stable page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(Uuid);

impl PageId {
    /// Derives the id of page `index` within a named chain segment.
    ///
    /// `segment` is the structural label, e.g. `"main"`, `"page:Office"`,
    /// or `"folder:Living Room"`.
    pub fn derive(segment: &str, index: usize) -> Self {
        let path = format!("{segment}/{index}");
        PageId(Uuid::new_v5(&PAGE_NAMESPACE, path.as_bytes()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// What role a page plays in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// The first page of the linear chain; the entry page.
    Main,
    /// A continuation page of the lead segment.
    Overflow,
    /// A page belonging to a Page-type group's segment.
    PageGroup,
    /// A page inside a folder sub-chain, invisible to linear traversal.
    FolderSub,
}

impl PageKind {
    /// `true` for pages that participate in the linear prev/next chain.
    pub fn is_linear(&self) -> bool {
        !matches!(self, PageKind::FolderSub)
    }
}

/// Directed edges leaving a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageEdges {
    /// The nearest preceding linear-chain page, if any.
    pub prev: Option<PageId>,
    /// The next linear-chain page, if any.
    pub next: Option<PageId>,
    /// For folder sub-pages: the exact page whose folder button opened this
    /// sub-chain.
    pub parent: Option<PageId>,
}

/// One page of the generated layout.
///
/// The cell matrix always has the device grid's dimensions; an occupied cell
/// holds exactly one [`ContentItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    /// Name of the owning group, for folder and page-group pages.
    pub group: Option<String>,
    pub edges: PageEdges,
    grid: DeviceGrid,
    cells: Vec<Vec<Option<ContentItem>>>,
}

impl Page {
    /// Creates an empty page sized to the device grid.
    pub fn new(id: PageId, kind: PageKind, group: Option<String>, grid: DeviceGrid) -> Self {
        let cells = (0..grid.rows)
            .map(|_| vec![None; grid.cols as usize])
            .collect();
        Self { id, kind, group, edges: PageEdges::default(), grid, cells }
    }

    /// The device grid this page was laid out for.
    pub fn grid(&self) -> DeviceGrid {
        self.grid
    }

    /// The item at `cell`, if occupied.
    pub fn get(&self, cell: Cell) -> Option<&ContentItem> {
        self.cells
            .get(cell.row as usize)
            .and_then(|row| row.get(cell.col as usize))
            .and_then(|c| c.as_ref())
    }

    /// Places `item` at `cell`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid; callers derive cells from the
    /// same grid this page was created with.
    pub fn set(&mut self, cell: Cell, item: ContentItem) -> Option<ContentItem> {
        self.cells[cell.row as usize][cell.col as usize].replace(item)
    }

    /// Iterates over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &ContentItem)> {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, item)| {
                item.as_ref()
                    .map(|it| (Cell { col: col as u32, row: row as u32 }, it))
            })
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Number of entity buttons on this page.
    pub fn entity_count(&self) -> usize {
        self.occupied()
            .filter(|(_, item)| matches!(item, ContentItem::Entity(_)))
            .count()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
