//! Navigation graph construction.
//!
//! Pages are built bottom-up: folder sub-chains first (their ids derive from
//! structural paths, so folder buttons already know their targets), then the
//! linear chain, then edge wiring. Opener links are assigned only after both
//! sides exist, which makes the graph acyclic by construction — no mutable
//! back-references, no patch-up pass.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalog::{page_segment_label, ContentPlan};
use crate::domain::content::ContentItem;
use crate::domain::device::DeviceGrid;
use crate::domain::geometry::{nav_cells, Corner, NavPlacement};
use crate::domain::page::{Page, PageId, PageKind};
use crate::domain::ConfigurationError;
use crate::packing::{build_folder_chain, pack_segment, SegmentSpec};

pub use crate::packing::BuildDiagnostic;

/// Device and corner preferences for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSettings {
    pub grid: DeviceGrid,
    /// Corner hosting the prev/next pair.
    pub nav_corner: Corner,
    /// Corner hosting the folder-up button; `None` uses the corner opposite
    /// the nav pair.
    pub folder_up_corner: Option<Corner>,
}

/// The finished page graph: a linear chain of pages plus one folder
/// sub-chain per Folder-type group, all edges wired.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationGraph {
    /// Linear-chain pages first (in chain order), then each folder
    /// sub-chain in group order.
    pages: Vec<Page>,
    entry: PageId,
    diagnostics: Vec<BuildDiagnostic>,
}

impl NavigationGraph {
    /// All pages, linear chain first.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Looks up a page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Id of the entry page: the page shown when the layout is activated.
    pub fn entry_page_id(&self) -> PageId {
        self.entry
    }

    /// The entry page itself.
    pub fn entry_page(&self) -> &Page {
        // The builder never produces a graph without its entry page.
        self.page(self.entry)
            .unwrap_or_else(|| &self.pages[0])
    }

    /// Pages participating in the linear prev/next chain, in order.
    pub fn linear_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.kind.is_linear())
    }

    /// Recoverable conditions recorded while building.
    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }
}

/// Builds the navigation graph from a resolved content plan.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidGrid`] for zero-dimension grids.
/// Everything else degrades into [`BuildDiagnostic`] entries.
pub fn build_graph(
    plan: &ContentPlan,
    settings: &LayoutSettings,
) -> Result<NavigationGraph, ConfigurationError> {
    let grid = DeviceGrid::new(settings.grid.cols, settings.grid.rows)?;
    let nav = nav_cells(grid, settings.nav_corner, settings.folder_up_corner);
    let mut diagnostics = Vec::new();

    // Folder sub-chains first; their first-page ids are already referenced
    // by the folder buttons in the lead list.
    let folder_chains: Vec<Vec<Page>> = plan
        .folder_segments
        .iter()
        .map(|seg| build_folder_chain(&seg.name, &seg.items, grid, &nav, &mut diagnostics))
        .collect();

    let mut linear = pack_linear_chain(plan, grid, &nav, &mut diagnostics);
    wire_sequential(&mut linear);

    // Opener resolution: the page instance holding each group's folder
    // button. A folder opened from an overflow page returns to that page.
    let openers: HashMap<String, PageId> = linear
        .iter()
        .flat_map(|page| {
            page.occupied().filter_map(move |(_, item)| match item {
                ContentItem::Folder { group_name, .. } => {
                    Some((group_name.clone(), page.id))
                }
                _ => None,
            })
        })
        .collect();

    let mut pages = linear;
    for (chain, segment) in folder_chains.into_iter().zip(&plan.folder_segments) {
        let mut chain = chain;
        wire_sequential(&mut chain);
        match openers.get(&segment.name) {
            Some(opener) => {
                for page in &mut chain {
                    page.edges.parent = Some(*opener);
                }
            }
            None => {
                // Unreachable with a catalog-produced plan; tolerated so a
                // hand-built plan cannot panic the engine.
                warn!(group = %segment.name, "folder chain has no opener button");
            }
        }
        pages.extend(chain);
    }

    let entry = pages[0].id;
    debug!(
        pages = pages.len(),
        diagnostics = diagnostics.len(),
        "navigation graph built"
    );

    Ok(NavigationGraph { pages, entry, diagnostics })
}

/// Packs the linear chain: the lead segment followed by one segment per
/// Page-type group. An empty lead is omitted when page segments exist, so
/// the first page-group page becomes the entry page.
fn pack_linear_chain(
    plan: &ContentPlan,
    grid: DeviceGrid,
    nav: &NavPlacement,
    diagnostics: &mut Vec<BuildDiagnostic>,
) -> Vec<Page> {
    let include_lead = !plan.lead.is_empty() || plan.page_segments.is_empty();

    let mut pages = Vec::new();
    let segment_count = usize::from(include_lead) + plan.page_segments.len();
    let mut segment_index = 0usize;

    if include_lead {
        let spec = SegmentSpec {
            label: "main",
            group: None,
            kind_first: PageKind::Main,
            kind_rest: PageKind::Overflow,
            chain_start: true,
            more_after: segment_count > 1,
            reserve_folder_up: false,
        };
        pages.extend(pack_segment(&plan.lead, grid, nav, &spec, diagnostics));
        segment_index += 1;
    }

    for segment in &plan.page_segments {
        let label = page_segment_label(&segment.name);
        let spec = SegmentSpec {
            label: &label,
            group: Some(segment.name.clone()),
            kind_first: PageKind::PageGroup,
            kind_rest: PageKind::PageGroup,
            chain_start: segment_index == 0,
            more_after: segment_index + 1 < segment_count,
            reserve_folder_up: false,
        };
        pages.extend(pack_segment(&segment.items, grid, nav, &spec, diagnostics));
        segment_index += 1;
    }

    pages
}

/// Wires prev/next edges along a run of pages.
fn wire_sequential(pages: &mut [Page]) {
    let ids: Vec<PageId> = pages.iter().map(|p| p.id).collect();
    for (i, page) in pages.iter_mut().enumerate() {
        page.edges.prev = (i > 0).then(|| ids[i - 1]);
        page.edges.next = ids.get(i + 1).copied();
    }
}

/// Convenience for tests and callers: resolves a [`crate::catalog::Selection`]
/// and builds the graph in one step.
pub fn build_from_selection(
    selection: &crate::catalog::Selection,
    settings: &LayoutSettings,
) -> Result<NavigationGraph, ConfigurationError> {
    let plan = crate::catalog::resolve(selection)?;
    build_graph(&plan, settings)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
