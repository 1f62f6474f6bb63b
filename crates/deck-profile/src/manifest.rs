//! Bundle record types.
//!
//! Every record is plain JSON. A page record set maps zero-indexed
//! `"col,row"` coordinates (origin top-left) to actions:
//!
//! ```json
//! {"0,0": {"invoke": "light.kitchen"}, "4,2": {"jumpTo": "7f9c…"}}
//! ```
//!
//! The top-level index names the profile, lists every generated page id, and
//! marks the entry page:
//!
//! ```json
//! {"Name": "Home", "Pages": {"Current": "7f9c…", "Pages": ["7f9c…"]}, "Version": "2.0"}
//! ```
//!
//! Serde's externally-tagged enum representation produces the
//! `{"invoke": …}` / `{"jumpTo": …}` shapes directly; the entry page's
//! return action is the bare string `"returnToPrior"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use deck_core::domain::content::ContentItem;
use deck_core::domain::page::{Page, PageId, PageKind};

use crate::writer::SerializationError;

/// Index format version; matches the device's profile schema.
pub const INDEX_VERSION: &str = "2.0";

/// One cell's action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellAction {
    /// Invoke the entity behind this button.
    #[serde(rename = "invoke")]
    Invoke(String),
    /// Jump to another page of this profile.
    #[serde(rename = "jumpTo")]
    JumpTo(PageId),
    /// Leave the profile and return to whatever was active before it.
    /// Emitted exactly once, on the entry page.
    #[serde(rename = "returnToPrior")]
    ReturnToPrior,
}

/// The record set for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(rename = "Id")]
    pub id: PageId,
    #[serde(rename = "Kind")]
    pub kind: PageKind,
    #[serde(rename = "Controllers")]
    pub controllers: Vec<Controller>,
}

/// One controller's action map. Key grids have a single `Keypad` controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    /// Occupied cells, keyed `"col,row"`. A `BTreeMap` keeps the emitted
    /// JSON deterministic across rebuilds.
    #[serde(rename = "Actions")]
    pub actions: BTreeMap<String, CellAction>,
    #[serde(rename = "Type")]
    pub controller_type: String,
}

/// The top-level bundle index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileIndex {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Pages")]
    pub pages: IndexPages,
    #[serde(rename = "Version")]
    pub version: String,
}

/// Page enumeration inside the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPages {
    /// The entry page presented when the profile is activated.
    #[serde(rename = "Current")]
    pub current: PageId,
    /// Every generated page id, linear chain first.
    #[serde(rename = "Pages")]
    pub pages: Vec<PageId>,
}

/// Builds the record set for one page from its occupied cells.
///
/// # Errors
///
/// Returns [`SerializationError::MissingTarget`] if a navigation button sits
/// on a page whose corresponding edge was never wired. A catalog-built graph
/// cannot produce this; it guards against hand-assembled graphs.
pub fn page_manifest(page: &Page) -> Result<PageManifest, SerializationError> {
    let mut actions = BTreeMap::new();
    for (cell, item) in page.occupied() {
        let action = match item {
            ContentItem::Entity(button) => CellAction::Invoke(button.entity_id.clone()),
            ContentItem::Folder { target, .. } => CellAction::JumpTo(*target),
            ContentItem::NavPrev => CellAction::JumpTo(require_edge(page, page.edges.prev, cell)?),
            ContentItem::NavNext => CellAction::JumpTo(require_edge(page, page.edges.next, cell)?),
            ContentItem::FolderUp => {
                CellAction::JumpTo(require_edge(page, page.edges.parent, cell)?)
            }
        };
        actions.insert(cell.key(), action);
    }

    Ok(PageManifest {
        id: page.id,
        kind: page.kind,
        controllers: vec![Controller {
            actions,
            controller_type: "Keypad".to_string(),
        }],
    })
}

fn require_edge(
    page: &Page,
    edge: Option<PageId>,
    cell: deck_core::domain::geometry::Cell,
) -> Result<PageId, SerializationError> {
    edge.ok_or(SerializationError::MissingTarget {
        page: page.id,
        cell: cell.key(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
