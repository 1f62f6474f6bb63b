//! Writes the `.sdProfile` bundle to disk.
//!
//! Bundle layout:
//!
//! ```text
//! <Name>.sdProfile/
//!   manifest.json                      -- top-level index, written LAST
//!   Profiles/
//!     <encoded-page-id>/manifest.json  -- one record set per page
//! ```
//!
//! The index is the marker a consumer uses to recognise a complete bundle,
//! so it is written only after every page record set landed. Any earlier
//! failure surfaces as [`SerializationError`] and leaves the bundle without
//! an index.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use deck_core::domain::geometry::Corner;
use deck_core::domain::page::PageId;
use deck_core::graph::NavigationGraph;

use crate::ids::device_folder_id;
use crate::manifest::{page_manifest, CellAction, IndexPages, ProfileIndex, INDEX_VERSION};

/// Error type for bundle serialization.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// A file system operation failed.
    #[error("I/O error writing bundle at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be rendered as JSON.
    #[error("failed to serialize bundle record: {0}")]
    Json(#[from] serde_json::Error),

    /// A navigation button references an edge that was never wired.
    #[error("page {page}: navigation cell {cell} has no wired target")]
    MissingTarget { page: PageId, cell: String },
}

/// Caller-supplied bundle parameters.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Profile display name; also the basis of the bundle directory name.
    pub profile_name: String,
    /// Corner of the entry page that carries the return-to-prior action.
    pub back_corner: Corner,
}

/// Writes the bundle for `graph` under `dest_dir`, returning the bundle root.
///
/// An existing bundle of the same name is replaced wholesale; partial output
/// from a previous failed run never survives into a new one.
///
/// # Errors
///
/// Returns [`SerializationError`] on any I/O or serialization failure. The
/// top-level index is only written after every page, per the all-or-nothing
/// contract.
pub fn write_bundle(
    graph: &NavigationGraph,
    options: &BundleOptions,
    dest_dir: &Path,
) -> Result<PathBuf, SerializationError> {
    let root = dest_dir.join(format!("{}.sdProfile", safe_file_name(&options.profile_name)));

    if root.exists() {
        std::fs::remove_dir_all(&root).map_err(|source| SerializationError::Io {
            path: root.clone(),
            source,
        })?;
    }

    let profiles_dir = root.join("Profiles");
    std::fs::create_dir_all(&profiles_dir).map_err(|source| SerializationError::Io {
        path: profiles_dir.clone(),
        source,
    })?;

    let entry = graph.entry_page_id();
    for page in graph.pages() {
        let mut manifest = page_manifest(page)?;

        // The single return-to-prior action lives at the configured corner
        // of the entry page and nowhere else.
        if page.id == entry {
            let key = options.back_corner.cell(page.grid()).key();
            let actions = &mut manifest.controllers[0].actions;
            if actions.insert(key.clone(), CellAction::ReturnToPrior).is_some() {
                warn!(cell = %key, "return action replaced an occupied entry-page cell");
            }
        }

        let page_dir = profiles_dir.join(device_folder_id(page.id.as_uuid()));
        std::fs::create_dir_all(&page_dir).map_err(|source| SerializationError::Io {
            path: page_dir.clone(),
            source,
        })?;
        write_json(&page_dir.join("manifest.json"), &manifest)?;
    }

    // Index last: its presence certifies a complete bundle.
    let index = ProfileIndex {
        name: options.profile_name.clone(),
        pages: IndexPages {
            current: entry,
            pages: graph.pages().iter().map(|p| p.id).collect(),
        },
        version: INDEX_VERSION.to_string(),
    };
    write_json(&root.join("manifest.json"), &index)?;

    info!(
        bundle = %root.display(),
        pages = graph.pages().len(),
        "profile bundle written"
    );
    Ok(root)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), SerializationError> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(|source| SerializationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Strips a profile name down to filesystem-safe characters, collapsing
/// whitespace runs to underscores.
fn safe_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "profile".to_string()
    } else {
        joined
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
