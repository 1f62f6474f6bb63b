//! Page bin-packing: fills fixed-capacity pages from an ordered content list,
//! reserving cells for navigation buttons.
//!
//! The packer never fails. Conditions that would make a navigation button
//! unplaceable (one-column devices, single-cell devices) degrade into
//! [`BuildDiagnostic`] entries while the content itself is always placed.

use crate::domain::geometry::NavSlot;
use crate::domain::page::PageId;

pub mod folder;
pub mod packer;

pub use folder::build_folder_chain;
pub use packer::{pack_segment, SegmentSpec};

/// A recoverable condition recorded during a build.
///
/// Diagnostics never abort the build: the rest of the graph remains valid and
/// the affected button is simply absent from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// A wanted reservation was surrendered so the page kept at least one
    /// content cell. Reached only on degenerate near-single-cell devices.
    ReservationSurrendered { page: PageId, slot: NavSlot },

    /// A wanted navigation button has no in-bounds cell on this device grid.
    NavButtonUnplaceable { page: PageId, slot: NavSlot },
}

impl std::fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildDiagnostic::ReservationSurrendered { page, slot } => {
                write!(f, "page {page}: surrendered {slot} reservation to place content")
            }
            BuildDiagnostic::NavButtonUnplaceable { page, slot } => {
                write!(f, "page {page}: no in-bounds cell for {slot} button")
            }
        }
    }
}
