//! # deck-profile
//!
//! Serializes a finished [`deck_core::NavigationGraph`] into the portable
//! `.sdProfile` bundle: one record set per page mapping `"col,row"` cell
//! coordinates to actions, plus a top-level index enumerating every page and
//! marking the entry page.
//!
//! This is the only I/O step of the engine, and it is all-or-nothing: page
//! record sets are written first and the index last, so a failed write never
//! leaves behind a bundle that a consumer could mistake for complete.

pub mod ids;
pub mod manifest;
pub mod writer;

pub use ids::device_folder_id;
pub use manifest::{CellAction, Controller, IndexPages, PageManifest, ProfileIndex};
pub use writer::{write_bundle, BundleOptions, SerializationError};
