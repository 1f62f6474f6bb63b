//! Domain value types for the layout engine.
//!
//! Everything in this module is pure data plus coordinate math: no I/O, no
//! clocks, no global state. The types here are the vocabulary the catalog,
//! packer, and graph builder speak to each other.

use thiserror::Error;

pub mod content;
pub mod device;
pub mod geometry;
pub mod page;

/// Errors detected before any page is built.
///
/// A configuration error halts the rebuild with nothing partial produced.
/// Recoverable build conditions (a navigation button that cannot be placed on
/// a degenerate grid) are *not* errors; they surface as
/// [`crate::graph::BuildDiagnostic`] entries instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The device grid has a zero dimension.
    #[error("device grid has invalid dimensions: {cols}x{rows}")]
    InvalidGrid { cols: u32, rows: u32 },

    /// A style references a color value that cannot be parsed.
    #[error("unresolvable color value: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    /// Two groups share a name, which would make their pages indistinguishable.
    #[error("duplicate group name: {0:?}")]
    DuplicateGroup(String),

    /// The configured device model is not in the device catalog.
    #[error("unknown device model: {0:?}")]
    UnknownModel(String),
}
