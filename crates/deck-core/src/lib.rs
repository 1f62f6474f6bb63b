//! # deck-core
//!
//! Layout engine for Deck Assistant: turns a user's selection of controllable
//! entities (grouped or ungrouped) into a multi-page button layout for a
//! fixed-capacity grid device, and wires the pages into a navigation graph.
//!
//! This crate is pure computation. It performs no I/O, talks to no device,
//! and renders no pixels. Every rebuild is a function of an immutable
//! selection snapshot: the previous graph is discarded and a new one is
//! produced from scratch.
//!
//! The pipeline, in dependency order:
//!
//! - **`domain`** – Value types: the device grid, grid corner math for
//!   navigation buttons, content items, and pages.
//!
//! - **`catalog`** – Resolves groups plus ungrouped selections into the
//!   ordered content list the packer consumes, with styles attached.
//!
//! - **`packing`** – Packs an ordered content list into fixed-capacity
//!   pages, reserving cells for prev/next/folder-up navigation.
//!
//! - **`graph`** – Assigns stable page identities and wires prev, next,
//!   folder, and folder-up edges into an acyclic [`graph::NavigationGraph`].

pub mod catalog;
pub mod domain;
pub mod graph;
pub mod packing;

// Re-export the most-used types at the crate root so callers can write
// `deck_core::NavigationGraph` instead of `deck_core::graph::NavigationGraph`.
pub use catalog::{CatalogEntity, ContentPlan, Group, GroupDisplay, Selection, SortMode};
pub use domain::content::{ButtonStyle, ContentItem, DomainCategory, EntityButton, Rgb, StylePalette};
pub use domain::device::{DeviceGrid, DeviceModel};
pub use domain::geometry::{Cell, Corner, NavPlacement, NavSlot};
pub use domain::page::{Page, PageEdges, PageId, PageKind};
pub use domain::ConfigurationError;
pub use graph::{BuildDiagnostic, LayoutSettings, NavigationGraph};
