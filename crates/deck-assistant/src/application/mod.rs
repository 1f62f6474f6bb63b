//! Application layer use cases.
//!
//! Use cases orchestrate the pure engine in `deck-core` to fulfil a user
//! goal. They depend on abstractions (the entity-source trait) rather than
//! concrete transports, and contain no file system or network calls; the
//! only I/O in the whole pipeline lives in `deck-profile`'s bundle writer
//! and the `infrastructure` layer.
//!
//! # Sub-modules
//!
//! - **`rebuild_profile`** – Converts an immutable selection snapshot into a
//!   freshly built navigation graph. Runs on every user edit.
//!
//! - **`session_registry`** – The in-memory registry of buttons attached to
//!   the current session, keyed by typed handles.
//!
//! - **`wizard`** – The setup wizard's step machine: a closed state union
//!   and a pure transition function, independent of any rendering layer.

pub mod rebuild_profile;
pub mod session_registry;
pub mod wizard;
