//! Infrastructure services: everything that touches the outside world.
//!
//! - **`entity_source`** – The seam to the live entity provider. The real
//!   connection (WebSocket, reconnect, subscriptions) lives outside this
//!   repository; here is the trait the application consumes plus a static
//!   fixture implementation.
//!
//! - **`storage`** – TOML configuration persistence.

pub mod entity_source;
pub mod storage;
