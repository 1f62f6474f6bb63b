//! Session button registry.
//!
//! While a generated profile is active, every key that appears on the device
//! attaches itself here so state updates can be routed to it, and detaches
//! when it disappears. The registry is owned by the session: no module-level
//! maps, no context strings — a typed handle is issued at attach time and is
//! the only way to address a binding afterwards.

use std::collections::HashMap;

use deck_core::domain::page::PageId;
use uuid::Uuid;

/// Opaque handle identifying one attached button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonHandle(Uuid);

impl ButtonHandle {
    fn new() -> Self {
        ButtonHandle(Uuid::new_v4())
    }
}

/// What one attached button is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBinding {
    /// The entity this button displays and invokes.
    pub entity_id: String,
    /// The page the button lives on.
    pub page: PageId,
}

/// In-memory registry of all buttons attached to the current session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    bindings: HashMap<ButtonHandle, ButtonBinding>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding and issues its handle.
    pub fn attach(&mut self, binding: ButtonBinding) -> ButtonHandle {
        let handle = ButtonHandle::new();
        self.bindings.insert(handle, binding);
        handle
    }

    /// Removes a binding. Detaching an unknown or already-detached handle is
    /// a no-op, so disappear notifications may arrive more than once.
    pub fn detach(&mut self, handle: ButtonHandle) -> Option<ButtonBinding> {
        self.bindings.remove(&handle)
    }

    /// The binding behind a handle.
    pub fn get(&self, handle: ButtonHandle) -> Option<&ButtonBinding> {
        self.bindings.get(&handle)
    }

    /// All handles currently bound to `entity_id`, for fan-out of state
    /// updates. An entity can appear on several pages at once.
    pub fn handles_for_entity(&self, entity_id: &str) -> Vec<ButtonHandle> {
        self.bindings
            .iter()
            .filter(|(_, b)| b.entity_id == entity_id)
            .map(|(h, _)| *h)
            .collect()
    }

    /// Number of attached buttons.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Empties the registry at session shutdown, returning the bindings that
    /// were still attached.
    pub fn drain(&mut self) -> Vec<ButtonBinding> {
        self.bindings.drain().map(|(_, b)| b).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(entity: &str) -> ButtonBinding {
        ButtonBinding {
            entity_id: entity.to_string(),
            page: PageId::derive("main", 0),
        }
    }

    #[test]
    fn test_attach_then_get_round_trips() {
        let mut registry = SessionRegistry::new();
        let handle = registry.attach(binding("light.desk"));
        assert_eq!(registry.get(handle), Some(&binding("light.desk")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_detach_removes_binding() {
        let mut registry = SessionRegistry::new();
        let handle = registry.attach(binding("light.desk"));
        assert_eq!(registry.detach(handle), Some(binding("light.desk")));
        assert!(registry.get(handle).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut registry = SessionRegistry::new();
        let handle = registry.attach(binding("light.desk"));
        registry.detach(handle);
        assert_eq!(registry.detach(handle), None);
    }

    #[test]
    fn test_handles_for_entity_finds_all_occurrences() {
        let mut registry = SessionRegistry::new();
        let a = registry.attach(binding("light.desk"));
        let b = registry.attach(binding("light.desk"));
        registry.attach(binding("switch.fan"));

        let mut handles = registry.handles_for_entity("light.desk");
        handles.sort_by_key(|h| format!("{h:?}"));
        let mut expected = vec![a, b];
        expected.sort_by_key(|h| format!("{h:?}"));
        assert_eq!(handles, expected);
    }

    #[test]
    fn test_drain_empties_registry_and_returns_bindings() {
        let mut registry = SessionRegistry::new();
        registry.attach(binding("light.desk"));
        registry.attach(binding("switch.fan"));

        let drained = registry.drain();
        assert_eq!(drained.len(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_distinct_attaches_issue_distinct_handles() {
        let mut registry = SessionRegistry::new();
        let a = registry.attach(binding("light.desk"));
        let b = registry.attach(binding("light.desk"));
        assert_ne!(a, b);
    }
}
