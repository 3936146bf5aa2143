//! Workspace-scoped key-value persistence.
//!
//! The tracker treats persistence as an opaque get/set store keyed by
//! string, scoped to one workspace. This module defines that contract
//! plus two implementations: an in-memory store for tests and ephemeral
//! sessions, and a JSON-file-backed store for durable state.

pub mod file;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

/// Synchronous, non-failing key-value store scoped to one workspace.
///
/// `update` replaces the stored value and makes it durable before
/// returning (write-through); implementations that cannot guarantee
/// durability log the failure rather than surfacing it, matching the
/// contract the tracker assumes.
pub trait WorkspaceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replaces the stored value for `key`.
    fn update(&mut self, key: &str, value: Value);
}

/// In-memory workspace store.
///
/// Cloning yields another handle to the same underlying map, the way a
/// host hands one workspace state to several consumers. Nothing survives
/// the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkspaceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn update(&mut self, key: &str, value: Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }
}
