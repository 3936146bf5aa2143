//! Recent-files tracking.
//!
//! The tracker owns the in-memory MRU list, mirrors it to the workspace
//! store on every mutation (write-through), and notifies listeners when
//! an activation changes the list.
//!
//! # Modules
//!
//! - `entry`: one tracked document and its wire form
//! - `list`: the MRU-ordered, capacity-bounded sequence
//!
//! # Lifecycle
//!
//! A tracker hydrates once from persisted state at construction, replays
//! the startup snapshot of already-open documents (silently, without
//! change notifications), then records every live activation until
//! [`RecentFilesTracker::teardown`]. Persisted state outlives the
//! in-memory structure; eviction is the only removal path.

pub mod entry;
pub mod list;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use url::Url;

use crate::events::{ActivationSource, EventEmitter, Subscription};
use crate::store::WorkspaceStore;
use entry::{RecentEntry, SerializedEntry};
use list::RecentList;

/// Storage key for the persisted recent list, scoped per workspace.
pub const STORAGE_KEY: &str = "recentFiles";

struct TrackerState {
    list: RecentList,
    store: Box<dyn WorkspaceStore>,
}

impl TrackerState {
    /// Reads the persisted list out of the store, self-healing anything
    /// malformed: a non-array value is normalized to an empty list and
    /// rewritten immediately; an individual entry that no longer
    /// deserializes is skipped.
    fn hydrate(store: Box<dyn WorkspaceStore>, capacity: usize) -> Self {
        let mut state = Self {
            list: RecentList::new(capacity),
            store,
        };

        match state.store.get(STORAGE_KEY) {
            None => {}
            Some(Value::Array(items)) => {
                let stored = items.len();
                let mut entries = Vec::with_capacity(stored);

                for item in items {
                    match serde_json::from_value::<SerializedEntry>(item) {
                        Ok(serialized) => match RecentEntry::from_serialized(&serialized) {
                            Some(entry) => entries.push(entry),
                            None => log::warn!(
                                "skipping persisted entry with unparseable URI {:?}",
                                serialized.serialized_uri
                            ),
                        },
                        Err(err) => log::warn!("skipping malformed persisted entry: {err}"),
                    }
                }

                state.list = RecentList::from_entries(entries, capacity);
                log::debug!("hydrated {} recent entries", state.list.len());

                // Skips, duplicates, or a lowered capacity leave storage
                // out of sync with memory; rewrite it once.
                if state.list.len() != stored {
                    state.persist();
                }
            }
            Some(_) => {
                log::warn!("persisted recent list is not an array, resetting to empty");
                state.persist();
            }
        }

        state
    }

    fn record(&mut self, uri: &Url) {
        self.list.record(RecentEntry::new(uri.clone()));
        self.persist();
    }

    fn persist(&mut self) {
        let items: Vec<Value> = self
            .list
            .entries()
            .iter()
            .map(RecentEntry::to_json)
            .collect();
        self.store.update(STORAGE_KEY, Value::Array(items));
    }
}

/// Tracks the distinct documents that have recently become active in one
/// workspace.
///
/// All operations are synchronous and run to completion before the next
/// activation is handled; search, promote, evict, persist, and notify
/// are atomic from an observer's point of view.
pub struct RecentFilesTracker {
    state: Rc<RefCell<TrackerState>>,
    changed: EventEmitter<()>,
    subscription: Option<Subscription>,
}

impl RecentFilesTracker {
    /// Builds a tracker over `store`, hydrating persisted state and then
    /// replaying `open_documents` (the startup snapshot, in the order
    /// supplied) through the activation algorithm. No change
    /// notifications fire during construction.
    pub fn new(store: Box<dyn WorkspaceStore>, capacity: usize, open_documents: &[Url]) -> Self {
        let mut state = TrackerState::hydrate(store, capacity);
        for uri in open_documents {
            state.record(uri);
        }

        Self {
            state: Rc::new(RefCell::new(state)),
            changed: EventEmitter::new(),
            subscription: None,
        }
    }

    /// Subscribes to a live activation source. Holds at most one
    /// subscription; attaching again releases the previous one.
    pub fn attach(&mut self, source: &dyn ActivationSource) {
        let state = Rc::downgrade(&self.state);
        let changed = self.changed.clone();

        let subscription = source.on_did_activate(Box::new(move |uri| {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().record(uri);
                changed.emit(&());
            }
        }));

        if let Some(mut previous) = self.subscription.replace(subscription) {
            previous.dispose();
        }
    }

    /// Records that `uri` just became active.
    ///
    /// Any existing entry for the same document path is promoted to the
    /// front carrying the current URI and display name; otherwise a new
    /// entry is inserted at the front. The tail is evicted while the
    /// capacity bound is exceeded, the full list is persisted, and the
    /// change notification fires.
    pub fn record_activation(&self, uri: &Url) {
        self.state.borrow_mut().record(uri);
        self.changed.emit(&());
    }

    /// Current MRU ordering, most recent first. Read-only snapshot; no
    /// mutation, no persistence side effect.
    pub fn ordered(&self) -> Vec<RecentEntry> {
        self.state.borrow().list.entries().to_vec()
    }

    /// Registers a listener fired after every activation-driven mutation,
    /// so a rendering layer can re-pull [`RecentFilesTracker::ordered`].
    pub fn on_did_change(&self, listener: impl FnMut(&()) + 'static) -> Subscription {
        self.changed.subscribe(listener)
    }

    /// Releases the activation subscription. Idempotent; activation
    /// events delivered after teardown have no effect.
    pub fn teardown(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }
}

impl Drop for RecentFilesTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}
