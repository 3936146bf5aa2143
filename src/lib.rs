//! filetrail - workspace-scoped recent-files tracking.
//!
//! This crate maintains, per user workspace, a most-recently-used ordered
//! list of documents that have recently become active. The list is bounded
//! to a fixed capacity, mirrored to a persistence store on every mutation
//! (write-through), and rehydrated from that store across process restarts.
//!
//! # Modules
//!
//! - `identity`: path-key matching and display-name derivation for URIs
//! - `tracker`: the recent list, its entries, and the tracker that ties
//!   hydration, activation events, and persistence together
//! - `store`: the workspace-scoped key-value store trait plus in-memory
//!   and JSON-file-backed implementations
//! - `events`: event emitters, disposable subscriptions, and activation
//!   sources
//! - `config`: TOML configuration with sensible defaults
//!
//! # Example
//!
//! ```
//! use filetrail::store::MemoryStore;
//! use filetrail::tracker::RecentFilesTracker;
//! use url::Url;
//!
//! let store = Box::new(MemoryStore::new());
//! let mut tracker = RecentFilesTracker::new(store, 50, &[]);
//!
//! let notes = Url::parse("file:///tmp/notes.md").unwrap();
//! tracker.record_activation(&notes);
//!
//! let ordered = tracker.ordered();
//! assert_eq!(ordered[0].file_name(), "notes.md");
//! tracker.teardown();
//! ```

pub mod config;
pub mod events;
pub mod identity;
pub mod store;
pub mod tracker;
