// tests/tracker_tests.rs
use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use url::Url;

use filetrail::events::ManualActivationSource;
use filetrail::store::{MemoryStore, WorkspaceStore};
use filetrail::tracker::{RecentFilesTracker, STORAGE_KEY};

fn uri(path: &str) -> Url {
    Url::parse(&format!("file://{path}")).unwrap()
}

fn paths(tracker: &RecentFilesTracker) -> Vec<String> {
    tracker
        .ordered()
        .iter()
        .map(|entry| entry.path_key().to_string())
        .collect()
}

#[test]
fn test_activation_inserts_at_front() {
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[]);

    tracker.record_activation(&uri("/a.rs"));
    tracker.record_activation(&uri("/b.rs"));

    assert_eq!(paths(&tracker), vec!["/b.rs", "/a.rs"]);
}

#[test]
fn test_activation_writes_through_to_store() {
    let store = MemoryStore::new();
    let observer = store.clone();
    let tracker = RecentFilesTracker::new(Box::new(store), 50, &[]);

    tracker.record_activation(&uri("/notes/today.md"));

    assert_eq!(
        observer.get(STORAGE_KEY),
        Some(json!([
            { "serializedUri": "file:///notes/today.md", "fileName": "today.md" }
        ]))
    );
}

#[test]
fn test_repeat_activation_keeps_single_entry_at_front() {
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[]);

    tracker.record_activation(&uri("/a"));
    tracker.record_activation(&uri("/b"));
    tracker.record_activation(&uri("/a"));

    assert_eq!(paths(&tracker), vec!["/a", "/b"]);
}

#[test]
fn test_activation_is_idempotent() {
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[]);

    tracker.record_activation(&uri("/a"));
    tracker.record_activation(&uri("/b"));
    let once = tracker.ordered();

    tracker.record_activation(&uri("/b"));
    assert_eq!(tracker.ordered(), once);
}

#[test]
fn test_capacity_evicts_least_recent() {
    let store = MemoryStore::new();
    let observer = store.clone();
    let tracker = RecentFilesTracker::new(Box::new(store), 2, &[]);

    tracker.record_activation(&uri("/a"));
    tracker.record_activation(&uri("/b"));
    tracker.record_activation(&uri("/c"));

    assert_eq!(paths(&tracker), vec!["/c", "/b"]);

    // Persisted form matches memory after eviction
    let persisted = observer.get(STORAGE_KEY).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 2);
}

#[test]
fn test_identity_change_promotes_and_updates_uri() {
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[]);

    tracker.record_activation(&Url::parse("file:///a/b.txt").unwrap());
    tracker.record_activation(&uri("/other"));

    // Same path, updated locator: one entry for the path, at the front,
    // carrying the new URI.
    let updated = Url::parse("remote:///a/b.txt?session=2").unwrap();
    tracker.record_activation(&updated);

    let ordered = tracker.ordered();
    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].uri(), &updated);
    assert_eq!(ordered[0].path_key(), "/a/b.txt");
}

#[test]
fn test_hydration_restores_order_and_names() {
    let mut store = MemoryStore::new();
    store.update(
        STORAGE_KEY,
        json!([
            { "serializedUri": "file:///b.rs", "fileName": "b.rs" },
            { "serializedUri": "file:///a.rs", "fileName": "a.rs" }
        ]),
    );

    let tracker = RecentFilesTracker::new(Box::new(store), 50, &[]);

    assert_eq!(paths(&tracker), vec!["/b.rs", "/a.rs"]);
    assert_eq!(tracker.ordered()[0].file_name(), "b.rs");
}

#[test]
fn test_hydration_normalizes_non_array_value() {
    let mut store = MemoryStore::new();
    store.update(STORAGE_KEY, json!({ "bogus": true }));
    let observer = store.clone();

    let tracker = RecentFilesTracker::new(Box::new(store), 50, &[]);

    assert!(tracker.ordered().is_empty());
    assert_eq!(observer.get(STORAGE_KEY), Some(json!([])));
}

#[test]
fn test_hydration_skips_malformed_entries() {
    let mut store = MemoryStore::new();
    store.update(
        STORAGE_KEY,
        json!([
            { "serializedUri": "file:///good.rs", "fileName": "good.rs" },
            42,
            { "serializedUri": "not a uri", "fileName": "bad.rs" },
            { "serializedUri": "file:///also-good.rs", "fileName": "also-good.rs" }
        ]),
    );
    let observer = store.clone();

    let tracker = RecentFilesTracker::new(Box::new(store), 50, &[]);

    assert_eq!(paths(&tracker), vec!["/good.rs", "/also-good.rs"]);

    // Storage is rewritten without the skipped entries
    let persisted = observer.get(STORAGE_KEY).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 2);
}

#[test]
fn test_hydration_honors_lowered_capacity() {
    let mut store = MemoryStore::new();
    store.update(
        STORAGE_KEY,
        json!([
            { "serializedUri": "file:///a", "fileName": "a" },
            { "serializedUri": "file:///b", "fileName": "b" },
            { "serializedUri": "file:///c", "fileName": "c" }
        ]),
    );
    let observer = store.clone();

    let tracker = RecentFilesTracker::new(Box::new(store), 2, &[]);

    assert_eq!(paths(&tracker), vec!["/a", "/b"]);
    let persisted = observer.get(STORAGE_KEY).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 2);
}

#[test]
fn test_startup_snapshot_replayed_in_order() {
    let snapshot = [uri("/x"), uri("/y")];
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &snapshot);

    // Y activated last, so Y is most recent
    assert_eq!(paths(&tracker), vec!["/y", "/x"]);
}

#[test]
fn test_snapshot_merges_with_persisted_state() {
    let mut store = MemoryStore::new();
    store.update(
        STORAGE_KEY,
        json!([
            { "serializedUri": "file:///persisted.rs", "fileName": "persisted.rs" },
            { "serializedUri": "file:///open.rs", "fileName": "open.rs" }
        ]),
    );

    // /open.rs is already persisted and also open at startup: it is
    // promoted, not duplicated.
    let snapshot = [uri("/open.rs")];
    let tracker = RecentFilesTracker::new(Box::new(store), 50, &snapshot);

    assert_eq!(paths(&tracker), vec!["/open.rs", "/persisted.rs"]);
}

#[test]
fn test_live_activation_fires_change_notification() {
    let source = ManualActivationSource::new();
    let mut tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[uri("/x")]);

    let notified = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&notified);
    let _subscription = tracker.on_did_change(move |_| sink.set(sink.get() + 1));

    // Construction and snapshot replay fired nothing
    assert_eq!(notified.get(), 0);

    tracker.attach(&source);
    source.activate(&uri("/a"));
    source.activate(&uri("/b"));

    assert_eq!(notified.get(), 2);
    assert_eq!(paths(&tracker), vec!["/b", "/a", "/x"]);
}

#[test]
fn test_teardown_ignores_later_events() {
    let source = ManualActivationSource::new();
    let mut tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 50, &[]);

    let notified = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&notified);
    let _subscription = tracker.on_did_change(move |_| sink.set(sink.get() + 1));

    tracker.attach(&source);
    source.activate(&uri("/a"));

    tracker.teardown();
    tracker.teardown(); // idempotent

    source.activate(&uri("/b"));

    assert_eq!(paths(&tracker), vec!["/a"]);
    assert_eq!(notified.get(), 1);
}

#[test]
fn test_length_never_exceeds_capacity() {
    let tracker = RecentFilesTracker::new(Box::new(MemoryStore::new()), 5, &[]);

    for i in 0..20 {
        tracker.record_activation(&uri(&format!("/file-{i}.rs")));
        assert!(tracker.ordered().len() <= 5);
    }
}
