//! End-to-end coverage of the interaction store over the in-memory backend:
//! the single-tab flows, the persisted wire format, and cross-tab
//! convergence through the sync bridge.

use std::sync::{Arc, Mutex};

use interactions_app::domain::PostInteractions;
use interactions_app::infrastructure::storage::{
    ChangeListener, KeyValueStorage, MemoryStorage, StorageSubscription,
};
use interactions_app::AppContext;
use interactions_errors::StoreError;

#[test]
fn scenario_like_comment_unlike() {
    let ctx = AppContext::in_memory();

    let on = ctx.likes.toggle("p1").unwrap();
    assert!(on.liked);
    assert_eq!(on.count, 1);

    let comment = ctx.comments.add("p1", "Great post!", Some("Alice")).unwrap();
    assert_eq!(comment.content, "Great post!");
    assert_eq!(comment.author, "Alice");

    let listed = ctx.comments.list("p1");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], comment);

    let off = ctx.likes.toggle("p1").unwrap();
    assert!(!off.liked);
    assert_eq!(off.count, 0);
}

#[test]
fn pure_reads_do_not_mint_an_identity() {
    let ctx = AppContext::in_memory();

    ctx.likes.count("p1");
    ctx.likes.has_liked("p1");
    ctx.comments.list("p1");
    ctx.engagement.for_post("p1");
    assert!(ctx.identity.existing_user_id().is_none());

    ctx.likes.toggle("p1").unwrap();
    assert!(ctx.identity.existing_user_id().is_some());
}

#[test]
fn persisted_layout_matches_documented_keys() {
    let storage = Arc::new(MemoryStorage::new());
    let ctx = AppContext::new(storage.clone());

    ctx.likes.toggle("p1").unwrap();
    ctx.comments.add("p1", "hello", Some("Alice")).unwrap();

    assert_eq!(storage.get("blog_likes_p1"), Some("1".to_string()));

    let user_id = storage.get("blog_user_id").unwrap();
    let liked: Vec<String> =
        serde_json::from_str(&storage.get(&format!("blog_user_likes_{}", user_id)).unwrap())
            .unwrap();
    assert_eq!(liked, vec!["p1".to_string()]);

    let comments: serde_json::Value =
        serde_json::from_str(&storage.get("blog_comments_p1").unwrap()).unwrap();
    let record = &comments.as_array().unwrap()[0];
    assert!(record.get("id").is_some());
    assert_eq!(record["author"], "Alice");
    assert_eq!(record["content"], "hello");
    assert!(record.get("timestamp").is_some());
}

#[test]
fn malformed_persisted_values_read_as_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set("blog_likes_p1", "NaN").unwrap();
    storage.set("blog_comments_p1", "{not json").unwrap();

    let ctx = AppContext::new(storage.clone());
    // Wrong shape under the liked-set key: a number instead of an array.
    let user_id = ctx.identity.user_id().unwrap();
    storage
        .set(&format!("blog_user_likes_{}", user_id), "12")
        .unwrap();

    let snapshot = ctx.engagement.for_post("p1");
    assert_eq!(snapshot.likes, 0);
    assert!(snapshot.comments.is_empty());
    assert!(!snapshot.user_has_liked);
}

#[test]
fn two_tabs_converge_through_the_bridge() {
    let shared = Arc::new(MemoryStorage::new());
    let tab_a = AppContext::new(shared.clone());
    let tab_b = AppContext::new(shared);

    let snapshots: Arc<Mutex<Vec<PostInteractions>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = snapshots.clone();
    let watch = tab_b
        .sync
        .watch_post("p1", move |snapshot| sink.lock().unwrap().push(snapshot));

    tab_a.likes.toggle("p1").unwrap();
    {
        let snapshots = snapshots.lock().unwrap();
        let latest = snapshots.last().expect("bridge observed the toggle");
        assert_eq!(latest.likes, 1);
        // Same browser profile, so tab B sees its own user as the liker.
        assert!(latest.user_has_liked);
    }

    tab_a.comments.add("p1", "from tab A", Some("Alice")).unwrap();
    {
        let snapshots = snapshots.lock().unwrap();
        let latest = snapshots.last().unwrap();
        assert_eq!(latest.comments.len(), 1);
        assert_eq!(latest.comments[0].content, "from tab A");
    }

    let seen = snapshots.lock().unwrap().len();
    drop(watch);
    tab_a.likes.toggle("p1").unwrap();
    assert_eq!(snapshots.lock().unwrap().len(), seen);
}

#[test]
fn changes_to_other_posts_do_not_wake_a_watcher() {
    let shared = Arc::new(MemoryStorage::new());
    let tab_a = AppContext::new(shared.clone());
    let tab_b = AppContext::new(shared);

    // Mint the shared identity first so the watcher can pin its liked-set
    // key instead of matching the whole prefix.
    tab_a.identity.user_id().unwrap();

    let fired = Arc::new(Mutex::new(0u32));
    let sink = fired.clone();
    let _watch = tab_b.sync.watch_post("p1", move |_| *sink.lock().unwrap() += 1);

    tab_a.comments.add("p2", "elsewhere", Some("Alice")).unwrap();
    assert_eq!(*fired.lock().unwrap(), 0);
}

struct QuotaStorage {
    inner: MemoryStorage,
}

impl KeyValueStorage for QuotaStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::QuotaExceeded(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::QuotaExceeded(key.to_string()))
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn subscribe_to_changes(&self, listener: ChangeListener) -> StorageSubscription {
        self.inner.subscribe_to_changes(listener)
    }
}

#[test]
fn write_failures_surface_to_the_caller() {
    let inner = MemoryStorage::new();
    // Identity already persisted, so the failure comes from the ledger write.
    inner.set("blog_user_id", "user-1").unwrap();
    let ctx = AppContext::new(Arc::new(QuotaStorage { inner }));

    assert!(matches!(
        ctx.likes.toggle("p1"),
        Err(StoreError::QuotaExceeded(_))
    ));
    assert!(matches!(
        ctx.comments.add("p1", "hello", None),
        Err(StoreError::QuotaExceeded(_))
    ));
    assert!(matches!(
        ctx.identity.set_display_name("Alice"),
        Err(StoreError::QuotaExceeded(_))
    ));

    // Reads still fail open.
    assert_eq!(ctx.likes.count("p1"), 0);
    assert!(ctx.comments.list("p1").is_empty());
}
