use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use stowage::{
    ClientConfig, MemoryObjectStore, ObjectStore, PutResult, RelocateOutcome, StoreClient,
    StoreError, StoreEvents, StoreResult,
};

const BUCKET: &str = "media";

/// Events sink recording one line per emitted diagnostic
#[derive(Clone, Default)]
struct RecordingEvents {
    records: Arc<Mutex<Vec<String>>>,
}

impl RecordingEvents {
    fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }

    fn push(&self, record: String) {
        self.records.lock().unwrap().push(record);
    }
}

impl StoreEvents for RecordingEvents {
    fn put_completed(&self, bucket: &str, key: &str, size_bytes: u64) {
        self.push(format!("put_completed {bucket}/{key} {size_bytes}"));
    }

    fn put_timed_out(&self, bucket: &str, key: &str, _elapsed: Duration) {
        self.push(format!("put_timed_out {bucket}/{key}"));
    }

    fn put_failed(&self, bucket: &str, key: &str, _error: &StoreError) {
        self.push(format!("put_failed {bucket}/{key}"));
    }

    fn fetch_failed(&self, bucket: &str, key: &str, _error: &StoreError) {
        self.push(format!("fetch_failed {bucket}/{key}"));
    }

    fn copy_failed(&self, bucket: &str, old_key: &str, new_key: &str, _error: &StoreError) {
        self.push(format!("copy_failed {bucket}/{old_key}->{new_key}"));
    }

    fn source_not_deleted(&self, bucket: &str, old_key: &str, new_key: &str, _error: &StoreError) {
        self.push(format!("source_not_deleted {bucket}/{old_key}->{new_key}"));
    }
}

/// Store whose delete always fails, leaving the copy in place
struct FailingDeleteStore {
    inner: MemoryObjectStore,
}

#[async_trait]
impl ObjectStore for FailingDeleteStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        self.inner.get(bucket, key).await
    }

    async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutResult> {
        self.inner.put(bucket, key, payload).await
    }

    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str) -> StoreResult<()> {
        self.inner.copy(bucket, source_key, dest_key).await
    }

    async fn delete(&self, _bucket: &str, _key: &str) -> StoreResult<()> {
        Err(StoreError::backend(std::io::Error::other(
            "delete rejected",
        )))
    }
}

/// Store whose put stalls past any short deadline
struct StallingStore {
    inner: MemoryObjectStore,
}

#[async_trait]
impl ObjectStore for StallingStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        self.inner.get(bucket, key).await
    }

    async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutResult> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        self.inner.put(bucket, key, payload).await
    }

    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str) -> StoreResult<()> {
        self.inner.copy(bucket, source_key, dest_key).await
    }

    async fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        self.inner.delete(bucket, key).await
    }
}

#[tokio::test]
async fn put_then_fetch_round_trips_byte_for_byte() {
    let client = StoreClient::new(MemoryObjectStore::new());
    let payload = Bytes::from_static(b"\x00\x01binary content\xff");

    let receipt = client.put(BUCKET, "track.mp3", payload.clone()).await.unwrap();
    assert_eq!(receipt.bucket, BUCKET);
    assert_eq!(receipt.key, "track.mp3");
    assert_eq!(receipt.size_bytes, payload.len() as u64);

    let fetched = client.fetch(BUCKET, "track.mp3").await.unwrap();
    assert_eq!(fetched, payload);
}

#[tokio::test]
async fn empty_payload_round_trips() {
    let client = StoreClient::new(MemoryObjectStore::new());

    let receipt = client.put(BUCKET, "empty", Bytes::new()).await.unwrap();
    assert_eq!(receipt.size_bytes, 0);

    let fetched = client.fetch(BUCKET, "empty").await.unwrap();
    assert!(fetched.is_empty());
}

#[tokio::test]
async fn second_put_wins() {
    let client = StoreClient::new(MemoryObjectStore::new());

    client.put(BUCKET, "key", Bytes::from_static(b"first")).await.unwrap();
    client.put(BUCKET, "key", Bytes::from_static(b"second")).await.unwrap();

    assert_eq!(client.fetch(BUCKET, "key").await.unwrap(), "second");
}

#[tokio::test]
async fn fetch_of_missing_object_reports_not_found() {
    let events = RecordingEvents::default();
    let client = StoreClient::new(MemoryObjectStore::new()).with_events(events.clone());

    let err = client.fetch(BUCKET, "missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(events.records(), vec!["fetch_failed media/missing"]);
}

#[tokio::test]
async fn put_past_deadline_reports_timeout() {
    let events = RecordingEvents::default();
    let config = ClientConfig::new().with_put_timeout(Duration::from_millis(20));
    let client = StoreClient::with_config(
        StallingStore {
            inner: MemoryObjectStore::new(),
        },
        config,
    )
    .with_events(events.clone());

    let err = client
        .put(BUCKET, "slow", Bytes::from_static(b"payload"))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(events.records(), vec!["put_timed_out media/slow"]);
}

#[tokio::test]
async fn successful_put_emits_structured_event() {
    let events = RecordingEvents::default();
    let client = StoreClient::new(MemoryObjectStore::new()).with_events(events.clone());

    client.put(BUCKET, "key", Bytes::from_static(b"12345")).await.unwrap();

    assert_eq!(events.records(), vec!["put_completed media/key 5"]);
}

#[tokio::test]
async fn relocate_moves_content_and_removes_source() {
    let client = StoreClient::new(MemoryObjectStore::new());
    let payload = Bytes::from_static(b"the content");
    client.put(BUCKET, "inbox/a", payload.clone()).await.unwrap();

    let outcome = client.relocate(BUCKET, "inbox/a", "archive/a").await;
    assert!(outcome.is_moved());

    assert_eq!(client.fetch(BUCKET, "archive/a").await.unwrap(), payload);
    assert!(client.fetch(BUCKET, "inbox/a").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn relocate_of_missing_source_leaves_bucket_unchanged() {
    let events = RecordingEvents::default();
    let client = StoreClient::new(MemoryObjectStore::new()).with_events(events.clone());

    let outcome = client.relocate(BUCKET, "nope", "dest").await;
    match outcome {
        RelocateOutcome::CopyFailed(err) => assert!(err.is_not_found()),
        other => panic!("expected CopyFailed, got {other:?}"),
    }

    // No delete was attempted and nothing appeared at the destination
    assert!(client.fetch(BUCKET, "dest").await.unwrap_err().is_not_found());
    assert_eq!(events.records(), vec![
        "copy_failed media/nope->dest",
        "fetch_failed media/dest",
    ]);
}

#[tokio::test]
async fn relocate_with_failing_delete_leaves_object_at_both_keys() {
    let events = RecordingEvents::default();
    let store = FailingDeleteStore {
        inner: MemoryObjectStore::new(),
    };
    let client = StoreClient::new(store).with_events(events.clone());
    let payload = Bytes::from_static(b"duplicated");
    client.put(BUCKET, "old", payload.clone()).await.unwrap();

    let outcome = client.relocate(BUCKET, "old", "new").await;
    assert!(matches!(outcome, RelocateOutcome::DeleteFailed(_)));

    // The accepted inconsistency window: both keys stay readable
    assert_eq!(client.fetch(BUCKET, "old").await.unwrap(), payload);
    assert_eq!(client.fetch(BUCKET, "new").await.unwrap(), payload);
    assert!(events
        .records()
        .contains(&"source_not_deleted media/old->new".to_string()));
}

#[tokio::test]
async fn concurrent_puts_leave_exactly_one_payload() {
    let client = StoreClient::new(MemoryObjectStore::new());
    let first = Bytes::from_static(b"writer one");
    let second = Bytes::from_static(b"writer two");

    let (a, b) = tokio::join!(
        client.put(BUCKET, "contended", first.clone()),
        client.put(BUCKET, "contended", second.clone()),
    );
    a.unwrap();
    b.unwrap();

    let fetched = client.fetch(BUCKET, "contended").await.unwrap();
    assert!(fetched == first || fetched == second);
}
