use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::timeout;

use crate::{
    ClientConfig, ObjectStore, PutReceipt, RelocateOutcome, StoreError, StoreEvents, StoreResult,
    TracingEvents,
};

/// The operation layer over an injected store handle
///
/// Each operation is a single deadline-bound request-response; the client
/// spawns no tasks, retries nothing, and shares the handle read-only. Whatever
/// retry policy the backend's transport applies internally is opaque here.
pub struct StoreClient {
    store: Arc<dyn ObjectStore>,
    events: Arc<dyn StoreEvents>,
    config: ClientConfig,
}

impl StoreClient {
    /// Create a client with default deadlines
    pub fn new<S: ObjectStore + 'static>(store: S) -> Self {
        Self::with_config(store, ClientConfig::default())
    }

    /// Create a client with custom deadlines
    pub fn with_config<S: ObjectStore + 'static>(store: S, config: ClientConfig) -> Self {
        Self {
            store: Arc::new(store),
            events: Arc::new(TracingEvents),
            config,
        }
    }

    /// Replace the diagnostics sink
    pub fn with_events<E: StoreEvents + 'static>(mut self, events: E) -> Self {
        self.events = Arc::new(events);
        self
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Download the full content of `(bucket, key)`
    ///
    /// Returns the complete byte content on success. Failures are reported to
    /// the events sink and returned; nothing partial is ever handed back.
    pub async fn fetch(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        validate_ref(bucket, key)?;

        match self
            .bounded("fetch", self.config.fetch_timeout, self.store.get(bucket, key))
            .await
        {
            Ok(payload) => Ok(payload),
            Err(err) => {
                self.events.fetch_failed(bucket, key, &err);
                Err(err)
            }
        }
    }

    /// Store `payload` at `(bucket, key)`, overwriting any existing object
    ///
    /// Bounded by the configured put deadline; expiry surfaces as
    /// `StoreError::Timeout` with its own diagnostic. No conditional-put
    /// semantics: concurrent writers to the same key are last-write-wins.
    pub async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutReceipt> {
        validate_ref(bucket, key)?;
        let size_bytes = payload.len() as u64;

        match self
            .bounded("put", self.config.put_timeout, self.store.put(bucket, key, payload))
            .await
        {
            Ok(result) => {
                self.events.put_completed(bucket, key, size_bytes);
                let mut receipt = PutReceipt::new(bucket, key, result.size_bytes);
                if let Some(etag) = result.etag {
                    receipt = receipt.with_etag(etag);
                }
                Ok(receipt)
            }
            Err(err) => {
                match &err {
                    StoreError::Timeout { elapsed, .. } => {
                        self.events.put_timed_out(bucket, key, *elapsed)
                    }
                    _ => self.events.put_failed(bucket, key, &err),
                }
                Err(err)
            }
        }
    }

    /// Move the object at `old_key` to `new_key` within `bucket`
    ///
    /// Copy-then-delete, each step bounded by the relocate deadline. The
    /// outcome names the failing step: after `CopyFailed` the bucket is
    /// unchanged, after `DeleteFailed` the object exists at both keys.
    pub async fn relocate(&self, bucket: &str, old_key: &str, new_key: &str) -> RelocateOutcome {
        if let Err(err) = validate_ref(bucket, old_key).and_then(|_| validate_ref(bucket, new_key))
        {
            return RelocateOutcome::CopyFailed(err);
        }

        if let Err(err) = self
            .bounded(
                "copy",
                self.config.relocate_timeout,
                self.store.copy(bucket, old_key, new_key),
            )
            .await
        {
            self.events.copy_failed(bucket, old_key, new_key, &err);
            return RelocateOutcome::CopyFailed(err);
        }

        if let Err(err) = self
            .bounded(
                "delete",
                self.config.relocate_timeout,
                self.store.delete(bucket, old_key),
            )
            .await
        {
            self.events.source_not_deleted(bucket, old_key, new_key, &err);
            return RelocateOutcome::DeleteFailed(err);
        }

        RelocateOutcome::Moved
    }

    /// Run a store call under a deadline, classifying expiry as `Timeout`
    async fn bounded<T>(
        &self,
        operation: &'static str,
        deadline: Duration,
        call: impl std::future::Future<Output = StoreResult<T>>,
    ) -> StoreResult<T> {
        timeout(deadline, call)
            .await
            .map_err(|_| StoreError::timeout(operation, deadline))?
    }
}

fn validate_ref(bucket: &str, key: &str) -> StoreResult<()> {
    if bucket.is_empty() {
        return Err(StoreError::invalid("bucket must not be empty"));
    }
    if key.is_empty() {
        return Err(StoreError::invalid("key must not be empty"));
    }
    Ok(())
}
