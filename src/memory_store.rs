use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::{ObjectStore, PutResult, StoreError, StoreResult};

/// In-memory store implementation for tests and local development
///
/// Mirrors the remote semantics the client depends on: `get` and `copy` of a
/// missing key fail with `NotFound`, `delete` of a missing key succeeds.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<(String, String), Bytes>>,
}

impl MemoryObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object exists at the key
    pub async fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .read()
            .await
            .contains_key(&(bucket.to_string(), key.to_string()))
    }

    /// Number of stored objects
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(bucket, key))
    }

    async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutResult> {
        let size_bytes = payload.len() as u64;
        self.objects
            .write()
            .await
            .insert((bucket.to_string(), key.to_string()), payload);
        Ok(PutResult {
            etag: None,
            size_bytes,
        })
    }

    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str) -> StoreResult<()> {
        let mut objects = self.objects.write().await;
        let payload = objects
            .get(&(bucket.to_string(), source_key.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(bucket, source_key))?;
        objects.insert((bucket.to_string(), dest_key.to_string()), payload);
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        self.objects
            .write()
            .await
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }
}
