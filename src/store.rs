use async_trait::async_trait;
use bytes::Bytes;

use crate::StoreResult;

/// Core object operations - must be implemented by all storage backends
///
/// Implementations go through an authenticated handle they own; the client
/// layer never constructs or tears down sessions itself.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Download the full content of an object
    async fn get(&self, bucket: &str, key: &str) -> StoreResult<Bytes>;

    /// Store a payload, overwriting any existing object at the key
    async fn put(&self, bucket: &str, key: &str, payload: Bytes) -> StoreResult<PutResult>;

    /// Copy an object to a new key within the same bucket
    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str) -> StoreResult<()>;

    /// Delete an object
    async fn delete(&self, bucket: &str, key: &str) -> StoreResult<()>;
}

/// Result of a successful put operation
#[derive(Debug, Clone)]
pub struct PutResult {
    pub etag: Option<String>,
    pub size_bytes: u64,
}
