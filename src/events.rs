use std::time::Duration;

use tracing::{error, info, warn};

use crate::StoreError;

/// Sink for operator-facing diagnostics
///
/// The client reports every success and failure condition here in addition to
/// its return value, so diagnostics stay observable however the crate is
/// embedded. Inject a recording implementation in tests to assert on emitted
/// events without capturing console output.
pub trait StoreEvents: Send + Sync {
    /// A put completed
    fn put_completed(&self, bucket: &str, key: &str, size_bytes: u64);

    /// A put was aborted because its deadline elapsed
    fn put_timed_out(&self, bucket: &str, key: &str, elapsed: Duration);

    /// A put failed for any other reason
    fn put_failed(&self, bucket: &str, key: &str, error: &StoreError);

    /// A fetch failed
    fn fetch_failed(&self, bucket: &str, key: &str, error: &StoreError);

    /// The copy step of a relocate failed; no delete was attempted
    fn copy_failed(&self, bucket: &str, old_key: &str, new_key: &str, error: &StoreError);

    /// The object was copied but the source delete failed; it now exists at
    /// both keys until a later cleanup
    fn source_not_deleted(&self, bucket: &str, old_key: &str, new_key: &str, error: &StoreError);
}

/// Default events sink logging through `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingEvents;

impl StoreEvents for TracingEvents {
    fn put_completed(&self, bucket: &str, key: &str, size_bytes: u64) {
        info!(bucket, key, size_bytes, "upload done");
    }

    fn put_timed_out(&self, bucket: &str, key: &str, elapsed: Duration) {
        warn!(bucket, key, ?elapsed, "upload canceled due to timeout");
    }

    fn put_failed(&self, bucket: &str, key: &str, error: &StoreError) {
        error!(bucket, key, %error, "failed to upload object");
    }

    fn fetch_failed(&self, bucket: &str, key: &str, error: &StoreError) {
        error!(bucket, key, %error, "failed to fetch object");
    }

    fn copy_failed(&self, bucket: &str, old_key: &str, new_key: &str, error: &StoreError) {
        error!(bucket, old_key, new_key, %error, "could not copy object");
    }

    fn source_not_deleted(&self, bucket: &str, old_key: &str, new_key: &str, error: &StoreError) {
        warn!(
            bucket,
            old_key,
            new_key,
            %error,
            "object copied but source not deleted"
        );
    }
}
