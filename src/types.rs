use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Location of an object within the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl ObjectRef {
    pub fn new<B: Into<String>, K: Into<String>>(bucket: B, key: K) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Source string for copy requests: the bucket and key joined with `/`
    pub fn copy_source(&self) -> String {
        format!("{}/{}", self.bucket, self.key)
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// Receipt returned after a successful put
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutReceipt {
    pub bucket: String,
    pub key: String,
    pub size_bytes: u64,
    pub etag: Option<String>,
}

impl PutReceipt {
    /// Create a new put receipt
    pub fn new<B: Into<String>, K: Into<String>>(bucket: B, key: K, size_bytes: u64) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            size_bytes,
            etag: None,
        }
    }

    /// Set etag
    pub fn with_etag<S: Into<String>>(mut self, etag: S) -> Self {
        self.etag = Some(etag.into());
        self
    }
}

/// Outcome of a relocate operation
///
/// Relocation is copy-then-delete, so a partial failure is possible: the copy
/// can succeed while the source delete fails, leaving the object readable at
/// both keys until a later cleanup. Each case is reported explicitly so
/// callers can react instead of discovering duplicates through inspection.
#[derive(Debug)]
pub enum RelocateOutcome {
    /// Copy and delete both succeeded; the object lives only at the new key
    Moved,
    /// Copy failed; no delete was attempted and the bucket is unchanged
    CopyFailed(StoreError),
    /// Copy succeeded but the source delete failed; the object exists at
    /// both the old and new key
    DeleteFailed(StoreError),
}

impl RelocateOutcome {
    /// Whether the object was fully moved
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved)
    }

    /// The error of the failing step, if any
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Moved => None,
            Self::CopyFailed(err) | Self::DeleteFailed(err) => Some(err),
        }
    }
}
