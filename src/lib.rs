//! # stowage: object operations for S3-compatible buckets
//!
//! `stowage` provides the three object-storage operations an application
//! actually needs - fetch, put, and relocate - over any S3-compatible service,
//! with deadline-bound requests and explicit outcomes for partial failures.
//!
//! ## Key Features
//!
//! - **Full-buffer semantics**: fetch and put are all-or-nothing at the crate
//!   boundary; no partial payload is ever returned
//! - **Deadline-bound**: every request runs under a configurable timeout
//!   (10 minutes by default) and reports expiry as a distinct error
//! - **Explicit relocation outcomes**: copy-then-delete moves report
//!   `Moved`, `CopyFailed`, or `DeleteFailed` instead of failing silently
//! - **Storage agnostic**: operations go through the [`ObjectStore`] trait;
//!   an in-memory backend ships for tests and local development
//! - **Injectable diagnostics**: structured events go to a [`StoreEvents`]
//!   sink, logged through `tracing` by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stowage::prelude::*;
//! use bytes::Bytes;
//!
//! # #[tokio::main]
//! # async fn main() -> StoreResult<()> {
//! // 1. Build a store handle once; it is shared by all operations
//! let store = S3ObjectStore::new(S3Config::new().with_region("eu-west-1")).await;
//! let client = StoreClient::new(store);
//!
//! // 2. Upload and download
//! client.put("media", "intro.mp3", Bytes::from_static(b"...")).await?;
//! let payload = client.fetch("media", "intro.mp3").await?;
//!
//! // 3. Move an object, reacting to partial failure
//! match client.relocate("media", "intro.mp3", "archive/intro.mp3").await {
//!     RelocateOutcome::Moved => {}
//!     RelocateOutcome::CopyFailed(err) => eprintln!("nothing moved: {err}"),
//!     RelocateOutcome::DeleteFailed(err) => eprintln!("duplicate left behind: {err}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Your Service   │  ← business logic only
//! ├─────────────────┤
//! │   StoreClient   │  ← deadlines, validation, diagnostics
//! ├─────────────────┤
//! │   ObjectStore   │  ← get / put / copy / delete primitives
//! └─────────────────┘
//! ```
//!
//! The store handle is externally owned and injected, so tests swap in
//! [`MemoryObjectStore`] or a failure-injecting fake without touching the
//! operations under test.

mod client;
mod config;
mod error;
mod events;
mod memory_store;
mod s3_store;
pub mod store;
mod types;

// Re-export main types for clean API
pub use client::StoreClient;
pub use config::{ClientConfig, S3Config};
pub use error::{StoreError, StoreResult};
pub use events::{StoreEvents, TracingEvents};
pub use memory_store::MemoryObjectStore;
pub use s3_store::S3ObjectStore;
pub use store::{ObjectStore, PutResult};
pub use types::{ObjectRef, PutReceipt, RelocateOutcome};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        MemoryObjectStore, ObjectStore, RelocateOutcome, S3Config, S3ObjectStore, StoreClient,
        StoreError, StoreResult,
    };
}
