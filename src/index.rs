//! Contracts for the optional external full-text index.
//!
//! The rich index is a capability the embedding environment may or may not
//! have (it exists only in production site builds). Rather than probing some
//! ambient global, the capability is injected into the resolver as an
//! `Option<Arc<dyn IndexProvider>>` at construction.
//!
//! The shape mirrors the upstream library's two-phase protocol: a `search`
//! returns lightweight hits, and each hit lazily resolves its display
//! payload via `data()`. The resolver caps the hit list *before* resolving
//! payloads, so at most five `data()` calls happen per query.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the external index. None of these are fatal: the resolver
/// logs them and degrades to the catalog fallback.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index initialization failed: {0}")]
    Init(String),
    #[error("index query failed: {0}")]
    Query(String),
    #[error("hit payload unavailable: {0}")]
    Data(String),
}

/// Display payload of a single hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitData {
    pub url: String,
    /// Page title from hit metadata; absent when the indexed page had none.
    pub title: Option<String>,
    /// Raw excerpt, possibly containing markup to be stripped for display.
    pub excerpt: Option<String>,
}

/// Lazily-acquired initializer for the index capability.
///
/// `load` is called at most once per open search surface; the resolver keeps
/// the returned handle for reuse across close/reopen.
#[async_trait]
pub trait IndexProvider: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn PageIndex>, IndexError>;
}

/// A ready full-text index.
#[async_trait]
pub trait PageIndex: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Box<dyn IndexHit>>, IndexError>;
}

/// One hit, payload not yet resolved.
#[async_trait]
pub trait IndexHit: Send + Sync {
    async fn data(&self) -> Result<HitData, IndexError>;
}
