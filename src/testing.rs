//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It provides
//! canonical stub implementations of the index traits so tests don't each
//! grow their own.

#![doc(hidden)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::PageEntry;
use crate::index::{HitData, IndexError, IndexHit, IndexProvider, PageIndex};

/// A catalog entry with a description derived from the title.
pub fn make_entry(url: &str, title: &str, keywords: &str) -> PageEntry {
    PageEntry::new(url, title, format!("Descripción de {title}"), keywords)
}

/// A hit whose payload is already known.
pub struct StaticHit(pub HitData);

#[async_trait]
impl IndexHit for StaticHit {
    async fn data(&self) -> Result<HitData, IndexError> {
        Ok(self.0.clone())
    }
}

/// An index that answers every query with the same fixed hits, optionally
/// after a delay (for ordering tests).
pub struct StaticIndex {
    hits: Vec<HitData>,
    delay: Option<Duration>,
}

impl StaticIndex {
    pub fn new(hits: Vec<HitData>) -> Self {
        Self { hits, delay: None }
    }

    pub fn with_delay(hits: Vec<HitData>, delay: Duration) -> Self {
        Self {
            hits,
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl PageIndex for StaticIndex {
    async fn search(&self, _query: &str) -> Result<Vec<Box<dyn IndexHit>>, IndexError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self
            .hits
            .iter()
            .cloned()
            .map(|hit| Box::new(StaticHit(hit)) as Box<dyn IndexHit>)
            .collect())
    }
}

/// An index whose every query fails.
pub struct FailingIndex;

#[async_trait]
impl PageIndex for FailingIndex {
    async fn search(&self, query: &str) -> Result<Vec<Box<dyn IndexHit>>, IndexError> {
        Err(IndexError::Query(format!("stub failure for {query:?}")))
    }
}

/// A provider that counts how many times it was asked to load.
pub struct CountingProvider {
    index: Arc<dyn PageIndex>,
    loads: AtomicUsize,
}

impl CountingProvider {
    pub fn new(index: Arc<dyn PageIndex>) -> Self {
        Self {
            index,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndexProvider for CountingProvider {
    async fn load(&self) -> Result<Arc<dyn PageIndex>, IndexError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.index))
    }
}

/// A provider whose acquisition always fails.
pub struct FailingProvider;

#[async_trait]
impl IndexProvider for FailingProvider {
    async fn load(&self) -> Result<Arc<dyn PageIndex>, IndexError> {
        Err(IndexError::Init("capability stub refused to load".to_string()))
    }
}

/// Hits shaped like the rich index would return them.
pub fn make_hits(count: usize) -> Vec<HitData> {
    (0..count)
        .map(|i| HitData {
            url: format!("/resultado-{i}"),
            title: Some(format!("Resultado {i}")),
            excerpt: Some(format!("Extracto <mark>resaltado</mark> número {i}")),
        })
        .collect()
}
