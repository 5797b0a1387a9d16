//! The search resolver: free text in, a bounded list of navigable pages out.
//!
//! The resolver prefers the injected full-text index when one is ready and
//! silently degrades to substring matching over the static catalog in every
//! other case (no capability, still loading, load failed, query failed).
//! The only state machine is the surface itself:
//!
//! ```text
//! closed ──open()──▶ open (index: not loaded | loading | ready | unavailable)
//!   ▲                  │
//!   └──close()/select──┘
//! ```
//!
//! `open()` is re-entrant and triggers index acquisition at most once per
//! surface lifetime. The acquired handle survives `close()` so a reopened
//! surface doesn't pay the load again.

mod excerpt;
mod fallback;

pub use excerpt::{clean_excerpt, EXCERPT_MAX_CHARS};
pub use fallback::fallback_search;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::PageEntry;
use crate::index::{IndexError, IndexProvider, PageIndex};

/// Hits taken from the rich index per query.
pub const INDEX_RESULT_LIMIT: usize = 5;

/// Matches taken from the catalog fallback per query.
pub const FALLBACK_RESULT_LIMIT: usize = 8;

/// One displayable, navigable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    /// Catalog description, or the cleaned excerpt for index hits.
    pub description: String,
}

/// Where the resolver currently stands with the index capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    /// No acquisition attempted yet (or no provider was injected).
    NotLoaded,
    /// Acquisition in flight; queries fall back meanwhile.
    Loading,
    Ready,
    /// Last acquisition failed; a reopened surface may retry.
    Unavailable,
}

enum IndexSlot {
    NotLoaded,
    Loading,
    Ready(Arc<dyn PageIndex>),
    Unavailable,
}

struct SurfaceState {
    open: bool,
    query: String,
    results: Vec<SearchResult>,
    index: IndexSlot,
}

struct Inner {
    catalog: Vec<PageEntry>,
    provider: Option<Arc<dyn IndexProvider>>,
    state: Mutex<SurfaceState>,
    /// Sequence number of the most recently issued query. Responses carrying
    /// an older number are discarded, never committed.
    latest_query: AtomicU64,
}

/// Converts queries into result lists for one search surface.
///
/// Cheaply cloneable; clones share the same surface state, which lets the
/// embedder drive keystrokes from concurrent tasks.
#[derive(Clone)]
pub struct SearchResolver {
    inner: Arc<Inner>,
}

impl SearchResolver {
    /// A resolver over `catalog`, optionally backed by a full-text index
    /// capability. Pass `None` where the environment has no index (dev
    /// builds, server-side rendering) and every query uses the fallback.
    pub fn new(catalog: Vec<PageEntry>, provider: Option<Arc<dyn IndexProvider>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                provider,
                state: Mutex::new(SurfaceState {
                    open: false,
                    query: String::new(),
                    results: Vec::new(),
                    index: IndexSlot::NotLoaded,
                }),
                latest_query: AtomicU64::new(0),
            }),
        }
    }

    /// Activate the search surface.
    ///
    /// Fire-and-forget: if an index provider is present and no handle has
    /// been acquired for this surface lifetime, acquisition starts in a
    /// spawned task and queries keep falling back until it lands. Calling
    /// `open()` again while open (or while acquisition is pending) is a
    /// no-op.
    pub fn open(&self) {
        let mut state = self.inner.state.lock();
        if state.open {
            return;
        }
        state.open = true;

        if self.inner.provider.is_some()
            && matches!(state.index, IndexSlot::NotLoaded | IndexSlot::Unavailable)
        {
            state.index = IndexSlot::Loading;
            drop(state);
            self.spawn_acquisition();
        }
    }

    /// Resolve `text` into the current result list.
    ///
    /// Empty or whitespace-only queries clear the results. A response is
    /// committed only if no newer query was issued while it was in flight;
    /// stale responses are discarded and the newer list is returned instead.
    pub async fn query(&self, text: &str) -> Vec<SearchResult> {
        let seq = self.inner.latest_query.fetch_add(1, Ordering::SeqCst) + 1;
        let trimmed = text.trim().to_string();

        let handle = {
            let mut state = self.inner.state.lock();
            state.query = text.to_string();
            if trimmed.is_empty() {
                state.results.clear();
                return Vec::new();
            }
            match &state.index {
                IndexSlot::Ready(index) => Some(Arc::clone(index)),
                _ => None,
            }
        };

        let results = match handle {
            Some(index) => match index_results(index.as_ref(), &trimmed).await {
                Ok(results) => results,
                Err(err) => {
                    warn!(error = %err, query = %trimmed, "index query failed, using catalog fallback");
                    fallback_search(&self.inner.catalog, &trimmed)
                }
            },
            None => fallback_search(&self.inner.catalog, &trimmed),
        };

        let mut state = self.inner.state.lock();
        if self.inner.latest_query.load(Ordering::SeqCst) == seq {
            state.results = results.clone();
            results
        } else {
            debug!(query = %trimmed, "discarding stale search response");
            state.results.clone()
        }
    }

    /// Commit a selection: returns the navigation target for the embedder,
    /// closes the surface and clears query and results. The index handle is
    /// retained.
    pub fn select_result(&self, url: &str) -> String {
        self.reset_surface();
        url.to_string()
    }

    /// Deactivate the surface and clear transient state. The index handle,
    /// once acquired, is kept for the next lifetime.
    pub fn close(&self) {
        self.reset_surface();
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.lock().open
    }

    pub fn current_query(&self) -> String {
        self.inner.state.lock().query.clone()
    }

    pub fn current_results(&self) -> Vec<SearchResult> {
        self.inner.state.lock().results.clone()
    }

    pub fn index_status(&self) -> IndexStatus {
        match &self.inner.state.lock().index {
            IndexSlot::NotLoaded => IndexStatus::NotLoaded,
            IndexSlot::Loading => IndexStatus::Loading,
            IndexSlot::Ready(_) => IndexStatus::Ready,
            IndexSlot::Unavailable => IndexStatus::Unavailable,
        }
    }

    fn reset_surface(&self) {
        let mut state = self.inner.state.lock();
        state.open = false;
        state.query.clear();
        state.results.clear();
    }

    fn spawn_acquisition(&self) {
        let Some(provider) = self.inner.provider.as_ref().map(Arc::clone) else {
            return;
        };
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match provider.load().await {
                Ok(handle) => {
                    debug!("search index ready");
                    inner.state.lock().index = IndexSlot::Ready(handle);
                }
                Err(err) => {
                    warn!(error = %err, "search index unavailable, catalog fallback stays active");
                    inner.state.lock().index = IndexSlot::Unavailable;
                }
            }
        });
    }
}

/// Delegate to the index: cap to the first [`INDEX_RESULT_LIMIT`] hits, then
/// resolve each payload and map it to a display record. Title falls back to
/// the URL; the excerpt is stripped of markup and truncated.
async fn index_results(
    index: &dyn PageIndex,
    query: &str,
) -> Result<Vec<SearchResult>, IndexError> {
    let hits = index.search(query).await?;
    let mut results = Vec::with_capacity(hits.len().min(INDEX_RESULT_LIMIT));
    for hit in hits.iter().take(INDEX_RESULT_LIMIT) {
        let data = hit.data().await?;
        results.push(SearchResult {
            title: data.title.unwrap_or_else(|| data.url.clone()),
            description: data.excerpt.as_deref().map(clean_excerpt).unwrap_or_default(),
            url: data.url,
        });
    }
    Ok(results)
}
