//! Service-side logic for a municipal citizen portal: catalog search with an
//! optional full-text index, and the town's weather widget data.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  catalog.rs  │────▶│  resolver/    │◀────│   index.rs   │
//! │ (PageEntry,  │     │ (SearchResolver│     │ (IndexProvider,
//! │  site_pages) │     │  fallback,    │     │  PageIndex,  │
//! └──────────────┘     │  excerpts)    │     │  IndexHit)   │
//!                      └───────┬───────┘     └──────────────┘
//!                              │
//!                      ┌───────▼───────┐     ┌──────────────┐
//!                      │   server.rs   │◀────│   weather/   │
//!                      │ (/api/search, │     │ (client,     │
//!                      │  /api/weather)│     │  codes,      │
//!                      └───────────────┘     │  monitor)    │
//!                                            └──────────────┘
//! ```
//!
//! The resolver prefers the injected index capability and falls back to
//! substring matching over the static catalog; the weather side is a thin,
//! timeout-bounded client over a third-party provider plus a pure lookup
//! from weather codes to display strings. Every external failure degrades
//! to a neutral display state; nothing in this crate is fatal.
//!
//! # Usage
//!
//! ```no_run
//! use comuna::{site_pages, SearchResolver};
//!
//! # async fn demo() {
//! let resolver = SearchResolver::new(site_pages(), None);
//! resolver.open();
//! let results = resolver.query("trámites").await;
//! assert!(!results.is_empty());
//! let target = resolver.select_result(&results[0].url);
//! assert_eq!(target, "/tramites");
//! # }
//! ```

pub mod catalog;
pub mod index;
pub mod resolver;
pub mod server;
pub mod weather;

#[doc(hidden)]
pub mod testing;

pub use catalog::{site_pages, PageEntry};
pub use index::{HitData, IndexError, IndexHit, IndexProvider, PageIndex};
pub use resolver::{
    clean_excerpt, fallback_search, IndexStatus, SearchResolver, SearchResult,
    FALLBACK_RESULT_LIMIT, INDEX_RESULT_LIMIT,
};
pub use weather::{
    CurrentConditions, WeatherClient, WeatherConfig, WeatherError, WeatherIcon, WeatherMonitor,
    WeatherUpstream, WeatherView, UNAVAILABLE_MESSAGE,
};
