//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::time::Duration;

use comuna::{IndexStatus, SearchResolver};

// Re-export the canonical stubs from comuna::testing
pub use comuna::testing::{
    make_entry, make_hits, CountingProvider, FailingIndex, FailingProvider, StaticHit, StaticIndex,
};

/// Poll until index acquisition settles, one way or the other.
pub async fn wait_for_index(resolver: &SearchResolver) {
    for _ in 0..200 {
        match resolver.index_status() {
            IndexStatus::Ready | IndexStatus::Unavailable => return,
            IndexStatus::NotLoaded | IndexStatus::Loading => {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        }
    }
    panic!("index acquisition did not settle");
}
