//! Substring matching over the static catalog.
//!
//! Matching is case-insensitive but diacritic-preserving: "trámite" and
//! "tramite" are different needles. Unaccented queries still tend to land
//! because URLs are ASCII ("/tramites" matches "tramites").

use crate::catalog::PageEntry;

use super::{SearchResult, FALLBACK_RESULT_LIMIT};

/// Match `query` against title, keywords, description and URL of each entry.
/// Catalog order is preserved (no relevance ranking) and the list is capped
/// at [`FALLBACK_RESULT_LIMIT`].
pub fn fallback_search(catalog: &[PageEntry], query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|page| {
            page.title.to_lowercase().contains(&needle)
                || page.keywords.to_lowercase().contains(&needle)
                || page
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
                || page.url.to_lowercase().contains(&needle)
        })
        .take(FALLBACK_RESULT_LIMIT)
        .map(|page| SearchResult {
            url: page.url.clone(),
            title: page.title.clone(),
            description: page.description.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::site_pages;

    #[test]
    fn keyword_substring_finds_tramites_guide() {
        let results = fallback_search(&site_pages(), "requisito");
        assert!(results.iter().any(|r| r.url == "/tramites"));
    }

    #[test]
    fn unknown_term_matches_nothing() {
        assert!(fallback_search(&site_pages(), "xyz123").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = fallback_search(&site_pages(), "requisito");
        let upper = fallback_search(&site_pages(), "REQUISITO");
        assert_eq!(lower, upper);
        assert!(!upper.is_empty());
    }

    #[test]
    fn diacritics_are_preserved_in_the_needle() {
        // "trámites" appears accented in keywords; the ASCII spelling only
        // matches through the URL.
        assert!(!fallback_search(&site_pages(), "trámites").is_empty());
        let ascii = fallback_search(&site_pages(), "tramites");
        assert_eq!(ascii.len(), 1);
        assert_eq!(ascii[0].url, "/tramites");
    }

    #[test]
    fn catalog_order_is_preserved() {
        // "municip" hits several entries; they must come back in catalog order.
        let pages = site_pages();
        let results = fallback_search(&pages, "municip");
        assert!(results.len() >= 2);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| pages.iter().position(|p| p.url == r.url).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn result_count_is_capped() {
        let catalog: Vec<PageEntry> = (0..20)
            .map(|i| {
                PageEntry::new(
                    format!("/pagina-{i}"),
                    format!("Página {i}"),
                    "común",
                    "común",
                )
            })
            .collect();
        assert_eq!(
            fallback_search(&catalog, "común").len(),
            FALLBACK_RESULT_LIMIT
        );
    }
}
