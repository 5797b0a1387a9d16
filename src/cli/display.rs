//! Terminal rendering for search results and weather conditions.
//!
//! Mirrors the wording of the site widgets so the CLI reads like the portal.

use comuna::{CurrentConditions, PageEntry, SearchResult};

pub fn print_pages(pages: &[PageEntry]) {
    for page in pages {
        println!("{:<18} {}", page.url, page.title);
        if let Some(description) = &page.description {
            println!("{:<18} {}", "", description);
        }
    }
}

pub fn print_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("No se encontraron resultados para \"{query}\"");
        return;
    }
    println!("Resultados ({})", results.len());
    for result in results {
        println!("  {}  {}", result.title, result.url);
        if !result.description.is_empty() {
            println!("    {}", result.description);
        }
    }
}

pub fn print_conditions(conditions: &CurrentConditions) {
    println!("Lonquimay, AR ({})", conditions.timestamp);
    println!("{}°C  {}", conditions.temperature, conditions.description);
    println!(
        "Humedad {} %   Presión {} mb   Viento {} km/h",
        conditions.humidity, conditions.pressure, conditions.wind_speed
    );
}
