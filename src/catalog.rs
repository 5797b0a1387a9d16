//! The static page catalog: the hand-maintained list of site pages that
//! backs search when no richer index is available.
//!
//! Entries are defined once at startup and never mutated. Keywords are a
//! comma-separated string rather than a list because substring matching
//! treats the whole field as one haystack anyway.

use serde::{Deserialize, Serialize};

/// One navigable page of the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Site-relative URL, e.g. `/tramites`.
    pub url: String,
    /// Human-readable page title.
    pub title: String,
    /// Short description shown under the title in result lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma-separated search keywords.
    pub keywords: String,
}

impl PageEntry {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: Some(description.into()),
            keywords: keywords.into(),
        }
    }
}

/// The portal's searchable pages, in display order.
///
/// Fallback search preserves this order, so the most general pages go first.
pub fn site_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new(
            "/",
            "Inicio",
            "Portal principal del municipio",
            "inicio, home, portal, principal",
        ),
        PageEntry::new(
            "/el-municipio",
            "El Municipio",
            "Información sobre la administración municipal",
            "municipio, gobierno, administración, municipalidad",
        ),
        PageEntry::new(
            "/tramites",
            "Guía de Trámites",
            "Consulta requisitos y documentación necesaria",
            "trámites, requisitos, documentos, guía, procedimientos, licencia, habilitación",
        ),
        PageEntry::new(
            "/servicios",
            "Servicios",
            "Servicios municipales disponibles para vecinos",
            "servicios, municipal, atención, oficinas",
        ),
        PageEntry::new(
            "/novedades",
            "Novedades",
            "Últimas noticias y comunicados oficiales",
            "noticias, novedades, actualidad, eventos",
        ),
        PageEntry::new(
            "/pagos",
            "Pagos Online",
            "Consulta y paga tus tasas municipales e impuestos",
            "pagos, impuestos, tasas, tributos, facturas, deuda",
        ),
        PageEntry::new(
            "/numeros-utiles",
            "Números Útiles",
            "Teléfonos de emergencia y servicios esenciales",
            "emergencias, teléfonos, bomberos, policía, hospital",
        ),
        PageEntry::new(
            "/mapa",
            "Mapa Interactivo",
            "Ubicación de servicios y puntos de interés",
            "mapa, ubicación, direcciones, geolocalización",
        ),
        PageEntry::new(
            "/contacto",
            "Contacto",
            "Información de contacto y oficinas municipales",
            "contacto, email, teléfono, dirección, comunicarse",
        ),
    ]
}
