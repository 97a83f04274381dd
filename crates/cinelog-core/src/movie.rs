//! The Movie entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie from the external catalog.
///
/// Movies are read-only from this service's perspective: rows are created
/// and maintained by an out-of-scope ingestion process. The `imdb_id` is the
/// stable external key clients address movies by; `id` is the store-assigned
/// internal identifier and never appears in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned internal identifier.
    pub id: Uuid,
    /// External catalog identifier, unique across all movies.
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Catalog-supplied release date string, passed through verbatim.
    pub release_date: Option<String>,
    /// Trailer URL, when the catalog provides one.
    pub trailer_link: Option<String>,
    /// Poster image URL.
    pub poster: Option<String>,
    /// Genre labels.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Backdrop image URLs.
    #[serde(default)]
    pub backdrops: Vec<String>,
}
