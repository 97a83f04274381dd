//! The Review entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-text review of a movie.
///
/// A review holds a weak reference to its movie: the external `imdb_id`
/// string, not the movie's internal identifier. Many reviews may reference
/// one movie; no uniqueness is enforced across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Store-assigned internal identifier.
    pub id: Uuid,
    /// External identifier of the reviewed movie.
    pub imdb_id: String,
    /// Review text. Non-empty by construction.
    pub body: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
