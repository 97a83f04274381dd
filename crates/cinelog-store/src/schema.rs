//! Database schema constants.

/// SQL to create the movies table.
pub const CREATE_MOVIES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS movies (
    id           UUID PRIMARY KEY,
    imdb_id      VARCHAR(32) NOT NULL UNIQUE,
    title        TEXT NOT NULL,
    release_date TEXT,
    trailer_link TEXT,
    poster       TEXT,
    genres       TEXT[] NOT NULL DEFAULT '{}',
    backdrops    TEXT[] NOT NULL DEFAULT '{}'
);
";

/// SQL to create the reviews table.
pub const CREATE_REVIEWS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS reviews (
    id         UUID PRIMARY KEY,
    imdb_id    VARCHAR(32) NOT NULL,
    body       TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_reviews_imdb_id
    ON reviews (imdb_id);
";
