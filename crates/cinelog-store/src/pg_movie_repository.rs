//! `PostgreSQL` implementation of the `MovieRepository` trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use cinelog_core::error::DomainError;
use cinelog_core::movie::Movie;
use cinelog_core::repository::MovieRepository;

use crate::infra;

/// PostgreSQL-backed movie repository.
#[derive(Debug, Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    /// Creates a new `PgMovieRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn movie_from_row(row: &PgRow) -> Result<Movie, DomainError> {
    let map = |e: sqlx::Error| infra(&e);
    Ok(Movie {
        id: row.try_get("id").map_err(map)?,
        imdb_id: row.try_get("imdb_id").map_err(map)?,
        title: row.try_get("title").map_err(map)?,
        release_date: row.try_get("release_date").map_err(map)?,
        trailer_link: row.try_get("trailer_link").map_err(map)?,
        poster: row.try_get("poster").map_err(map)?,
        genres: row.try_get("genres").map_err(map)?,
        backdrops: row.try_get("backdrops").map_err(map)?,
    })
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, imdb_id, title, release_date, trailer_link, poster, genres, backdrops
             FROM movies
             ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infra(&e))?;

        rows.iter().map(movie_from_row).collect()
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, DomainError> {
        let row = sqlx::query(
            "SELECT id, imdb_id, title, release_date, trailer_link, poster, genres, backdrops
             FROM movies
             WHERE imdb_id = $1",
        )
        .bind(imdb_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infra(&e))?;

        row.as_ref().map(movie_from_row).transpose()
    }
}
