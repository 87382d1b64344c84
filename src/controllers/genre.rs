use axum::Json;

use crate::domain::music::{genre_catalog, GenreInfo};

/// GET /api/genres
pub async fn list_genres() -> Json<Vec<GenreInfo>> {
    Json(genre_catalog())
}
