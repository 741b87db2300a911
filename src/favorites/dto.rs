use serde::Deserialize;

use crate::auth::repo::CityFavorite;

/// Request body for adding a favorite city.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub city: CityFavorite,
}
