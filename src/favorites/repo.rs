use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo::{CityFavorite, User};
use crate::error::ApiError;

/// Prepend a city to the list, keeping names unique. Newest entries sit at
/// the front. On a duplicate the list is left untouched.
fn push_front_unique(cities: &mut Vec<CityFavorite>, city: CityFavorite) -> Result<(), ApiError> {
    if cities.iter().any(|fav| fav.name == city.name) {
        return Err(ApiError::DuplicateCity);
    }
    cities.insert(0, city);
    Ok(())
}

/// Drop every entry matching `name` exactly. Removing a name that is not
/// present is a no-op, not an error.
fn remove_by_name(cities: &mut Vec<CityFavorite>, name: &str) {
    cities.retain(|fav| fav.name != name);
}

pub async fn add_city(
    db: &PgPool,
    user_id: Uuid,
    city: CityFavorite,
) -> Result<Vec<CityFavorite>, ApiError> {
    let user = User::find_by_id(db, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let mut cities = user.favorite_cities.0;
    push_front_unique(&mut cities, city)?;
    User::update_favorites(db, user_id, &cities).await?;
    Ok(cities)
}

pub async fn remove_city(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<Vec<CityFavorite>, ApiError> {
    let user = User::find_by_id(db, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let mut cities = user.favorite_cities.0;
    remove_by_name(&mut cities, name);
    User::update_favorites(db, user_id, &cities).await?;
    Ok(cities)
}
