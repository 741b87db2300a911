use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One favorite-city snapshot embedded in a user record. `name` is the
/// uniqueness key within a user's list; `weather` and `temperature` are
/// opaque caller-supplied values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityFavorite {
    pub name: String,
    pub country: String,
    pub weather: String,
    pub temperature: f64,
}

/// User record in the database. Serialized form is the public profile:
/// the password hash is never emitted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub favorite_cities: Json<Vec<CityFavorite>>,
}

impl User {
    /// Find a user by email. Exact match, no normalization.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, favorite_cities
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, favorite_cities
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password and an empty favorites list.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, favorite_cities
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Overwrite the stored favorites list. Last writer wins on the whole
    /// list; callers perform load, mutate, save within one request.
    pub async fn update_favorites(
        db: &PgPool,
        id: Uuid,
        cities: &[CityFavorite],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET favorite_cities = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(Json(cities))
        .execute(db)
        .await?;
        Ok(())
    }
}
