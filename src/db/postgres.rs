use async_trait::async_trait;
use futures::{future, TryStreamExt};
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use uuid::Uuid;

use super::PlaceStore;
use crate::entities::{NewPlace, Place};
use crate::error::Error;

/// Places kept as JSONB documents keyed by id. The creator is duplicated into
/// its own column so that lookups by user can use an index.
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip_all)]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS places (id UUID PRIMARY KEY, creator VARCHAR NOT NULL, data JSONB NOT NULL)")
            .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS places_creator_idx ON places (creator)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlaceStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(sqlx::query("SELECT data FROM places WHERE id = $1").bind(&id))
            .await?;

        match maybe_row {
            Some(row) => {
                let Json(place): Json<Place> = row.try_get("data")?;
                Ok(Some(place))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let places = conn
            .fetch(sqlx::query("SELECT data FROM places WHERE creator = $1").bind(creator))
            .map_err(Error::from)
            .and_then(|row| {
                future::ready(
                    row.try_get("data")
                        .map(|Json(place): Json<Place>| place)
                        .map_err(Error::from),
                )
            })
            .try_collect::<Vec<Place>>()
            .await?;

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, place: NewPlace) -> Result<Place, Error> {
        let place = place.with_id(Uuid::new_v4());

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO places (id, creator, data) VALUES ($1, $2, $3)")
                .bind(&place.id)
                .bind(&place.creator)
                .bind(Json(&place)),
        )
        .await?;

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn save(&self, place: &Place) -> Result<bool, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query("UPDATE places SET data = $2 WHERE id = $1")
                    .bind(&place.id)
                    .bind(Json(place)),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> Result<bool, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM places WHERE id = $1").bind(&id))
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
