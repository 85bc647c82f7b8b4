mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewPlace, Place};
use crate::error::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Document storage for places. Every method may fail with a persistence
/// error; absence is reported through the return value, not as an error.
#[async_trait]
pub trait PlaceStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, Error>;

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, Error>;

    /// Stores a new place under a freshly assigned id.
    async fn insert(&self, place: NewPlace) -> Result<Place, Error>;

    /// Replaces the stored document. Returns `false` if no place has this id.
    async fn save(&self, place: &Place) -> Result<bool, Error>;

    /// Returns `false` if no place has this id.
    async fn remove(&self, id: Uuid) -> Result<bool, Error>;
}
