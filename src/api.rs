use async_trait::async_trait;

use crate::entities::{Place, PlaceChanges, PlaceDraft};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn find_place(&self, id: &str) -> Result<Place, Error>;

    async fn find_places_by_user(&self, user_id: &str) -> Result<Vec<Place>, Error>;

    async fn create_place(&self, draft: PlaceDraft) -> Result<Place, Error>;

    async fn update_place(&self, id: &str, changes: PlaceChanges) -> Result<Place, Error>;

    async fn delete_place(&self, id: &str) -> Result<(), Error>;
}

pub trait API: PlaceAPI {}
