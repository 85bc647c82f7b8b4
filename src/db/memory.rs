use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PlaceStore;
use crate::entities::{NewPlace, Place};
use crate::error::Error;

/// Process-local store, used when no database is configured.
#[derive(Default)]
pub struct MemoryStore {
    places: RwLock<HashMap<Uuid, Place>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, Error> {
        Ok(self.places.read().await.get(&id).cloned())
    }

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, Error> {
        let places = self.places.read().await;

        Ok(places
            .values()
            .filter(|place| place.creator == creator)
            .cloned()
            .collect())
    }

    async fn insert(&self, place: NewPlace) -> Result<Place, Error> {
        let place = place.with_id(Uuid::new_v4());

        self.places.write().await.insert(place.id, place.clone());

        Ok(place)
    }

    async fn save(&self, place: &Place) -> Result<bool, Error> {
        let mut places = self.places.write().await;

        match places.get_mut(&place.id) {
            Some(stored) => {
                *stored = place.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, Error> {
        Ok(self.places.write().await.remove(&id).is_some())
    }
}
