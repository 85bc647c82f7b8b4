use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::{MemoryStore, PlaceStore};
use crate::engine::Engine;
use crate::entities::{Coordinates, NewPlace, Place};
use crate::error::{database_error, unresolved_address_error, Error};
use crate::external::Geocoder;

pub const IMAGE_URL: &str = "https://example.com/place.jpg";

pub fn eiffel_tower() -> Coordinates {
    Coordinates {
        lat: 48.8583701,
        lng: 2.2944813,
    }
}

/// Resolves only the addresses it was given, counting every lookup.
#[derive(Default)]
pub struct FixedGeocoder {
    addresses: HashMap<String, Coordinates>,
    calls: std::sync::Mutex<usize>,
}

impl FixedGeocoder {
    pub fn new() -> Self {
        Self::default().with("Champ de Mars, Paris", eiffel_tower())
    }

    pub fn with(mut self, address: &str, coordinates: Coordinates) -> Self {
        self.addresses.insert(address.into(), coordinates);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, Error> {
        *self.calls.lock().unwrap() += 1;

        self.addresses
            .get(address)
            .copied()
            .ok_or_else(unresolved_address_error)
    }
}

/// A store whose backend is down.
pub struct FailingStore;

#[async_trait]
impl PlaceStore for FailingStore {
    async fn find_by_id(&self, _: Uuid) -> Result<Option<Place>, Error> {
        Err(database_error("connection refused"))
    }

    async fn find_by_creator(&self, _: &str) -> Result<Vec<Place>, Error> {
        Err(database_error("connection refused"))
    }

    async fn insert(&self, _: NewPlace) -> Result<Place, Error> {
        Err(database_error("connection refused"))
    }

    async fn save(&self, _: &Place) -> Result<bool, Error> {
        Err(database_error("connection refused"))
    }

    async fn remove(&self, _: Uuid) -> Result<bool, Error> {
        Err(database_error("connection refused"))
    }
}

/// Reads succeed against the wrapped store, writes fail.
pub struct ReadOnlyStore(pub MemoryStore);

#[async_trait]
impl PlaceStore for ReadOnlyStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, Error> {
        self.0.find_by_id(id).await
    }

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, Error> {
        self.0.find_by_creator(creator).await
    }

    async fn insert(&self, _: NewPlace) -> Result<Place, Error> {
        Err(database_error("read-only transaction"))
    }

    async fn save(&self, _: &Place) -> Result<bool, Error> {
        Err(database_error("read-only transaction"))
    }

    async fn remove(&self, _: Uuid) -> Result<bool, Error> {
        Err(database_error("read-only transaction"))
    }
}

pub fn memory_engine() -> (Engine, Arc<MemoryStore>, Arc<FixedGeocoder>) {
    let store = Arc::new(MemoryStore::new());
    let geocoder = Arc::new(FixedGeocoder::new());
    let engine = Engine::new(store.clone(), geocoder.clone(), IMAGE_URL.into());

    (engine, store, geocoder)
}

pub fn engine_with_store(store: impl PlaceStore + Send + Sync + 'static) -> Engine {
    Engine::new(
        Arc::new(store),
        Arc::new(FixedGeocoder::new()),
        IMAGE_URL.into(),
    )
}

pub fn new_place(creator: &str) -> NewPlace {
    NewPlace {
        title: "Eiffel Tower".into(),
        description: "Iron lattice tower".into(),
        address: "Champ de Mars, Paris".into(),
        location: eiffel_tower(),
        image: IMAGE_URL.into(),
        creator: creator.into(),
    }
}
