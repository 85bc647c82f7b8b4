mod place_api;

use std::sync::Arc;

use crate::{api::API, db::PlaceStore, external::Geocoder};

pub type DynStore = Arc<dyn PlaceStore + Send + Sync>;
pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;

pub struct Engine {
    store: DynStore,
    geocoder: DynGeocoder,
    image_url: String,
}

impl Engine {
    /// `image_url` is the picture every new place starts with.
    pub fn new(store: DynStore, geocoder: DynGeocoder, image_url: String) -> Self {
        Self {
            store,
            geocoder,
            image_url,
        }
    }
}

impl API for Engine {}
