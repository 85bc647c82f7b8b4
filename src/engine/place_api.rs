use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    entities::{NewPlace, Place, PlaceChanges, PlaceDraft},
    error::{not_found_error, persistence_error, Error},
};

pub const PLACE_NOT_FOUND: &str = "Could not find a place for the provided id.";
pub const USER_PLACES_NOT_FOUND: &str = "Could not find places for the provided user id.";
pub const FIND_FAILED: &str = "Something went wrong, could not find a place";
pub const CREATE_FAILED: &str = "Creating place failed, please try again";
pub const UPDATE_FAILED: &str = "Something went wrong, could not update place";
pub const DELETE_FAILED: &str = "Something went wrong, could not delete the place";

impl Engine {
    /// Loads a place, reporting store failures with `failure`. Ids that are not
    /// well-formed cannot name a stored place and are reported as not found.
    async fn fetch_place(&self, id: &str, failure: &str) -> Result<Place, Error> {
        let maybe_place = match Uuid::parse_str(id) {
            Ok(id) => self
                .store
                .find_by_id(id)
                .await
                .map_err(|_| persistence_error(failure))?,
            Err(_) => None,
        };

        maybe_place.ok_or_else(|| not_found_error(PLACE_NOT_FOUND))
    }
}

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_place(&self, id: &str) -> Result<Place, Error> {
        self.fetch_place(id, FIND_FAILED).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_places_by_user(&self, user_id: &str) -> Result<Vec<Place>, Error> {
        let places = self
            .store
            .find_by_creator(user_id)
            .await
            .map_err(|_| persistence_error(USER_PLACES_NOT_FOUND))?;

        if places.is_empty() {
            return Err(not_found_error(USER_PLACES_NOT_FOUND));
        }

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn create_place(&self, draft: PlaceDraft) -> Result<Place, Error> {
        let location = self.geocoder.geocode(&draft.address).await?;

        let place = self
            .store
            .insert(NewPlace::new(draft, location, self.image_url.clone()))
            .await
            .map_err(|_| persistence_error(CREATE_FAILED))?;

        tracing::info!(id = %place.id, creator = %place.creator, "place created");

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn update_place(&self, id: &str, changes: PlaceChanges) -> Result<Place, Error> {
        let mut place = self.fetch_place(id, UPDATE_FAILED).await?;

        place.apply(changes);

        let saved = self
            .store
            .save(&place)
            .await
            .map_err(|_| persistence_error(UPDATE_FAILED))?;

        // removed between lookup and save
        if !saved {
            return Err(not_found_error(PLACE_NOT_FOUND));
        }

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_place(&self, id: &str) -> Result<(), Error> {
        let place = self.fetch_place(id, DELETE_FAILED).await?;

        let removed = self
            .store
            .remove(place.id)
            .await
            .map_err(|_| persistence_error(DELETE_FAILED))?;

        if !removed {
            return Err(not_found_error(PLACE_NOT_FOUND));
        }

        tracing::info!(id = %place.id, "place deleted");

        Ok(())
    }
}
