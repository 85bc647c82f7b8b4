use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A stored place. `id` is assigned by the store and `location` is derived
/// from `address` once, when the place is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    pub image: String,
    pub creator: String,
}

/// A geocoded place that has not been given an id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    pub image: String,
    pub creator: String,
}

/// Input of place creation, before the address is geocoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub creator: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceChanges {
    pub title: String,
    pub description: String,
}

impl NewPlace {
    pub fn new(draft: PlaceDraft, location: Coordinates, image: String) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            address: draft.address,
            location,
            image,
            creator: draft.creator,
        }
    }

    pub fn with_id(self, id: Uuid) -> Place {
        Place {
            id,
            title: self.title,
            description: self.description,
            address: self.address,
            location: self.location,
            image: self.image,
            creator: self.creator,
        }
    }
}

impl Place {
    /// Only the title and description of a place are editable.
    pub fn apply(&mut self, changes: PlaceChanges) {
        self.title = changes.title;
        self.description = changes.description;
    }
}

#[test]
fn apply_keeps_location_and_ownership() {
    let mut place = NewPlace::new(
        PlaceDraft {
            title: "Empire State Building".into(),
            description: "One of the most famous sky scrapers in the world!".into(),
            address: "20 W 34th St, New York, NY 10001".into(),
            creator: "u1".into(),
        },
        Coordinates {
            lat: 40.7484474,
            lng: -73.9871516,
        },
        "https://example.com/image.jpg".into(),
    )
    .with_id(Uuid::new_v4());
    let before = place.clone();

    place.apply(PlaceChanges {
        title: "ESB".into(),
        description: "Art Deco skyscraper".into(),
    });

    assert_eq!(place.title, "ESB");
    assert_eq!(place.description, "Art Deco skyscraper");
    assert_eq!(place.id, before.id);
    assert_eq!(place.address, before.address);
    assert_eq!(place.location, before.location);
    assert_eq!(place.creator, before.creator);
    assert_eq!(place.image, before.image);
}

#[test]
fn place_serializes_with_public_id() {
    let id = Uuid::new_v4();
    let place = Place {
        id,
        title: "Eiffel Tower".into(),
        description: "Iron lattice tower".into(),
        address: "Champ de Mars, Paris".into(),
        location: Coordinates {
            lat: 48.8583701,
            lng: 2.2944813,
        },
        image: "https://example.com/image.jpg".into(),
        creator: "u2".into(),
    };

    let value = serde_json::to_value(&place).unwrap();

    assert_eq!(value["id"], serde_json::json!(id.to_string()));
    assert_eq!(value["location"]["lat"], serde_json::json!(48.8583701));
    assert_eq!(value["creator"], serde_json::json!("u2"));
}
