use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Extension, Json, Path,
};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::{PlaceChanges, PlaceDraft};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

const MIN_DESCRIPTION_LENGTH: usize = 5;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    title: String,
    description: String,
    address: String,
    creator: String,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    title: String,
    description: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_valid_description(value: &str) -> bool {
    value.chars().count() >= MIN_DESCRIPTION_LENGTH
}

impl CreateParams {
    fn validate(self) -> Result<PlaceDraft, Error> {
        if is_blank(&self.title)
            || !is_valid_description(&self.description)
            || is_blank(&self.address)
            || is_blank(&self.creator)
        {
            return Err(invalid_input_error());
        }

        Ok(PlaceDraft {
            title: self.title,
            description: self.description,
            address: self.address,
            creator: self.creator,
        })
    }
}

impl UpdateParams {
    fn validate(self) -> Result<PlaceChanges, Error> {
        if is_blank(&self.title) || !is_valid_description(&self.description) {
            return Err(invalid_input_error());
        }

        Ok(PlaceChanges {
            title: self.title,
            description: self.description,
        })
    }
}

/// Malformed or incomplete bodies are invalid input like any failed check.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    let Json(params) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "request body rejected");
        invalid_input_error()
    })?;

    Ok(params)
}

fn param(path: Result<Path<String>, PathRejection>) -> Result<String, Error> {
    let Path(value) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "path parameter rejected");
        invalid_input_error()
    })?;

    Ok(value)
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    pid: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, Error> {
    let place = api.find_place(&param(pid)?).await?;

    Ok(Json(json!({ "place": place })))
}

pub async fn find_by_user(
    Extension(api): Extension<DynAPI>,
    uid: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, Error> {
    let places = api.find_places_by_user(&param(uid)?).await?;

    Ok(Json(json!({ "places": places })))
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<CreateParams>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let draft = body(payload)?.validate()?;

    let place = api.create_place(draft).await?;

    Ok((StatusCode::CREATED, Json(json!({ "place": place }))))
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    pid: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateParams>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let pid = param(pid)?;
    let changes = body(payload)?.validate()?;

    let place = api.update_place(&pid, changes).await?;

    Ok(Json(json!({ "place": place })))
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    pid: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, Error> {
    api.delete_place(&param(pid)?).await?;

    Ok(Json(json!({ "message": "Deleted place." })))
}

#[test]
fn create_params_validation() {
    let params = |title: &str, description: &str, address: &str, creator: &str| CreateParams {
        title: title.into(),
        description: description.into(),
        address: address.into(),
        creator: creator.into(),
    };

    assert!(params("Eiffel Tower", "Iron lattice tower", "Champ de Mars, Paris", "u2")
        .validate()
        .is_ok());
    assert!(params("  ", "Iron lattice tower", "Champ de Mars, Paris", "u2")
        .validate()
        .is_err());
    assert!(params("Eiffel Tower", "Iron", "Champ de Mars, Paris", "u2")
        .validate()
        .is_err());
    assert!(params("Eiffel Tower", "Iron lattice tower", "", "u2")
        .validate()
        .is_err());
    assert!(params("Eiffel Tower", "Iron lattice tower", "Champ de Mars, Paris", "")
        .validate()
        .is_err());
}

#[test]
fn update_params_validation() {
    let params = |title: &str, description: &str| UpdateParams {
        title: title.into(),
        description: description.into(),
    };

    assert!(params("Tour Eiffel", "Tower").validate().is_ok());
    assert!(params("", "Wrought-iron lattice tower").validate().is_err());
    assert!(params("Tour Eiffel", "Tour").validate().is_err());
}
