use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::Geocoder;
use crate::{
    entities::Coordinates,
    error::{unresolved_address_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    error_message: Option<String>,
}

/// Client for the Google Maps Geocoding API.
pub struct GoogleMaps {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl GoogleMaps {
    /// `api_base` is the API host, reached over https.
    pub fn new(api_base: &str, api_key: SecretString) -> Self {
        Self::with_base_url(format!("https://{}", api_base), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Geocoder for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinates, Error> {
        let url = format!("{}/maps/api/geocode/json", self.base_url);

        let res = self
            .client
            .get(url)
            .query(&[("address", address)])
            .query(&[("key", self.api_key.expose_secret())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            tracing::warn!(status_code, "geocoding service answered with an error");
            return Err(upstream_error());
        }

        let data: Response<Vec<GeocodeResult>> = res.json().await?;

        first_location(data)
    }
}

fn first_location(data: Response<Vec<GeocodeResult>>) -> Result<Coordinates, Error> {
    match data.status.as_str() {
        "OK" => data
            .results
            .and_then(|results| results.into_iter().next())
            .map(|result| result.geometry.location)
            .ok_or_else(unresolved_address_error),
        "ZERO_RESULTS" | "INVALID_REQUEST" => Err(unresolved_address_error()),
        status => {
            tracing::error!(status, error_message = ?data.error_message, "geocoding request rejected");
            Err(upstream_error())
        }
    }
}
