pub mod google_maps;

use async_trait::async_trait;

use crate::entities::Coordinates;
use crate::error::Error;

/// Resolves free-text postal addresses into coordinates.
///
/// An address that cannot be resolved is an error whose status tells the
/// client what went wrong; callers forward it as is.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, Error>;
}
