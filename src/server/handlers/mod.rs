pub mod places;

use crate::error::{not_found_error, Error};

pub async fn not_found() -> Error {
    not_found_error("Could not find this route.")
}
