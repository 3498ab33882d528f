use serde::Serialize;

pub mod band_response;

pub use band_response::BandResponse;

/// Body of every non-2xx response.
#[derive(Serialize, Clone, Debug)]
pub struct ErrorResponse {
    pub(crate) detail: String,
}
