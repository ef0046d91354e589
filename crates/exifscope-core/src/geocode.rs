//! Reverse-geocoding client for a Nominatim-style endpoint.
//!
//! One GET per lookup, no retries, no timeout override. A non-200
//! status is an answer (a placeholder address), not an error; only
//! transport-level failures propagate.

use serde::Deserialize;
use std::time::Instant;

use crate::config::GeocodeConfig;
use crate::error::PipelineError;
use crate::types::Coordinates;

/// Returned when the endpoint answers 200 without a `display_name`.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Returned on any non-200 status.
pub const LOCATION_UNAVAILABLE: &str = "Unable to retrieve location data";

/// Client for one reverse-geocoding endpoint.
pub struct ReverseGeocoder {
    endpoint: String,
    user_agent: String,
    client: reqwest::Client,
}

/// The slice of the response body we care about.
#[derive(Deserialize)]
struct GeocodeResponse {
    display_name: Option<String>,
}

impl ReverseGeocoder {
    pub fn new(config: &GeocodeConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Resolve coordinates into a display address.
    ///
    /// Coordinates are formatted with default float precision; the
    /// endpoint is free to round as it sees fit.
    pub async fn lookup(&self, coordinates: &Coordinates) -> Result<String, PipelineError> {
        let url = self.request_url(coordinates);
        let start = Instant::now();
        tracing::debug!("Reverse geocoding via {}", url);

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| PipelineError::Geocode {
                message: format!("request failed: {e}"),
            })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!("Geocoder answered {status}");
            return Ok(LOCATION_UNAVAILABLE.to_string());
        }

        let body = resp.text().await.map_err(|e| PipelineError::Geocode {
            message: format!("failed to read response body: {e}"),
        })?;
        let address = address_from_body(&body)?;
        tracing::debug!("Geocoded in {:?}", start.elapsed());
        Ok(address)
    }

    fn request_url(&self, coordinates: &Coordinates) -> String {
        format!(
            "{}?format=json&lat={}&lon={}",
            self.endpoint, coordinates.latitude, coordinates.longitude
        )
    }
}

/// Extract the display address from a 200 response body.
fn address_from_body(body: &str) -> Result<String, PipelineError> {
    let parsed: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| PipelineError::Geocode {
            message: format!("malformed geocoder response: {e}"),
        })?;
    Ok(parsed
        .display_name
        .unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string()))
}
