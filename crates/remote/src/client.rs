//! HTTP client for the doctor-listing endpoint.

use crate::error::{FetchError, Result};
use directory::RemoteDoctorRecord;
use tracing::{debug, instrument};

/// Default base URL of the verification backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// Path spelling matches the backend route as deployed.
const LISTING_PATH: &str = "/doctorverfication/all";

/// Read-only client for the doctor listing.
///
/// One fetch per screen lifetime; there is no retry logic here. A failed
/// fetch is surfaced to the caller, and "try again" is an explicit user
/// action that simply calls [`fetch_all`] again.
///
/// [`fetch_all`]: DoctorListingClient::fetch_all
#[derive(Debug, Clone)]
pub struct DoctorListingClient {
    http: reqwest::Client,
    base_url: String,
}

impl DoctorListingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full raw listing.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_all(&self) -> Result<Vec<RemoteDoctorRecord>> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), LISTING_PATH);
        debug!(%url, "fetching doctor listing");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<RemoteDoctorRecord> =
            response.json().await.map_err(FetchError::Decode)?;
        debug!(count = records.len(), "doctor listing fetched");
        Ok(records)
    }
}

impl Default for DoctorListingClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_does_not_double_up() {
        let client = DoctorListingClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080/");
        let url = format!("{}{}", client.base_url.trim_end_matches('/'), LISTING_PATH);
        assert_eq!(url, "http://localhost:8080/doctorverfication/all");
    }
}
