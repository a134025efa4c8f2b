//! Error taxonomy for the listing fetch.

use thiserror::Error;

/// Everything that can go wrong fetching the doctor listing.
///
/// None of these are fatal to the screen: the caller degrades to the
/// fallback dataset and surfaces the message as a banner.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("listing endpoint returned status {status}")]
    Status { status: u16 },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not the expected record sequence.
    #[error("failed to decode listing response: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
