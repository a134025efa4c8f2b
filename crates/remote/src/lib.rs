//! Async client for the remote doctor-listing source.
//!
//! The engine never talks to the network itself; this crate performs the
//! single fetch a search screen needs and hands the raw records to
//! `directory` for normalization.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DoctorListingClient};
pub use error::{FetchError, Result};
