//! HTTPS listener serving a multi-certificate bundle.
//!
//! Each enabled `[[server]]` entry becomes one actix-web server bound with
//! a rustls configuration whose certificate resolver is that server's
//! [`MulticertResolver`](crate::ssl::structs::multicert_resolver::MulticertResolver).
//! `GET /` reports the bundle currently served by the listener.

/// Response structures.
pub mod structs;

/// Listener setup and routes.
#[allow(clippy::module_inception)]
pub mod https;
