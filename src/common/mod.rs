//! Shared helpers.
//!
//! Logging is set up once at boot through `fern`, with colored levels and
//! a local timestamp. Components log through the `log` facade with a
//! bracketed tag per subsystem (`[MULTICERT]`, `[SELECT]`,
//! `[CERTIFICATE]`, `[CERTGEN]`, `[HTTPS]`, `[BOOT]`).

/// Logging setup and level parsing.
#[allow(clippy::module_inception)]
pub mod common;
