//! Configuration management module.
//!
//! Loads and validates `config.toml`. Each `[[server]]` entry describes one
//! HTTPS listener and the certificate bundle it serves.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **server**: listener address and timeouts, TLS protocol versions, an
//!   optional cipher-suite allow-list, and the parallel `certificates` /
//!   `certificate_keys` lists. The first pair is the listener's default
//!   certificate.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicert::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! for server in config.server.iter().filter(|server| server.enabled) {
//!     let entries = server.certificate_paths()?;
//! }
//! ```

/// Configuration enumerations (protocol versions, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
