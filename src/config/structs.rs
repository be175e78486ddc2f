//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// One HTTPS listener and its certificate bundle.
pub mod multicert_server_config;
