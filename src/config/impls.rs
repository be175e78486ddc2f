/// Loading, saving and validation.
pub mod configuration;

/// Display for configuration errors.
pub mod configuration_error;

/// rustls protocol mapping.
pub mod tls_protocol;

/// Derived listener settings.
pub mod multicert_server_config;
