/// Configuration loading errors.
pub mod configuration_error;

/// TLS protocol versions a listener accepts.
pub mod tls_protocol;
