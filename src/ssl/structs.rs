/// rustls implementation of the host seam.
pub mod rustls_host;

/// Loaded certificate chain and signing key.
pub mod serving_context;

/// Bundle-backed certificate resolver.
pub mod multicert_resolver;

/// Selector view over rustls' parsed ClientHello.
pub mod rustls_client_hello;
