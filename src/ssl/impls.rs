/// Certificate loading and cipher policy.
pub mod rustls_host;

/// Debug for serving contexts.
pub mod serving_context;

/// Cache refresh and `ResolvesServerCert`.
pub mod multicert_resolver;

/// `ClientHelloSource` over rustls' ClientHello.
pub mod rustls_client_hello;
