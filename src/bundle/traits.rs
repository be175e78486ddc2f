/// Host TLS stack operations used by the bundle compiler.
pub mod tls_host;
