/// Malformed ClientHello errors.
pub mod client_hello_error;
