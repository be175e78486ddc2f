/// Bounds-checked view over a ClientHello body.
pub mod client_hello_view;

/// The six tracked signature algorithm flags.
pub mod signature_algorithm_set;

/// Iterator over a raw cipher-suite vector.
pub mod raw_cipher_suites;
