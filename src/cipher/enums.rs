/// Errors raised while resolving configured cipher-suite names.
pub mod cipher_error;
