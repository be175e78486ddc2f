//! Handshake-time certificate selection.
//!
//! [`select`](selector::select) is a pure decision over a compiled
//! [`Bundle`](crate::bundle::structs::bundle::Bundle) and the three
//! ClientHello signals exposed by a
//! [`ClientHelloSource`](crate::client_hello::traits::client_hello_source::ClientHelloSource).
//!
//! # Policy
//!
//! 1. ECDSA slots are candidates only when one is populated and the host
//!    policy leaves at least one ECDSA cipher suite.
//! 2. With a `signature_algorithms` extension, the first populated slot of
//!    `ecdsa_sha512`, `ecdsa_sha384`, `ecdsa_sha256`, `rsa_sha512`,
//!    `rsa_sha384`, `rsa_sha256` the client can verify wins. ECDSA slots
//!    additionally need an offered ECDSA suite from the allowed set.
//! 3. Otherwise `rsa_sha256` when the client sent SNI, then `rsa`, then the
//!    default context.
//!
//! A malformed `signature_algorithms` extension or cipher-suite list aborts
//! the handshake instead of falling back.

/// Selection result enumerations.
pub mod enums;

/// Display implementations.
pub mod impls;

/// Selection functions.
#[allow(clippy::module_inception)]
pub mod selector;

#[cfg(test)]
mod tests;
