//! ClientHello extension reader.
//!
//! Reads the three signals the certificate selector needs from a client's
//! first handshake message:
//!
//! - the `signature_algorithms` extension, reduced to a [`SignatureAlgorithmSet`]
//!   of the six tracked (hash, signature) pairs
//! - whether any offered cipher suite is ECDSA-keyed and allowed by the host
//! - whether a `server_name` extension is present
//!
//! All input is untrusted. Every length field is bounds-checked and a
//! malformed message yields a [`ClientHelloError`]; the reader never panics.
//!
//! The signals are exposed through the [`ClientHelloSource`] trait so that
//! the selector runs unchanged over a raw [`ClientHelloView`] or over a TLS
//! library's pre-parsed ClientHello.
//!
//! [`SignatureAlgorithmSet`]: structs::signature_algorithm_set::SignatureAlgorithmSet
//! [`ClientHelloError`]: enums::client_hello_error::ClientHelloError
//! [`ClientHelloSource`]: traits::client_hello_source::ClientHelloSource
//! [`ClientHelloView`]: structs::client_hello_view::ClientHelloView

/// Reader error enumeration.
pub mod enums;

/// Parsed ClientHello view and per-connection signal structures.
pub mod structs;

/// Implementation blocks for the reader structures.
pub mod impls;

/// Signal source trait shared by raw and pre-parsed ClientHellos.
pub mod traits;

/// Wire constants and extension readers.
#[allow(clippy::module_inception)]
pub mod client_hello;
