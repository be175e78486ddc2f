//! Cipher-suite identifiers and the sorted ECDSA cipher set.
//!
//! Cipher suites are handled as their 16-bit IANA identifiers. The host's
//! resolved cipher list is reduced once, at bundle compile time, to the
//! suites that authenticate with an ECDSA certificate; that reduced set is
//! then consulted (read-only) by every handshake.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicert::cipher::cipher::ecdsa_cipher_set;
//!
//! let set = ecdsa_cipher_set([0x1301, 0xc02b, 0xc02f]);
//! assert!(set.contains(0xc02b));
//! assert_eq!(set.len(), 1);
//! ```

/// Cipher error enumeration.
pub mod enums;

/// Ordered cipher-suite identifier set.
pub mod structs;

/// Implementation blocks for the cipher set.
pub mod impls;

/// ECDSA cipher-suite table and helpers.
#[allow(clippy::module_inception)]
pub mod cipher;
