//! Certificate slots and the signature-algorithm slot table.
//!
//! A certificate is classified by the algorithm its issuer used to sign it
//! (not by its public-key algorithm). Each recognised signature algorithm
//! maps to exactly one of seven slots; a server identity holds at most one
//! certificate per slot.
//!
//! | Signature algorithm      | Slot          |
//! |--------------------------|---------------|
//! | md5WithRSAEncryption     | `RsaLegacy`   |
//! | sha1WithRSAEncryption    | `RsaLegacy`   |
//! | sha256WithRSAEncryption  | `RsaSha256`   |
//! | sha384WithRSAEncryption  | `RsaSha384`   |
//! | sha512WithRSAEncryption  | `RsaSha512`   |
//! | ecdsa-with-SHA256        | `EcdsaSha256` |
//! | ecdsa-with-SHA384        | `EcdsaSha384` |
//! | ecdsa-with-SHA512        | `EcdsaSha512` |

/// Slot and signature algorithm enumerations.
pub mod enums;

/// Implementation blocks for slots and signature algorithms.
pub mod impls;

/// The static slot table.
#[allow(clippy::module_inception)]
pub mod slot;
