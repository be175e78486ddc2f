//! Certificate bundle compilation and publication.
//!
//! A bundle is the compiled, immutable certificate set of one server
//! identity: at most one serving context per [`Slot`](crate::slot::enums::slot::Slot),
//! the default context (entry 0), and the ECDSA-capable cipher set derived
//! from the host's cipher policy.
//!
//! Compilation is generic over [`TlsHost`](traits::tls_host::TlsHost), the
//! seam through which serving contexts are built and inspected. The crate
//! ships a rustls implementation in [`crate::ssl`].
//!
//! # Publication
//!
//! [`BundleStore`](structs::bundle_store::BundleStore) keeps one published
//! `Arc<Bundle>` per server identity. A bundle is always compiled into a
//! local value first and swapped in afterwards, so readers see either the
//! previous generation or the complete new one.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicert::bundle::bundle::pair_certificate_paths;
//! use multicert::bundle::structs::bundle_store::BundleStore;
//!
//! let store = BundleStore::new();
//! let entries = pair_certificate_paths(&certificates, &keys)?;
//! let bundle = store.compile_and_publish(server_id, host, entries)?;
//! ```

/// Bundle error enumeration.
pub mod enums;

/// Bundle, store and identity structures.
pub mod structs;

/// Implementation blocks for bundle structures.
pub mod impls;

/// Host TLS stack seam.
pub mod traits;

/// Bundle helper functions.
#[allow(clippy::module_inception)]
pub mod bundle;
