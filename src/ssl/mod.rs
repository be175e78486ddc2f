//! rustls binding for multi-certificate bundles.
//!
//! [`RustlsHost`](structs::rustls_host::RustlsHost) is the
//! [`TlsHost`](crate::bundle::traits::tls_host::TlsHost) used by the binary:
//! it loads PEM certificate chains and keys into
//! [`ServingContext`](structs::serving_context::ServingContext)s, classifies
//! them by the leaf certificate's signature algorithm and exposes the
//! cipher suites its provider negotiates.
//!
//! [`MulticertResolver`](structs::multicert_resolver::MulticertResolver)
//! plugs a published bundle into rustls as a `ResolvesServerCert`. Every
//! ClientHello runs through the selector; the chosen slot's key is served,
//! the default entry when nothing matched, and no key at all (handshake
//! failure) when the ClientHello was malformed.
//!
//! # Hot Reload
//!
//! The resolver caches the bundle it serves. After the
//! [`BundleStore`](crate::bundle::structs::bundle_store::BundleStore)
//! recompiles a server, `refresh_cache` swaps the cached bundle in one step.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicert::ssl::ssl::create_server_config_with_resolver;
//! use multicert::ssl::structs::multicert_resolver::MulticertResolver;
//!
//! let resolver = Arc::new(MulticertResolver::new(store, server_id)?);
//! let config = create_server_config_with_resolver(resolver, &host)?;
//! ```

/// Certificate loading errors.
pub mod enums;

/// rustls host, serving context and resolver.
pub mod structs;

/// Implementation blocks for the rustls binding.
pub mod impls;

/// rustls configuration helpers.
#[allow(clippy::module_inception)]
pub mod ssl;
