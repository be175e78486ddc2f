//! # Multicert
//!
//! Serve several certificates for one TLS server identity and pick one per
//! connection from what the client's ClientHello advertises.
//!
//! ## Overview
//!
//! A listener is configured with an ordered list of certificate/key pairs
//! that differ by public-key algorithm (RSA or ECDSA) and by the hash of
//! their own signature (MD5/SHA-1, SHA-256, SHA-384, SHA-512). At startup
//! the pairs are compiled into a [`bundle`] with one serving context per
//! [`slot`]. During each handshake the [`selector`] reads the client's
//! `signature_algorithms` extension, its cipher-suite list and the presence
//! of SNI, and hands the strongest certificate the client can verify to the
//! TLS stack. Legacy clients still receive a certificate they understand.
//!
//! ## Features
//!
//! - **Seven slots**: `rsa`, `rsa_sha256`, `rsa_sha384`, `rsa_sha512`,
//!   `ecdsa_sha256`, `ecdsa_sha384`, `ecdsa_sha512`
//! - **Bounds-checked ClientHello reader**: malformed extensions abort the
//!   handshake with `decode_error`, never a panic
//! - **rustls integration**: a `ResolvesServerCert` backed by the bundle
//! - **Hot reload**: bundles are recompiled and swapped atomically on SIGHUP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multicert::bundle::structs::bundle_store::BundleStore;
//! use multicert::config::structs::configuration::Configuration;
//! use multicert::https::https::https_prepare;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let store = Arc::new(BundleStore::new());
//! let (resolver, tls_config) = https_prepare(&store, &config.server[0])?;
//! ```
//!
//! ## Modules
//!
//! - [`bundle`] - Bundle compilation, the host TLS seam and publication
//! - [`cipher`] - Cipher-suite identifiers and the ECDSA cipher set
//! - [`client_hello`] - ClientHello extension reader
//! - [`common`] - Logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`https`] - actix-web HTTPS listener
//! - [`selector`] - Handshake-time certificate selection
//! - [`slot`] - Slots and the signature-algorithm table
//! - [`ssl`] - rustls host, serving contexts and certificate resolver
//! - [`structs`] - CLI argument parsing

/// Certificate bundle compilation and publication.
///
/// Classifies each configured certificate into a slot, rejects duplicates
/// and unsupported signature algorithms, and keeps the published bundle
/// per server identity.
pub mod bundle;

/// Cipher-suite identifiers.
///
/// The ECDSA-authenticated suite table and the ordered identifier set the
/// selector checks offered suites against.
pub mod cipher;

/// ClientHello extension reader.
///
/// Parses the `signature_algorithms` extension, scans offered cipher suites
/// and detects SNI, over raw handshake bytes or a pre-parsed view.
pub mod client_hello;

/// Logging setup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTPS listener.
pub mod https;

/// Handshake-time certificate selection.
pub mod selector;

/// Certificate slots and the signature-algorithm table.
pub mod slot;

/// rustls binding.
///
/// Loads certificate chains and keys, reads certificate signature
/// algorithms and resolves the served certificate per ClientHello.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
