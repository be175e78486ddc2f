/// Compiled per-identity certificate bundle.
pub mod bundle;

/// Certificate and key file pair.
pub mod certificate_paths;

/// Server identity key.
pub mod server_identifier;

/// Published bundles keyed by server identity.
pub mod bundle_store;

/// Inputs kept for recompiling a bundle.
pub mod bundle_source;
