/// Compilation and slot accessors.
pub mod bundle;

/// Display for server identities.
pub mod server_identifier;

/// Publication and reload.
pub mod bundle_store;

/// Clone for bundle sources.
pub mod bundle_source;
