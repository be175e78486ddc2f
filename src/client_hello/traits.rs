/// Source of the selector's per-connection signals.
pub mod client_hello_source;
