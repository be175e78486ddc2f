/// Display for selections.
pub mod selection;

/// Helpers on handshake outcomes.
pub mod handshake_outcome;
