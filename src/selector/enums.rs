/// Outcome of the selection policy.
pub mod selection;

/// What the host does with the connection.
pub mod handshake_outcome;
