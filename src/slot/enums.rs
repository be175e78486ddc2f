/// The seven certificate slots.
pub mod slot;

/// Certificate signature algorithms known to the slot table.
pub mod signature_algorithm;
