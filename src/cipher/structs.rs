/// Ordered set of cipher-suite identifiers.
pub mod cipher_id_set;
