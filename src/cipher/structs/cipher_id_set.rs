use std::collections::BTreeSet;

/// Cipher-suite identifiers ordered by their numeric value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherIdSet {
    pub(crate) ids: BTreeSet<u16>,
}
