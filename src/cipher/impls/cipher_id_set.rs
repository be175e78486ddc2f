use crate::cipher::cipher::ecdsa_cipher_suite_name;
use crate::cipher::structs::cipher_id_set::CipherIdSet;
use std::collections::BTreeSet;

impl CipherIdSet {
    pub fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Returns `false` when the identifier was already present.
    pub fn insert(&mut self, id: u16) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: u16) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ids.iter().copied()
    }

    /// IANA names of the members, hex ids for suites outside the ECDSA table.
    pub fn suite_names(&self) -> Vec<String> {
        self.iter()
            .map(|id| match ecdsa_cipher_suite_name(id) {
                Some(name) => name.to_string(),
                None => format!("0x{}", hex::encode(id.to_be_bytes())),
            })
            .collect()
    }
}

impl FromIterator<u16> for CipherIdSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for CipherIdSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self.ids.iter().map(|id| format!("0x{}", hex::encode(id.to_be_bytes()))).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}
