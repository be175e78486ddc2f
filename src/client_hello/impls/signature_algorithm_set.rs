use crate::client_hello::client_hello::{HASH_SHA256, HASH_SHA384, HASH_SHA512, SIGNATURE_ECDSA, SIGNATURE_RSA};
use crate::client_hello::structs::signature_algorithm_set::SignatureAlgorithmSet;
use crate::slot::enums::slot::Slot;

impl SignatureAlgorithmSet {
    /// Builds the set from 16-bit `SignatureScheme` code points, which
    /// share the (hash, signature) byte layout for the tracked pairs.
    pub fn from_schemes<I: IntoIterator<Item = u16>>(schemes: I) -> Self {
        let mut set = Self::default();
        for scheme in schemes {
            let [hash, signature] = scheme.to_be_bytes();
            set.observe(hash, signature);
            if set.is_complete() {
                break;
            }
        }
        set
    }

    /// Returns `false` for pairs that are not tracked.
    pub fn observe(&mut self, hash: u8, signature: u8) -> bool {
        match (signature, hash) {
            (SIGNATURE_RSA, HASH_SHA256) => self.rsa_sha256 = true,
            (SIGNATURE_RSA, HASH_SHA384) => self.rsa_sha384 = true,
            (SIGNATURE_RSA, HASH_SHA512) => self.rsa_sha512 = true,
            (SIGNATURE_ECDSA, HASH_SHA256) => self.ecdsa_sha256 = true,
            (SIGNATURE_ECDSA, HASH_SHA384) => self.ecdsa_sha384 = true,
            (SIGNATURE_ECDSA, HASH_SHA512) => self.ecdsa_sha512 = true,
            _ => return false,
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        self.rsa_sha256
            && self.rsa_sha384
            && self.rsa_sha512
            && self.ecdsa_sha256
            && self.ecdsa_sha384
            && self.ecdsa_sha512
    }

    pub fn has_any_ecdsa(&self) -> bool {
        self.ecdsa_sha256 || self.ecdsa_sha384 || self.ecdsa_sha512
    }

    /// Whether the client can verify a certificate from `slot`.
    /// Legacy RSA is never advertised through this extension.
    pub fn supports(&self, slot: Slot) -> bool {
        match slot {
            Slot::RsaLegacy => false,
            Slot::RsaSha256 => self.rsa_sha256,
            Slot::RsaSha384 => self.rsa_sha384,
            Slot::RsaSha512 => self.rsa_sha512,
            Slot::EcdsaSha256 => self.ecdsa_sha256,
            Slot::EcdsaSha384 => self.ecdsa_sha384,
            Slot::EcdsaSha512 => self.ecdsa_sha512,
        }
    }
}
