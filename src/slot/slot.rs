use crate::slot::enums::signature_algorithm::SignatureAlgorithm;
use crate::slot::enums::slot::Slot;

pub const SLOT_TABLE: [(SignatureAlgorithm, Slot); 8] = [
    (SignatureAlgorithm::Md5WithRsa, Slot::RsaLegacy),
    (SignatureAlgorithm::Sha1WithRsa, Slot::RsaLegacy),
    (SignatureAlgorithm::Sha256WithRsa, Slot::RsaSha256),
    (SignatureAlgorithm::Sha384WithRsa, Slot::RsaSha384),
    (SignatureAlgorithm::Sha512WithRsa, Slot::RsaSha512),
    (SignatureAlgorithm::EcdsaWithSha256, Slot::EcdsaSha256),
    (SignatureAlgorithm::EcdsaWithSha384, Slot::EcdsaSha384),
    (SignatureAlgorithm::EcdsaWithSha512, Slot::EcdsaSha512),
];

/// `None` means the algorithm cannot be served from any slot.
pub fn slot_for_signature_algorithm(algorithm: &SignatureAlgorithm) -> Option<Slot> {
    SLOT_TABLE
        .iter()
        .find(|(known, _)| known == algorithm)
        .map(|(_, slot)| *slot)
}
