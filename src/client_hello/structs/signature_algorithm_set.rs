/// Tracked (signature, hash) combinations observed in a client's
/// `signature_algorithms` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureAlgorithmSet {
    pub rsa_sha256: bool,
    pub rsa_sha384: bool,
    pub rsa_sha512: bool,
    pub ecdsa_sha256: bool,
    pub ecdsa_sha384: bool,
    pub ecdsa_sha512: bool,
}
