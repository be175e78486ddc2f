use crate::cipher::enums::cipher_error::CipherError;
use crate::slot::enums::slot::Slot;
use crate::ssl::enums::certificate_error::CertificateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Certificate type is duplicate: slot {slot} already populated (entry {entry}: {certificate})")]
    DuplicateCertificateType {
        slot: Slot,
        entry: usize,
        certificate: String,
    },
    #[error("Invalid certificate signature algorithm {algorithm} (entry {entry}: {certificate})")]
    UnsupportedSignatureAlgorithm {
        algorithm: String,
        entry: usize,
        certificate: String,
    },
    #[error("Number of certificates ({certificates}) does not match number of keys ({keys})")]
    CertificateKeyCountMismatch { certificates: usize, keys: usize },
    #[error("No ssl configured")]
    NoCertificates,
    #[error("Failed to build serving context: {0}")]
    ServingContext(String),
    #[error("Server not found: {0}")]
    ServerNotFound(String),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
    #[error(transparent)]
    Cipher(#[from] CipherError),
}
