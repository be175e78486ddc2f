use crate::slot::enums::signature_algorithm::SignatureAlgorithm;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct ServingContext {
    pub certified_key: Arc<CertifiedKey>,
    pub signature_algorithm: SignatureAlgorithm,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
