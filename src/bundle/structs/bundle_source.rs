use crate::bundle::structs::certificate_paths::CertificatePaths;
use std::sync::Arc;

pub struct BundleSource<H> {
    pub host: Arc<H>,
    pub certificates: Vec<CertificatePaths>,
}
