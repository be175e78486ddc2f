use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::bundle_store::BundleStore;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::bundle::traits::tls_host::TlsHost;
use std::sync::Arc;

/// Zips the configured certificate and key lists into entries.
pub fn pair_certificate_paths(
    certificates: &[String],
    keys: &[String],
) -> Result<Vec<CertificatePaths>, BundleError> {
    if certificates.len() != keys.len() {
        return Err(BundleError::CertificateKeyCountMismatch {
            certificates: certificates.len(),
            keys: keys.len(),
        });
    }
    if certificates.is_empty() {
        return Err(BundleError::NoCertificates);
    }
    Ok(certificates
        .iter()
        .zip(keys.iter())
        .map(|(cert_path, key_path)| CertificatePaths {
            cert_path: cert_path.clone(),
            key_path: key_path.clone(),
        })
        .collect())
}

/// Builds entry 0 as the default context, then compiles the rest around it.
pub fn compile_bundle<H: TlsHost>(
    host: &H,
    entries: &[CertificatePaths],
) -> Result<Bundle<H::Context>, BundleError> {
    let (first, rest) = entries.split_first().ok_or(BundleError::NoCertificates)?;
    let default_context = Arc::new(host.build_serving_context(first)?);
    Bundle::compile(host, default_context, &first.cert_path, rest)
}

pub fn create_bundle_store<H: TlsHost>() -> Arc<BundleStore<H>> {
    Arc::new(BundleStore::new())
}
