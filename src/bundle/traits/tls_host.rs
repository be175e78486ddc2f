use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::slot::enums::signature_algorithm::SignatureAlgorithm;

/// The host TLS stack as seen by the bundle compiler.
pub trait TlsHost: Send + Sync {
    /// Fully initialised server-side context bound to one certificate chain and key.
    type Context: Send + Sync;

    fn build_serving_context(&self, paths: &CertificatePaths) -> Result<Self::Context, BundleError>;

    /// Signature algorithm of the leaf certificate's own signature.
    fn certificate_signature_algorithm(&self, context: &Self::Context) -> SignatureAlgorithm;

    /// Cipher-suite identifiers of the host's policy, in policy order.
    fn resolved_cipher_suites(&self) -> Vec<u16>;
}
