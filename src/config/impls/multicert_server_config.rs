use crate::bundle::bundle::pair_certificate_paths;
use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::bundle::structs::server_identifier::ServerIdentifier;
use crate::cipher::enums::cipher_error::CipherError;
use crate::config::structs::multicert_server_config::MulticertServerConfig;
use crate::ssl::structs::rustls_host::RustlsHost;
use rustls::SupportedProtocolVersion;

impl MulticertServerConfig {
    pub fn server_identifier(&self) -> ServerIdentifier {
        ServerIdentifier::new(&self.name, &self.bind_address)
    }

    /// Configured versions, deduplicated, newest first.
    pub fn protocol_versions(&self) -> Vec<&'static SupportedProtocolVersion> {
        let mut protocols = self.protocols.clone();
        protocols.sort();
        protocols.dedup();
        protocols.iter().rev().map(|protocol| protocol.version()).collect()
    }

    pub fn certificate_paths(&self) -> Result<Vec<CertificatePaths>, BundleError> {
        pair_certificate_paths(&self.certificates, &self.certificate_keys)
    }

    pub fn rustls_host(&self) -> Result<RustlsHost, CipherError> {
        RustlsHost::new(self.protocol_versions(), &self.cipher_suites)
    }
}
