use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::bundle::traits::tls_host::TlsHost;
use crate::cipher::enums::cipher_error::CipherError;
use crate::slot::enums::signature_algorithm::SignatureAlgorithm;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::read_signature_algorithm;
use crate::ssl::structs::rustls_host::RustlsHost;
use crate::ssl::structs::serving_context::ServingContext;
use rustls::SupportedProtocolVersion;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use std::sync::Arc;

impl std::fmt::Debug for RustlsHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustlsHost")
            .field("protocol_versions", &self.protocol_versions)
            .field("cipher_suites", &self.cipher_suite_names())
            .finish()
    }
}

impl RustlsHost {
    /// Restricts the ring provider to `protocol_versions` and, when
    /// `cipher_suites` is not empty, to the named suites.
    pub fn new(
        protocol_versions: Vec<&'static SupportedProtocolVersion>,
        cipher_suites: &[String],
    ) -> Result<Self, CipherError> {
        let mut provider = rustls::crypto::ring::default_provider();
        for name in cipher_suites {
            if !provider
                .cipher_suites
                .iter()
                .any(|suite| Self::suite_name(suite.suite()) == *name)
            {
                return Err(CipherError::UnknownCipherSuite(name.clone()));
            }
        }
        provider.cipher_suites.retain(|suite| {
            protocol_versions
                .iter()
                .any(|version| version.version == suite.version().version)
                && (cipher_suites.is_empty()
                    || cipher_suites.contains(&Self::suite_name(suite.suite())))
        });
        if provider.cipher_suites.is_empty() {
            return Err(CipherError::NoCipherSuites);
        }
        Ok(Self {
            provider: Arc::new(provider),
            protocol_versions,
        })
    }

    pub fn provider(&self) -> &Arc<CryptoProvider> {
        &self.provider
    }

    pub fn protocol_versions(&self) -> &[&'static SupportedProtocolVersion] {
        &self.protocol_versions
    }

    pub fn cipher_suite_names(&self) -> Vec<String> {
        self.provider
            .cipher_suites
            .iter()
            .map(|suite| Self::suite_name(suite.suite()))
            .collect()
    }

    fn suite_name(suite: rustls::CipherSuite) -> String {
        format!("{:?}", suite)
    }

    pub fn load_serving_context(&self, cert_path: &str, key_path: &str) -> Result<ServingContext, CertificateError> {
        let certs = Self::load_certificate_chain(cert_path)?;
        let key = Self::load_private_key(key_path)?;
        let signature_algorithm = read_signature_algorithm(&certs[0])?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}: {}", key_path, e)))?;
        log::info!(
            "[CERTIFICATE] Loaded {} ({}, {} certificate(s))",
            cert_path,
            signature_algorithm,
            certs.len()
        );
        Ok(ServingContext {
            certified_key: Arc::new(rustls::sign::CertifiedKey::new(certs, signing_key)),
            signature_algorithm,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    fn load_certificate_chain(cert_path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let pem = std::fs::read(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let certs = rustls_pemfile::certs(&mut pem.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(format!("{}: {}", cert_path, e)))?;
        if certs.is_empty() {
            return Err(CertificateError::CertParseError(format!(
                "{}: no certificates found in file",
                cert_path
            )));
        }
        Ok(certs)
    }

    /// Tries PKCS#8, then PKCS#1, then SEC1.
    fn load_private_key(key_path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let pem = std::fs::read(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let parse_error = |e: std::io::Error| CertificateError::KeyParseError(format!("{}: {}", key_path, e));
        if let Some(key) = rustls_pemfile::pkcs8_private_keys(&mut pem.as_slice()).next() {
            return key.map(PrivateKeyDer::Pkcs8).map_err(parse_error);
        }
        if let Some(key) = rustls_pemfile::rsa_private_keys(&mut pem.as_slice()).next() {
            return key.map(PrivateKeyDer::Pkcs1).map_err(parse_error);
        }
        if let Some(key) = rustls_pemfile::ec_private_keys(&mut pem.as_slice()).next() {
            return key.map(PrivateKeyDer::Sec1).map_err(parse_error);
        }
        Err(CertificateError::NoKeyFound(key_path.to_string()))
    }
}

impl TlsHost for RustlsHost {
    type Context = ServingContext;

    fn build_serving_context(&self, paths: &CertificatePaths) -> Result<ServingContext, BundleError> {
        Ok(self.load_serving_context(&paths.cert_path, &paths.key_path)?)
    }

    fn certificate_signature_algorithm(&self, context: &ServingContext) -> SignatureAlgorithm {
        context.signature_algorithm.clone()
    }

    fn resolved_cipher_suites(&self) -> Vec<u16> {
        self.provider
            .cipher_suites
            .iter()
            .map(|suite| u16::from(suite.suite()))
            .collect()
    }
}
