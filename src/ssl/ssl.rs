use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::slot::enums::signature_algorithm::SignatureAlgorithm;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::multicert_resolver::MulticertResolver;
use crate::ssl::structs::rustls_host::RustlsHost;
use rustls::pki_types::CertificateDer;
use rustls::server::NoServerSessionStorage;
use std::path::Path;
use std::sync::Arc;

/// Server config whose certificate is chosen per ClientHello by `resolver`.
/// Session resumption is off: neither stateful sessions nor TLS 1.3 tickets.
pub fn create_server_config_with_resolver(
    resolver: Arc<MulticertResolver>,
    host: &RustlsHost,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let mut config = rustls::ServerConfig::builder_with_provider(Arc::clone(host.provider()))
        .with_protocol_versions(host.protocol_versions())?
        .with_no_client_auth()
        .with_cert_resolver(resolver);
    config.session_storage = Arc::new(NoServerSessionStorage {});
    config.send_tls13_tickets = 0;
    Ok(config)
}

/// Algorithm of the certificate's own signature (not its public key).
pub fn read_signature_algorithm(certificate: &CertificateDer<'_>) -> Result<SignatureAlgorithm, CertificateError> {
    let (_, parsed) = x509_parser::parse_x509_certificate(certificate.as_ref())
        .map_err(|e| CertificateError::X509ParseError(e.to_string()))?;
    Ok(SignatureAlgorithm::from_oid(
        &parsed.signature_algorithm.algorithm.to_id_string(),
    ))
}

/// Development certificates: one ECDSA P-256/SHA-256 and one ECDSA
/// P-384/SHA-384 pair for `localhost` and `domain`, written into `dir`.
pub fn create_selfsigned_certificates(dir: &Path, domain: &str) -> Result<Vec<CertificatePaths>, CertificateError> {
    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| CertificateError::WriteError(format!("{}: {}", dir.display(), e)))?;

    let mut generated = Vec::new();
    for (name, algorithm) in [
        ("ecdsa-p256", &rcgen::PKCS_ECDSA_P256_SHA256),
        ("ecdsa-p384", &rcgen::PKCS_ECDSA_P384_SHA384),
    ] {
        let key_pair = rcgen::KeyPair::generate_for(algorithm)
            .map_err(|e| CertificateError::GenerationError(e.to_string()))?;
        let certificate = rcgen::CertificateParams::new(subject_alt_names.clone())
            .and_then(|params| params.self_signed(&key_pair))
            .map_err(|e| CertificateError::GenerationError(e.to_string()))?;

        let cert_path = dir.join(format!("{}.pem", name));
        let key_path = dir.join(format!("{}.key", name));
        std::fs::write(&key_path, key_pair.serialize_pem())
            .map_err(|e| CertificateError::WriteError(format!("{}: {}", key_path.display(), e)))?;
        std::fs::write(&cert_path, certificate.pem())
            .map_err(|e| CertificateError::WriteError(format!("{}: {}", cert_path.display(), e)))?;
        log::info!("[CERTGEN] The files {} and {} have been generated", cert_path.display(), key_path.display());

        generated.push(CertificatePaths {
            cert_path: cert_path.to_string_lossy().into_owned(),
            key_path: key_path.to_string_lossy().into_owned(),
        });
    }
    Ok(generated)
}
