#![allow(dead_code)]
use multicert::bundle::enums::bundle_error::BundleError;
use multicert::bundle::structs::certificate_paths::CertificatePaths;
use multicert::bundle::traits::tls_host::TlsHost;
use multicert::config::enums::tls_protocol::TlsProtocol;
use multicert::config::structs::multicert_server_config::MulticertServerConfig;
use multicert::slot::enums::signature_algorithm::SignatureAlgorithm;
use std::path::Path;

pub const MD5_RSA: &str = "1.2.840.113549.1.1.4";
pub const SHA256_RSA: &str = "1.2.840.113549.1.1.11";
pub const SHA384_RSA: &str = "1.2.840.113549.1.1.12";
pub const SHA512_RSA: &str = "1.2.840.113549.1.1.13";
pub const ECDSA_SHA256: &str = "1.2.840.10045.4.3.2";
pub const ECDSA_SHA384: &str = "1.2.840.10045.4.3.3";
pub const ECDSA_SHA512: &str = "1.2.840.10045.4.3.4";

pub const ECDHE_ECDSA_AES128_GCM: u16 = 0xc02b;
pub const ECDHE_RSA_AES128_GCM: u16 = 0xc02f;
pub const TLS13_AES128_GCM: u16 = 0x1301;

pub const SHA256: u8 = 4;
pub const SHA384: u8 = 5;
pub const SHA512: u8 = 6;
pub const RSA: u8 = 1;
pub const ECDSA: u8 = 3;

/// Context labelled with its entry name. The key path carries the OID the
/// host reports as the certificate's signature algorithm.
#[derive(Debug)]
pub struct TestContext {
    pub label: String,
    pub algorithm: SignatureAlgorithm,
}

pub struct TestHost {
    pub cipher_suites: Vec<u16>,
}

impl TlsHost for TestHost {
    type Context = TestContext;

    fn build_serving_context(&self, paths: &CertificatePaths) -> Result<TestContext, BundleError> {
        if paths.cert_path.starts_with("missing") {
            return Err(BundleError::ServingContext(format!("cannot load {}", paths.cert_path)));
        }
        Ok(TestContext {
            label: paths.cert_path.clone(),
            algorithm: SignatureAlgorithm::from_oid(&paths.key_path),
        })
    }

    fn certificate_signature_algorithm(&self, context: &TestContext) -> SignatureAlgorithm {
        context.algorithm.clone()
    }

    fn resolved_cipher_suites(&self) -> Vec<u16> {
        self.cipher_suites.clone()
    }
}

pub fn test_host() -> TestHost {
    TestHost {
        cipher_suites: vec![TLS13_AES128_GCM, ECDHE_RSA_AES128_GCM, ECDHE_ECDSA_AES128_GCM],
    }
}

pub fn entry(label: &str, oid: &str) -> CertificatePaths {
    CertificatePaths {
        cert_path: label.to_string(),
        key_path: oid.to_string(),
    }
}

pub fn signature_algorithms(pairs: &[(u8, u8)]) -> Vec<u8> {
    let mut data = ((pairs.len() * 2) as u16).to_be_bytes().to_vec();
    for (hash, signature) in pairs {
        data.extend_from_slice(&[*hash, *signature]);
    }
    data
}

/// ClientHello handshake message, 4-byte header included.
pub fn client_hello(signature_algorithms: Option<Vec<u8>>, cipher_suites: &[u16], server_name: Option<&str>) -> Vec<u8> {
    let mut extensions: Vec<(u16, Vec<u8>)> = Vec::new();
    if let Some(name) = server_name {
        let mut list = vec![0x00];
        list.extend_from_slice(&(name.len() as u16).to_be_bytes());
        list.extend_from_slice(name.as_bytes());
        let mut data = (list.len() as u16).to_be_bytes().to_vec();
        data.extend_from_slice(&list);
        extensions.push((0, data));
    }
    extensions.push((10, vec![0x00, 0x02, 0x00, 0x17]));
    if let Some(data) = signature_algorithms {
        extensions.push((13, data));
    }

    let mut body = vec![0x03, 0x03];
    body.extend_from_slice(&[0x11; 32]);
    body.push(0);
    body.extend_from_slice(&((cipher_suites.len() * 2) as u16).to_be_bytes());
    for suite in cipher_suites {
        body.extend_from_slice(&suite.to_be_bytes());
    }
    body.extend_from_slice(&[1, 0]);
    let mut block = Vec::new();
    for (extension_type, data) in &extensions {
        block.extend_from_slice(&extension_type.to_be_bytes());
        block.extend_from_slice(&(data.len() as u16).to_be_bytes());
        block.extend_from_slice(data);
    }
    body.extend_from_slice(&(block.len() as u16).to_be_bytes());
    body.extend_from_slice(&block);

    let mut message = vec![1];
    message.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
    message.extend_from_slice(&body);
    message
}

/// Self-signed certificate for `localhost`; returns the cert and key paths.
pub fn write_certificate(dir: &Path, name: &str, algorithm: &'static rcgen::SignatureAlgorithm) -> (String, String) {
    let key_pair = rcgen::KeyPair::generate_for(algorithm).unwrap();
    let certificate = rcgen::CertificateParams::new(vec!["localhost".to_string()])
        .unwrap()
        .self_signed(&key_pair)
        .unwrap();
    let cert_path = dir.join(format!("{name}.pem"));
    let key_path = dir.join(format!("{name}.key"));
    std::fs::write(&cert_path, certificate.pem()).unwrap();
    std::fs::write(&key_path, key_pair.serialize_pem()).unwrap();
    (
        cert_path.to_string_lossy().into_owned(),
        key_path.to_string_lossy().into_owned(),
    )
}

pub fn server_config(name: &str, bind_address: &str, certificates: Vec<(String, String)>) -> MulticertServerConfig {
    let (certificates, certificate_keys) = certificates.into_iter().unzip();
    MulticertServerConfig {
        enabled: true,
        name: name.to_string(),
        bind_address: bind_address.to_string(),
        threads: Some(1),
        keep_alive: Some(5),
        request_timeout: Some(5),
        disconnect_timeout: Some(5),
        max_connections: None,
        protocols: vec![TlsProtocol::tls12, TlsProtocol::tls13],
        cipher_suites: vec![],
        certificates,
        certificate_keys,
    }
}
