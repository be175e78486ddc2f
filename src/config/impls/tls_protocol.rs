use crate::config::enums::tls_protocol::TlsProtocol;
use rustls::SupportedProtocolVersion;

impl TlsProtocol {
    pub fn version(&self) -> &'static SupportedProtocolVersion {
        match self {
            TlsProtocol::tls12 => &rustls::version::TLS12,
            TlsProtocol::tls13 => &rustls::version::TLS13,
        }
    }
}

impl std::fmt::Display for TlsProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TlsProtocol::tls12 => write!(f, "TLSv1.2"),
            TlsProtocol::tls13 => write!(f, "TLSv1.3"),
        }
    }
}
