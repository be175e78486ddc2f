use rustls::SupportedProtocolVersion;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

pub struct RustlsHost {
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) protocol_versions: Vec<&'static SupportedProtocolVersion>,
}
