use rustls::{
    CipherSuite,
    SignatureScheme
};

#[derive(Debug, Clone, Copy)]
pub struct RustlsClientHello<'a> {
    pub(crate) signature_schemes: &'a [SignatureScheme],
    pub(crate) cipher_suites: &'a [CipherSuite],
    pub(crate) server_name: Option<&'a str>,
}
