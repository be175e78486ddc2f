use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::client_hello::client_hello::find_ecdsa_cipher;
use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::signature_algorithm_set::SignatureAlgorithmSet;
use crate::client_hello::traits::client_hello_source::ClientHelloSource;
use crate::ssl::structs::rustls_client_hello::RustlsClientHello;
use rustls::server::ClientHello;

impl<'a> RustlsClientHello<'a> {
    pub fn new(client_hello: &'a ClientHello<'_>) -> Self {
        Self {
            signature_schemes: client_hello.signature_schemes(),
            cipher_suites: client_hello.cipher_suites(),
            server_name: client_hello.server_name(),
        }
    }
}

impl ClientHelloSource for RustlsClientHello<'_> {
    /// rustls reports a missing extension as an empty scheme list.
    fn signature_algorithms(&self) -> Option<Result<SignatureAlgorithmSet, ClientHelloError>> {
        if self.signature_schemes.is_empty() {
            return None;
        }
        Some(Ok(SignatureAlgorithmSet::from_schemes(
            self.signature_schemes.iter().map(|scheme| u16::from(*scheme)),
        )))
    }

    fn ecdsa_cipher(&self, allowed: &CipherIdSet) -> Result<Option<u16>, ClientHelloError> {
        find_ecdsa_cipher(
            self.cipher_suites.iter().map(|suite| Ok(u16::from(*suite))),
            allowed,
        )
    }

    fn has_server_name(&self) -> bool {
        self.server_name.is_some()
    }
}
