use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::signature_algorithm_set::SignatureAlgorithmSet;

pub trait ClientHelloSource {
    /// `None` when the client sent no `signature_algorithms` extension.
    fn signature_algorithms(&self) -> Option<Result<SignatureAlgorithmSet, ClientHelloError>>;

    /// First offered suite that is ECDSA-keyed and a member of `allowed`.
    fn ecdsa_cipher(&self, allowed: &CipherIdSet) -> Result<Option<u16>, ClientHelloError>;

    fn has_server_name(&self) -> bool;
}
