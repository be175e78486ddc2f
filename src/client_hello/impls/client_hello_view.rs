use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::client_hello::client_hello::{find_ecdsa_cipher, read_signature_algorithms, take, EXTENSION_SERVER_NAME, EXTENSION_SIGNATURE_ALGORITHMS, HANDSHAKE_CLIENT_HELLO};
use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::client_hello_view::ClientHelloView;
use crate::client_hello::structs::raw_cipher_suites::RawCipherSuites;
use crate::client_hello::structs::signature_algorithm_set::SignatureAlgorithmSet;
use crate::client_hello::traits::client_hello_source::ClientHelloSource;

const RANDOM_LEN: usize = 32;
const MAX_SESSION_ID_LEN: usize = 32;

impl<'a> ClientHelloView<'a> {
    /// Parses a ClientHello handshake message including its 4-byte header.
    #[tracing::instrument(skip(message), level = "debug")]
    pub fn from_handshake(message: &'a [u8]) -> Result<Self, ClientHelloError> {
        let mut cursor = Cursor::new(message);
        let handshake_type = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("handshake header"))?;
        if handshake_type != HANDSHAKE_CLIENT_HELLO {
            return Err(ClientHelloError::NotClientHello(handshake_type));
        }
        let declared = cursor
            .read_u24::<NetworkEndian>()
            .map_err(|_| ClientHelloError::Truncated("handshake header"))? as usize;
        let remaining = message.len() - cursor.position() as usize;
        if declared != remaining {
            return Err(ClientHelloError::LengthMismatch {
                field: "handshake",
                declared,
                remaining,
            });
        }
        Self::parse(&message[cursor.position() as usize..])
    }

    /// Parses a ClientHello body (everything after the handshake header).
    #[tracing::instrument(skip(body), level = "debug")]
    pub fn parse(body: &'a [u8]) -> Result<Self, ClientHelloError> {
        let mut cursor = Cursor::new(body);
        let legacy_version = cursor
            .read_u16::<NetworkEndian>()
            .map_err(|_| ClientHelloError::Truncated("legacy_version"))?;
        take(&mut cursor, RANDOM_LEN, "random")?;

        let session_id_len = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("session_id length"))? as usize;
        if session_id_len > MAX_SESSION_ID_LEN {
            return Err(ClientHelloError::InvalidSessionId(session_id_len));
        }
        take(&mut cursor, session_id_len, "session_id")?;

        let cipher_suites_len = cursor
            .read_u16::<NetworkEndian>()
            .map_err(|_| ClientHelloError::Truncated("cipher_suites length"))? as usize;
        let cipher_suites = take(&mut cursor, cipher_suites_len, "cipher_suites")?;

        let compression_len = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("compression_methods length"))? as usize;
        if compression_len == 0 {
            return Err(ClientHelloError::NoCompressionMethods);
        }
        take(&mut cursor, compression_len, "compression_methods")?;

        let mut extensions: Vec<(u16, &'a [u8])> = Vec::new();
        if (cursor.position() as usize) < body.len() {
            let declared = cursor
                .read_u16::<NetworkEndian>()
                .map_err(|_| ClientHelloError::Truncated("extensions length"))? as usize;
            let remaining = body.len() - cursor.position() as usize;
            if declared != remaining {
                return Err(ClientHelloError::LengthMismatch {
                    field: "extensions",
                    declared,
                    remaining,
                });
            }
            while (cursor.position() as usize) < body.len() {
                let extension_type = cursor
                    .read_u16::<NetworkEndian>()
                    .map_err(|_| ClientHelloError::Truncated("extension header"))?;
                let extension_len = cursor
                    .read_u16::<NetworkEndian>()
                    .map_err(|_| ClientHelloError::Truncated("extension header"))? as usize;
                let data = take(&mut cursor, extension_len, "extension data")?;
                if extensions.iter().any(|(seen, _)| *seen == extension_type) {
                    return Err(ClientHelloError::DuplicateExtension(extension_type));
                }
                extensions.push((extension_type, data));
            }
        }

        Ok(Self {
            legacy_version,
            cipher_suites,
            extensions,
        })
    }

    pub fn extension(&self, extension_type: u16) -> Option<&'a [u8]> {
        self.extensions
            .iter()
            .find(|(seen, _)| *seen == extension_type)
            .map(|(_, data)| *data)
    }

    pub fn has_extension(&self, extension_type: u16) -> bool {
        self.extension(extension_type).is_some()
    }

    pub fn extension_types(&self) -> impl Iterator<Item = u16> + '_ {
        self.extensions.iter().map(|(extension_type, _)| *extension_type)
    }

    pub fn cipher_suites(&self) -> RawCipherSuites<'a> {
        RawCipherSuites::new(self.cipher_suites)
    }
}

impl ClientHelloSource for ClientHelloView<'_> {
    fn signature_algorithms(&self) -> Option<Result<SignatureAlgorithmSet, ClientHelloError>> {
        self.extension(EXTENSION_SIGNATURE_ALGORITHMS)
            .map(read_signature_algorithms)
    }

    fn ecdsa_cipher(&self, allowed: &CipherIdSet) -> Result<Option<u16>, ClientHelloError> {
        find_ecdsa_cipher(self.cipher_suites(), allowed)
    }

    fn has_server_name(&self) -> bool {
        self.has_extension(EXTENSION_SERVER_NAME)
    }
}
