use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::cipher::cipher::is_ecdsa_cipher_suite;
use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::signature_algorithm_set::SignatureAlgorithmSet;

pub const CONTENT_TYPE_HANDSHAKE: u8 = 22;
pub const HANDSHAKE_CLIENT_HELLO: u8 = 1;

pub const EXTENSION_SERVER_NAME: u16 = 0;
pub const EXTENSION_SIGNATURE_ALGORITHMS: u16 = 13;

pub const HASH_SHA256: u8 = 4;
pub const HASH_SHA384: u8 = 5;
pub const HASH_SHA512: u8 = 6;

pub const SIGNATURE_RSA: u8 = 1;
pub const SIGNATURE_ECDSA: u8 = 3;

pub const ALERT_DECODE_ERROR: u8 = 50;

const RECORD_HEADER_LEN: usize = 5;
const HANDSHAKE_HEADER_LEN: usize = 4;

/// Reads the body of a `signature_algorithms` extension.
///
/// The body is a u16 length followed by (hash, signature) byte pairs. The
/// length must consume the body exactly and describe a non-empty, even
/// list. Pairs outside the six tracked combinations are skipped.
#[tracing::instrument(skip(extension), level = "debug")]
pub fn read_signature_algorithms(extension: &[u8]) -> Result<SignatureAlgorithmSet, ClientHelloError> {
    let mut cursor = Cursor::new(extension);
    let declared = cursor
        .read_u16::<NetworkEndian>()
        .map_err(|_| ClientHelloError::Truncated("signature_algorithms length"))? as usize;
    let remaining = extension.len() - 2;
    if declared != remaining {
        return Err(ClientHelloError::LengthMismatch {
            field: "signature_algorithms",
            declared,
            remaining,
        });
    }
    if declared == 0 {
        return Err(ClientHelloError::EmptySignatureAlgorithms);
    }
    if declared % 2 != 0 {
        return Err(ClientHelloError::OddSignatureAlgorithmsLength(declared));
    }

    let mut set = SignatureAlgorithmSet::default();
    while (cursor.position() as usize) < extension.len() {
        let hash = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("signature_algorithms hash"))?;
        let signature = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("signature_algorithms signature"))?;
        set.observe(hash, signature);
        if set.is_complete() {
            break;
        }
    }
    Ok(set)
}

/// Scans offered cipher suites in order and stops at the first one that is
/// ECDSA-keyed and allowed by the host.
pub fn find_ecdsa_cipher<I>(offered: I, allowed: &CipherIdSet) -> Result<Option<u16>, ClientHelloError>
where
    I: IntoIterator<Item = Result<u16, ClientHelloError>>,
{
    for suite in offered {
        let suite = suite?;
        if is_ecdsa_cipher_suite(suite) && allowed.contains(suite) {
            return Ok(Some(suite));
        }
    }
    Ok(None)
}

/// Joins the handshake fragments carried by one or more TLS plaintext
/// records into the complete ClientHello handshake message.
///
/// Bytes after the end of the ClientHello are ignored.
#[tracing::instrument(skip(records), level = "debug")]
pub fn reassemble_client_hello(records: &[u8]) -> Result<Vec<u8>, ClientHelloError> {
    let mut message: Vec<u8> = Vec::new();
    let mut cursor = Cursor::new(records);
    loop {
        let content_type = cursor
            .read_u8()
            .map_err(|_| ClientHelloError::Truncated("handshake message"))?;
        if content_type != CONTENT_TYPE_HANDSHAKE {
            return Err(ClientHelloError::NotHandshakeRecord(content_type));
        }
        let _legacy_record_version = cursor
            .read_u16::<NetworkEndian>()
            .map_err(|_| ClientHelloError::Truncated("record header"))?;
        let length = cursor
            .read_u16::<NetworkEndian>()
            .map_err(|_| ClientHelloError::Truncated("record header"))? as usize;
        let fragment = take(&mut cursor, length, "record fragment")?;
        message.extend_from_slice(fragment);

        if message.len() >= HANDSHAKE_HEADER_LEN {
            if message[0] != HANDSHAKE_CLIENT_HELLO {
                return Err(ClientHelloError::NotClientHello(message[0]));
            }
            let body_len = u32::from_be_bytes([0, message[1], message[2], message[3]]) as usize;
            let total = HANDSHAKE_HEADER_LEN + body_len;
            if message.len() >= total {
                message.truncate(total);
                return Ok(message);
            }
        }
        if (cursor.position() as usize) + RECORD_HEADER_LEN > records.len() {
            return Err(ClientHelloError::Truncated("handshake message"));
        }
    }
}

/// Borrows the next `len` bytes from `cursor`, failing instead of reading
/// past the end of the buffer.
pub(crate) fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: usize, field: &'static str) -> Result<&'a [u8], ClientHelloError> {
    let data: &'a [u8] = *cursor.get_ref();
    let start = cursor.position() as usize;
    if data.len().saturating_sub(start) < len {
        return Err(ClientHelloError::Truncated(field));
    }
    cursor.set_position((start + len) as u64);
    Ok(&data[start..start + len])
}
