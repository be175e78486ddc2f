use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientHelloError {
    #[error("Truncated {0}")]
    Truncated(&'static str),
    #[error("Length mismatch in {field}: declared {declared}, remaining {remaining}")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },
    #[error("Empty signature_algorithms list")]
    EmptySignatureAlgorithms,
    #[error("Odd signature_algorithms length: {0}")]
    OddSignatureAlgorithmsLength(usize),
    #[error("Trailing byte in cipher_suites")]
    TrailingCipherByte,
    #[error("Not a handshake record: content type {0}")]
    NotHandshakeRecord(u8),
    #[error("Not a ClientHello: handshake type {0}")]
    NotClientHello(u8),
    #[error("Duplicate extension: {0}")]
    DuplicateExtension(u16),
    #[error("Invalid session_id length: {0}")]
    InvalidSessionId(usize),
    #[error("No compression methods")]
    NoCompressionMethods,
}
