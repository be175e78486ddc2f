use crate::client_hello::client_hello::ALERT_DECODE_ERROR;
use crate::client_hello::enums::client_hello_error::ClientHelloError;

impl ClientHelloError {
    /// TLS alert to send before closing the handshake.
    pub fn alert_description(&self) -> u8 {
        ALERT_DECODE_ERROR
    }
}
