use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::slot::enums::slot::Slot;
use std::sync::Arc;

#[derive(Debug)]
pub enum HandshakeOutcome<'a, C> {
    Install { slot: Slot, context: &'a Arc<C> },
    UseDefault,
    /// Fail the handshake with the error's alert.
    Abort(ClientHelloError),
}
