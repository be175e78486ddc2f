use crate::bundle::structs::bundle::Bundle;
use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::client_hello_view::ClientHelloView;
use crate::client_hello::traits::client_hello_source::ClientHelloSource;
use crate::selector::enums::handshake_outcome::HandshakeOutcome;
use crate::selector::enums::selection::Selection;
use crate::slot::enums::slot::Slot;
use log::{
    debug,
    warn
};
use std::sync::Arc;

/// Strict descending preference when the client advertises signature algorithms.
pub const SLOT_PRIORITY: [Slot; 6] = [
    Slot::EcdsaSha512,
    Slot::EcdsaSha384,
    Slot::EcdsaSha256,
    Slot::RsaSha512,
    Slot::RsaSha384,
    Slot::RsaSha256,
];

pub fn select<C, S>(bundle: &Bundle<C>, hello: &S) -> Result<Selection, ClientHelloError>
where
    S: ClientHelloSource + ?Sized,
{
    let can_ecdsa = bundle.can_ecdsa();
    if can_ecdsa || bundle.has_rsa_sha2_slot() {
        if let Some(signature_algorithms) = hello.signature_algorithms() {
            let signature_algorithms = signature_algorithms?;
            let has_ecdsa_cipher = if can_ecdsa && signature_algorithms.has_any_ecdsa() {
                hello.ecdsa_cipher(bundle.ecdsa_ciphers())?.is_some()
            } else {
                false
            };
            let matched = SLOT_PRIORITY.into_iter().find(|slot| {
                bundle.is_populated(*slot)
                    && (!slot.is_ecdsa() || has_ecdsa_cipher)
                    && signature_algorithms.supports(*slot)
            });
            if let Some(slot) = matched {
                return Ok(Selection::Slot(slot));
            }
        }
    }
    if bundle.is_populated(Slot::RsaSha256) && hello.has_server_name() {
        return Ok(Selection::Slot(Slot::RsaSha256));
    }
    if bundle.is_populated(Slot::RsaLegacy) {
        return Ok(Selection::Slot(Slot::RsaLegacy));
    }
    Ok(Selection::UseDefault)
}

/// Runs the selector once for a connection and maps the result onto the
/// context to install. Selecting the slot that already holds the default
/// context installs nothing.
pub fn on_client_hello<'a, C, S>(bundle: &'a Bundle<C>, hello: &S) -> HandshakeOutcome<'a, C>
where
    S: ClientHelloSource + ?Sized,
{
    match select(bundle, hello) {
        Ok(Selection::Slot(slot)) => match bundle.get(slot) {
            Some(context) if !Arc::ptr_eq(context, bundle.default_context()) => {
                debug!("[SELECT] Serving slot {}", slot);
                HandshakeOutcome::Install { slot, context }
            }
            _ => {
                debug!("[SELECT] Slot {} is the default context", slot);
                HandshakeOutcome::UseDefault
            }
        },
        Ok(Selection::UseDefault) => {
            debug!("[SELECT] No slot matched, keeping default context");
            HandshakeOutcome::UseDefault
        }
        Err(error) => {
            warn!("[SELECT] Aborting handshake: {}", error);
            HandshakeOutcome::Abort(error)
        }
    }
}

/// Same as [`on_client_hello`] for a raw handshake message
/// (4-byte header included).
#[tracing::instrument(level = "debug", skip(bundle))]
pub fn on_client_hello_bytes<'a, C>(bundle: &'a Bundle<C>, handshake: &[u8]) -> HandshakeOutcome<'a, C> {
    match ClientHelloView::from_handshake(handshake) {
        Ok(view) => on_client_hello(bundle, &view),
        Err(error) => {
            warn!("[SELECT] Aborting handshake, unreadable ClientHello: {}", error);
            HandshakeOutcome::Abort(error)
        }
    }
}
