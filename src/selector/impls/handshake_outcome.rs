use crate::bundle::structs::bundle::Bundle;
use crate::selector::enums::handshake_outcome::HandshakeOutcome;
use std::sync::Arc;

impl<'a, C> HandshakeOutcome<'a, C> {
    /// Context the connection continues with; `None` aborts it.
    pub fn serving_context(&self, bundle: &'a Bundle<C>) -> Option<&'a Arc<C>> {
        match self {
            HandshakeOutcome::Install { context, .. } => Some(*context),
            HandshakeOutcome::UseDefault => Some(bundle.default_context()),
            HandshakeOutcome::Abort(_) => None,
        }
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, HandshakeOutcome::Abort(_))
    }
}
