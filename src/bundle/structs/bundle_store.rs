use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::bundle_source::BundleSource;
use crate::bundle::structs::server_identifier::ServerIdentifier;
use crate::bundle::traits::tls_host::TlsHost;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct BundleStore<H: TlsHost> {
    pub(crate) bundles: RwLock<HashMap<ServerIdentifier, Arc<Bundle<H::Context>>>>,
    pub(crate) sources: RwLock<HashMap<ServerIdentifier, BundleSource<H>>>,
}
