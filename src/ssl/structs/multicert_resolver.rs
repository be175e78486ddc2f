use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::bundle_store::BundleStore;
use crate::bundle::structs::server_identifier::ServerIdentifier;
use crate::ssl::structs::rustls_host::RustlsHost;
use crate::ssl::structs::serving_context::ServingContext;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct MulticertResolver {
    pub(crate) store: Arc<BundleStore<RustlsHost>>,
    pub(crate) server_id: ServerIdentifier,
    pub(crate) cached_bundle: RwLock<Option<Arc<Bundle<ServingContext>>>>,
}
