use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::bundle_store::BundleStore;
use crate::bundle::structs::server_identifier::ServerIdentifier;
use crate::selector::selector::on_client_hello;
use crate::ssl::structs::multicert_resolver::MulticertResolver;
use crate::ssl::structs::rustls_client_hello::RustlsClientHello;
use crate::ssl::structs::rustls_host::RustlsHost;
use crate::ssl::structs::serving_context::ServingContext;
use rustls::server::ResolvesServerCert;
use std::sync::Arc;

impl std::fmt::Debug for MulticertResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MulticertResolver")
            .field("server_id", &self.server_id)
            .field("has_cached_bundle", &self.cached_bundle.read().is_some())
            .finish()
    }
}

impl MulticertResolver {
    pub fn new(
        store: Arc<BundleStore<RustlsHost>>,
        server_id: ServerIdentifier,
    ) -> Result<Self, BundleError> {
        let resolver = Self {
            store,
            server_id,
            cached_bundle: parking_lot::RwLock::new(None),
        };
        resolver.refresh_cache()?;
        Ok(resolver)
    }

    pub fn server_id(&self) -> &ServerIdentifier {
        &self.server_id
    }

    /// Picks up the bundle currently published for this server.
    pub fn refresh_cache(&self) -> Result<(), BundleError> {
        let bundle = self
            .store
            .get_bundle(&self.server_id)
            .ok_or_else(|| BundleError::ServerNotFound(self.server_id.to_string()))?;
        *self.cached_bundle.write() = Some(bundle);
        log::info!(
            "[CERTIFICATE] Refreshed bundle cache for {}",
            self.server_id
        );
        Ok(())
    }

    pub fn has_bundle(&self) -> bool {
        self.cached_bundle.read().is_some()
    }

    pub fn bundle(&self) -> Option<Arc<Bundle<ServingContext>>> {
        self.cached_bundle.read().clone()
    }
}

impl ResolvesServerCert for MulticertResolver {
    fn resolve(&self, client_hello: rustls::server::ClientHello<'_>) -> Option<Arc<rustls::sign::CertifiedKey>> {
        let bundle = self.bundle()?;
        let outcome = on_client_hello(&bundle, &RustlsClientHello::new(&client_hello));
        outcome
            .serving_context(&bundle)
            .map(|context| Arc::clone(&context.certified_key))
    }
}
