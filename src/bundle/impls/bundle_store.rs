use crate::bundle::bundle::compile_bundle;
use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::bundle_source::BundleSource;
use crate::bundle::structs::bundle_store::BundleStore;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::bundle::structs::server_identifier::ServerIdentifier;
use crate::bundle::traits::tls_host::TlsHost;
use std::sync::Arc;

impl<H: TlsHost> std::fmt::Debug for BundleStore<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bundles = self.bundles.read();
        f.debug_struct("BundleStore")
            .field("bundles_count", &bundles.len())
            .field("servers", &bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<H: TlsHost> Default for BundleStore<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TlsHost> BundleStore<H> {
    pub fn new() -> Self {
        Self {
            bundles: parking_lot::RwLock::new(std::collections::HashMap::new()),
            sources: parking_lot::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Compiles outside of any lock and publishes only on success.
    pub fn compile_and_publish(
        &self,
        server_id: ServerIdentifier,
        host: Arc<H>,
        certificates: Vec<CertificatePaths>,
    ) -> Result<Arc<Bundle<H::Context>>, BundleError> {
        let bundle = Arc::new(compile_bundle(host.as_ref(), &certificates)?);
        self.sources.write().insert(
            server_id.clone(),
            BundleSource {
                host,
                certificates,
            },
        );
        self.bundles.write().insert(server_id.clone(), Arc::clone(&bundle));
        log::info!(
            "[CERTIFICATE] Published bundle for {} with slots {:?}",
            server_id,
            bundle.populated_slots().map(|slot| slot.name()).collect::<Vec<_>>()
        );
        Ok(bundle)
    }

    pub fn get_bundle(&self, server_id: &ServerIdentifier) -> Option<Arc<Bundle<H::Context>>> {
        self.bundles.read().get(server_id).cloned()
    }

    pub fn get_paths(&self, server_id: &ServerIdentifier) -> Option<Vec<CertificatePaths>> {
        self.sources
            .read()
            .get(server_id)
            .map(|source| source.certificates.clone())
    }

    /// Recompiles from the stored paths. On failure the published bundle stays.
    pub fn reload_bundle(&self, server_id: &ServerIdentifier) -> Result<Arc<Bundle<H::Context>>, BundleError> {
        let source = self
            .sources
            .read()
            .get(server_id)
            .cloned()
            .ok_or_else(|| BundleError::ServerNotFound(server_id.to_string()))?;
        let bundle = Arc::new(compile_bundle(source.host.as_ref(), &source.certificates)?);
        self.bundles.write().insert(server_id.clone(), Arc::clone(&bundle));
        log::info!("[CERTIFICATE] Reloaded bundle for {}", server_id);
        Ok(bundle)
    }

    pub fn all_servers(&self) -> Vec<ServerIdentifier> {
        self.sources.read().keys().cloned().collect()
    }

    pub fn reload_all(&self) -> Vec<(ServerIdentifier, Result<Arc<Bundle<H::Context>>, BundleError>)> {
        self.all_servers()
            .into_iter()
            .map(|server_id| {
                let result = self.reload_bundle(&server_id);
                (server_id, result)
            })
            .collect()
    }
}
