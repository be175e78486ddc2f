use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::bundle::Bundle;
use crate::bundle::structs::certificate_paths::CertificatePaths;
use crate::bundle::traits::tls_host::TlsHost;
use crate::cipher::cipher::ecdsa_cipher_set;
use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::slot::enums::slot::Slot;
use crate::slot::slot::slot_for_signature_algorithm;
use log::{
    debug,
    info
};
use std::sync::Arc;

impl<C> std::fmt::Debug for Bundle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundle")
            .field("slots", &self.populated_slots().collect::<Vec<_>>())
            .field("ecdsa_ciphers", &self.ecdsa_ciphers.len())
            .finish()
    }
}

impl<C> Bundle<C> {
    /// Classifies the host's default context (entry 0, reported as
    /// `default_label`) and builds and classifies one serving context per
    /// additional entry.
    ///
    /// Any duplicate slot or unrecognised signature algorithm fails the
    /// whole compilation; nothing is returned half-built.
    pub fn compile<H>(
        host: &H,
        default_context: Arc<C>,
        default_label: &str,
        entries: &[CertificatePaths],
    ) -> Result<Self, BundleError>
    where
        H: TlsHost<Context = C>,
    {
        let mut slots: [Option<Arc<C>>; Slot::COUNT] = Default::default();
        Self::assign(host, &mut slots, Arc::clone(&default_context), 0, default_label)?;
        for (index, paths) in entries.iter().enumerate() {
            let context = Arc::new(host.build_serving_context(paths)?);
            Self::assign(host, &mut slots, context, index + 1, &paths.cert_path)?;
        }
        let ecdsa_ciphers = ecdsa_cipher_set(host.resolved_cipher_suites());
        debug!(
            "[MULTICERT] {} ECDSA cipher suite(s) allowed: {}",
            ecdsa_ciphers.len(),
            ecdsa_ciphers.suite_names().join(", ")
        );
        Ok(Self {
            slots,
            default_context,
            ecdsa_ciphers,
        })
    }

    fn assign<H>(
        host: &H,
        slots: &mut [Option<Arc<C>>; Slot::COUNT],
        context: Arc<C>,
        entry: usize,
        certificate: &str,
    ) -> Result<(), BundleError>
    where
        H: TlsHost<Context = C>,
    {
        let algorithm = host.certificate_signature_algorithm(&context);
        let slot = slot_for_signature_algorithm(&algorithm).ok_or_else(|| {
            BundleError::UnsupportedSignatureAlgorithm {
                algorithm: algorithm.to_string(),
                entry,
                certificate: certificate.to_string(),
            }
        })?;
        let target = &mut slots[slot.index()];
        if target.is_some() {
            return Err(BundleError::DuplicateCertificateType {
                slot,
                entry,
                certificate: certificate.to_string(),
            });
        }
        *target = Some(context);
        info!("[MULTICERT] Entry {} ({}) assigned to slot {} ({})", entry, certificate, slot, algorithm);
        Ok(())
    }

    pub fn get(&self, slot: Slot) -> Option<&Arc<C>> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_populated(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    pub fn populated_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL.into_iter().filter(|slot| self.is_populated(*slot))
    }

    pub fn has_ecdsa_slot(&self) -> bool {
        self.is_populated(Slot::EcdsaSha256)
            || self.is_populated(Slot::EcdsaSha384)
            || self.is_populated(Slot::EcdsaSha512)
    }

    pub fn has_rsa_sha2_slot(&self) -> bool {
        self.is_populated(Slot::RsaSha256)
            || self.is_populated(Slot::RsaSha384)
            || self.is_populated(Slot::RsaSha512)
    }

    /// An ECDSA slot is only servable when the policy leaves an ECDSA suite.
    pub fn can_ecdsa(&self) -> bool {
        self.has_ecdsa_slot() && !self.ecdsa_ciphers.is_empty()
    }

    /// Entry 0; what a connection keeps when nothing is selected.
    pub fn default_context(&self) -> &Arc<C> {
        &self.default_context
    }

    pub fn ecdsa_ciphers(&self) -> &CipherIdSet {
        &self.ecdsa_ciphers
    }
}
