use crate::ssl::structs::serving_context::ServingContext;

impl std::fmt::Debug for ServingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServingContext")
            .field("certs_count", &self.certified_key.cert.len())
            .field("signature_algorithm", &self.signature_algorithm)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
