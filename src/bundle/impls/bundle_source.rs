use crate::bundle::structs::bundle_source::BundleSource;
use std::sync::Arc;

impl<H> Clone for BundleSource<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            certificates: self.certificates.clone(),
        }
    }
}
