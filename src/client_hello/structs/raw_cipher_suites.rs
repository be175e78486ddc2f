/// Walks a cipher-suite vector two bytes at a time.
#[derive(Debug, Clone)]
pub struct RawCipherSuites<'a> {
    pub(crate) bytes: &'a [u8],
}
