/// A structurally validated ClientHello body.
///
/// Borrowed from the connection's receive buffer; nothing is copied except
/// the extension index.
#[derive(Debug, Clone)]
pub struct ClientHelloView<'a> {
    pub legacy_version: u16,
    pub(crate) cipher_suites: &'a [u8],
    pub(crate) extensions: Vec<(u16, &'a [u8])>,
}
