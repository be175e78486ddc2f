use crate::client_hello::enums::client_hello_error::ClientHelloError;
use crate::client_hello::structs::raw_cipher_suites::RawCipherSuites;

impl<'a> RawCipherSuites<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for RawCipherSuites<'_> {
    type Item = Result<u16, ClientHelloError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.bytes {
            [] => None,
            [high, low, rest @ ..] => {
                self.bytes = rest;
                Some(Ok(u16::from_be_bytes([*high, *low])))
            }
            [_] => {
                self.bytes = &[];
                Some(Err(ClientHelloError::TrailingCipherByte))
            }
        }
    }
}
