use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Unknown cipher suite: {0}")]
    UnknownCipherSuite(String),
    #[error("No cipher suite left for the configured protocols")]
    NoCipherSuites,
}
