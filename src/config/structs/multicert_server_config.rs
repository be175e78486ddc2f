use crate::config::enums::tls_protocol::TlsProtocol;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MulticertServerConfig {
    pub enabled: bool,
    pub name: String,
    pub bind_address: String,
    pub threads: Option<u64>,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>,
    pub max_connections: Option<u64>,
    pub protocols: Vec<TlsProtocol>,
    #[serde(default)]
    pub cipher_suites: Vec<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub certificate_keys: Vec<String>,
}
