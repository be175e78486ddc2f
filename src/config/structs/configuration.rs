use crate::config::structs::multicert_server_config::MulticertServerConfig;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    /// Inherited by every `[[server]]` that leaves its own list empty.
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub certificate_keys: Vec<String>,
    pub server: Vec<MulticertServerConfig>,
}
