use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotStatus {
    pub slot: String,
    pub signature_algorithm: String,
    pub cert_path: String,
    pub loaded_at: String,
    pub default: bool,
}
