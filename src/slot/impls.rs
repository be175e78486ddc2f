pub mod slot;

pub mod signature_algorithm;
