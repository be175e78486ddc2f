/// One populated slot in the status response.
pub mod slot_status;
