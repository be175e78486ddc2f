/// Certificate and key loading errors.
pub mod certificate_error;
