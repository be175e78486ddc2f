/// Configuration-time bundle errors.
pub mod bundle_error;
