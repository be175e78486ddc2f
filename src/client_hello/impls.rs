pub mod client_hello_error;

pub mod client_hello_view;

pub mod signature_algorithm_set;

pub mod raw_cipher_suites;
