pub mod cipher_id_set;
