use crate::cipher::structs::cipher_id_set::CipherIdSet;
use crate::slot::enums::slot::Slot;
use std::sync::Arc;

pub struct Bundle<C> {
    pub(crate) slots: [Option<Arc<C>>; Slot::COUNT],
    pub(crate) default_context: Arc<C>,
    pub(crate) ecdsa_ciphers: CipherIdSet,
}
