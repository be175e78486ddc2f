use crate::slot::enums::slot::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Slot(Slot),
    /// Keep whatever context is already active (bundle entry 0).
    UseDefault,
}
