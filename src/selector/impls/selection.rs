use crate::selector::enums::selection::Selection;

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Slot(slot) => write!(f, "{}", slot),
            Selection::UseDefault => write!(f, "default"),
        }
    }
}
