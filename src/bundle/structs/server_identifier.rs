#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct ServerIdentifier {
    pub name: String,
    pub bind_address: String,
}
