use crate::bundle::structs::server_identifier::ServerIdentifier;

impl ServerIdentifier {
    pub fn new(name: &str, bind_address: &str) -> Self {
        Self {
            name: name.to_string(),
            bind_address: bind_address.to_string(),
        }
    }
}

impl std::fmt::Display for ServerIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.bind_address)
    }
}
