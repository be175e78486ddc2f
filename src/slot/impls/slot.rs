use crate::slot::enums::slot::Slot;

impl Slot {
    pub const COUNT: usize = 7;

    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::RsaLegacy,
        Slot::RsaSha256,
        Slot::RsaSha384,
        Slot::RsaSha512,
        Slot::EcdsaSha256,
        Slot::EcdsaSha384,
        Slot::EcdsaSha512,
    ];

    /// Position of the slot in a `[_; Slot::COUNT]` table.
    pub fn index(self) -> usize {
        match self {
            Slot::RsaLegacy => 0,
            Slot::RsaSha256 => 1,
            Slot::RsaSha384 => 2,
            Slot::RsaSha512 => 3,
            Slot::EcdsaSha256 => 4,
            Slot::EcdsaSha384 => 5,
            Slot::EcdsaSha512 => 6,
        }
    }

    pub fn is_ecdsa(self) -> bool {
        matches!(self, Slot::EcdsaSha256 | Slot::EcdsaSha384 | Slot::EcdsaSha512)
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::RsaLegacy => "rsa",
            Slot::RsaSha256 => "rsa_sha256",
            Slot::RsaSha384 => "rsa_sha384",
            Slot::RsaSha512 => "rsa_sha512",
            Slot::EcdsaSha256 => "ecdsa_sha256",
            Slot::EcdsaSha384 => "ecdsa_sha384",
            Slot::EcdsaSha512 => "ecdsa_sha512",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
