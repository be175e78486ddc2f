use crate::slot::enums::signature_algorithm::SignatureAlgorithm;

impl SignatureAlgorithm {
    pub fn from_oid(oid: &str) -> SignatureAlgorithm {
        match oid {
            "1.2.840.113549.1.1.4" => SignatureAlgorithm::Md5WithRsa,
            "1.2.840.113549.1.1.5" => SignatureAlgorithm::Sha1WithRsa,
            "1.2.840.113549.1.1.11" => SignatureAlgorithm::Sha256WithRsa,
            "1.2.840.113549.1.1.12" => SignatureAlgorithm::Sha384WithRsa,
            "1.2.840.113549.1.1.13" => SignatureAlgorithm::Sha512WithRsa,
            "1.2.840.10045.4.3.2" => SignatureAlgorithm::EcdsaWithSha256,
            "1.2.840.10045.4.3.3" => SignatureAlgorithm::EcdsaWithSha384,
            "1.2.840.10045.4.3.4" => SignatureAlgorithm::EcdsaWithSha512,
            other => SignatureAlgorithm::Other(other.to_string()),
        }
    }

    pub fn oid(&self) -> &str {
        match self {
            SignatureAlgorithm::Md5WithRsa => "1.2.840.113549.1.1.4",
            SignatureAlgorithm::Sha1WithRsa => "1.2.840.113549.1.1.5",
            SignatureAlgorithm::Sha256WithRsa => "1.2.840.113549.1.1.11",
            SignatureAlgorithm::Sha384WithRsa => "1.2.840.113549.1.1.12",
            SignatureAlgorithm::Sha512WithRsa => "1.2.840.113549.1.1.13",
            SignatureAlgorithm::EcdsaWithSha256 => "1.2.840.10045.4.3.2",
            SignatureAlgorithm::EcdsaWithSha384 => "1.2.840.10045.4.3.3",
            SignatureAlgorithm::EcdsaWithSha512 => "1.2.840.10045.4.3.4",
            SignatureAlgorithm::Other(oid) => oid,
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureAlgorithm::Md5WithRsa => write!(f, "md5WithRSAEncryption"),
            SignatureAlgorithm::Sha1WithRsa => write!(f, "sha1WithRSAEncryption"),
            SignatureAlgorithm::Sha256WithRsa => write!(f, "sha256WithRSAEncryption"),
            SignatureAlgorithm::Sha384WithRsa => write!(f, "sha384WithRSAEncryption"),
            SignatureAlgorithm::Sha512WithRsa => write!(f, "sha512WithRSAEncryption"),
            SignatureAlgorithm::EcdsaWithSha256 => write!(f, "ecdsa-with-SHA256"),
            SignatureAlgorithm::EcdsaWithSha384 => write!(f, "ecdsa-with-SHA384"),
            SignatureAlgorithm::EcdsaWithSha512 => write!(f, "ecdsa-with-SHA512"),
            SignatureAlgorithm::Other(oid) => write!(f, "{}", oid),
        }
    }
}
