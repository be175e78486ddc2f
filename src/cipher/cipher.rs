use crate::cipher::structs::cipher_id_set::CipherIdSet;

/// TLS 1.2 cipher suites authenticated by an ECDSA certificate, sorted by id.
///
/// TLS 1.3 suites carry no authentication algorithm and never appear here.
pub const ECDSA_CIPHER_SUITES: &[(u16, &str)] = &[
    (0xc006, "TLS_ECDHE_ECDSA_WITH_NULL_SHA"),
    (0xc007, "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA"),
    (0xc008, "TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA"),
    (0xc009, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA"),
    (0xc00a, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA"),
    (0xc023, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256"),
    (0xc024, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384"),
    (0xc02b, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
    (0xc02c, "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
    (0xc048, "TLS_ECDHE_ECDSA_WITH_ARIA_128_CBC_SHA256"),
    (0xc049, "TLS_ECDHE_ECDSA_WITH_ARIA_256_CBC_SHA384"),
    (0xc05c, "TLS_ECDHE_ECDSA_WITH_ARIA_128_GCM_SHA256"),
    (0xc05d, "TLS_ECDHE_ECDSA_WITH_ARIA_256_GCM_SHA384"),
    (0xc072, "TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256"),
    (0xc073, "TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384"),
    (0xc086, "TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256"),
    (0xc087, "TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384"),
    (0xc0ac, "TLS_ECDHE_ECDSA_WITH_AES_128_CCM"),
    (0xc0ad, "TLS_ECDHE_ECDSA_WITH_AES_256_CCM"),
    (0xc0ae, "TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8"),
    (0xc0af, "TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8"),
    (0xcc14, "OLD_TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
    (0xcca9, "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
];

pub fn is_ecdsa_cipher_suite(id: u16) -> bool {
    ECDSA_CIPHER_SUITES
        .binary_search_by_key(&id, |(suite, _)| *suite)
        .is_ok()
}

pub fn ecdsa_cipher_suite_name(id: u16) -> Option<&'static str> {
    ECDSA_CIPHER_SUITES
        .binary_search_by_key(&id, |(suite, _)| *suite)
        .ok()
        .map(|index| ECDSA_CIPHER_SUITES[index].1)
}

/// Reduces a resolved cipher list to its ECDSA-keyed members.
pub fn ecdsa_cipher_set<I: IntoIterator<Item = u16>>(resolved: I) -> CipherIdSet {
    resolved
        .into_iter()
        .filter(|id| is_ecdsa_cipher_suite(*id))
        .collect()
}
