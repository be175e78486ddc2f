#[cfg(test)]
mod selector_tests {
    use crate::bundle::structs::bundle::Bundle;
    use crate::cipher::structs::cipher_id_set::CipherIdSet;
    use crate::client_hello::client_hello::{
        EXTENSION_SERVER_NAME,
        EXTENSION_SIGNATURE_ALGORITHMS
    };
    use crate::slot::enums::slot::Slot;
    use std::sync::Arc;

    pub(super) const ECDHE_ECDSA_AES128_GCM: u16 = 0xc02b;
    pub(super) const ECDHE_ECDSA_AES256_GCM: u16 = 0xc02c;
    pub(super) const ECDHE_RSA_AES128_GCM: u16 = 0xc02f;
    pub(super) const TLS13_AES128_GCM: u16 = 0x1301;

    /// Every context is labelled with the slot it was compiled into.
    pub(super) fn bundle(default: Slot, others: &[Slot], ecdsa_ciphers: &[u16]) -> Bundle<Slot> {
        let default_context = Arc::new(default);
        let mut slots: [Option<Arc<Slot>>; Slot::COUNT] = Default::default();
        slots[default.index()] = Some(Arc::clone(&default_context));
        for slot in others {
            slots[slot.index()] = Some(Arc::new(*slot));
        }
        Bundle {
            slots,
            default_context,
            ecdsa_ciphers: ecdsa_ciphers.iter().copied().collect::<CipherIdSet>(),
        }
    }

    pub(super) fn suites(ids: &[u16]) -> Vec<u8> {
        ids.iter().flat_map(|id| id.to_be_bytes()).collect()
    }

    pub(super) fn signature_algorithms(pairs: &[(u8, u8)]) -> Vec<u8> {
        let mut data = ((pairs.len() * 2) as u16).to_be_bytes().to_vec();
        for (hash, signature) in pairs {
            data.extend_from_slice(&[*hash, *signature]);
        }
        data
    }

    /// Complete handshake message (header included).
    pub(super) fn hello(signature_algorithms: Option<Vec<u8>>, cipher_suites: Vec<u8>, server_name: bool) -> Vec<u8> {
        let mut extensions: Vec<(u16, Vec<u8>)> = Vec::new();
        if server_name {
            let mut data = vec![0x00, 0x0e, 0x00, 0x00, 0x0b];
            data.extend_from_slice(b"example.org");
            extensions.push((EXTENSION_SERVER_NAME, data));
        }
        if let Some(data) = signature_algorithms {
            extensions.push((EXTENSION_SIGNATURE_ALGORITHMS, data));
        }
        let mut body = vec![0x03, 0x03];
        body.extend_from_slice(&[0x5a; 32]);
        body.push(0);
        body.extend_from_slice(&(cipher_suites.len() as u16).to_be_bytes());
        body.extend_from_slice(&cipher_suites);
        body.extend_from_slice(&[1, 0]);
        let mut block = Vec::new();
        for (extension_type, data) in &extensions {
            block.extend_from_slice(&extension_type.to_be_bytes());
            block.extend_from_slice(&(data.len() as u16).to_be_bytes());
            block.extend_from_slice(data);
        }
        body.extend_from_slice(&(block.len() as u16).to_be_bytes());
        body.extend_from_slice(&block);
        let mut message = vec![1];
        message.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        message.extend_from_slice(&body);
        message
    }

    mod scenario_tests {
        use super::*;
        use crate::client_hello::enums::client_hello_error::ClientHelloError;
        use crate::client_hello::structs::client_hello_view::ClientHelloView;
        use crate::selector::enums::handshake_outcome::HandshakeOutcome;
        use crate::selector::enums::selection::Selection;
        use crate::selector::selector::{
            on_client_hello_bytes,
            select
        };

        fn run(bundle: &Bundle<Slot>, message: &[u8]) -> Result<Selection, ClientHelloError> {
            let view = ClientHelloView::from_handshake(message).unwrap();
            select(bundle, &view)
        }

        #[test]
        fn test_legacy_only_without_extensions_keeps_default() {
            let bundle = bundle(Slot::RsaLegacy, &[], &[]);
            let message = hello(None, suites(&[ECDHE_RSA_AES128_GCM]), false);
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaLegacy)));
            assert!(matches!(on_client_hello_bytes(&bundle, &message), HandshakeOutcome::UseDefault));
        }

        #[test]
        fn test_server_name_without_signature_algorithms_picks_rsa_sha256() {
            let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256], &[]);
            let message = hello(None, suites(&[ECDHE_RSA_AES128_GCM]), true);
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaSha256)));
            match on_client_hello_bytes(&bundle, &message) {
                HandshakeOutcome::Install { slot, context } => {
                    assert_eq!(slot, Slot::RsaSha256);
                    assert_eq!(**context, Slot::RsaSha256);
                }
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        #[test]
        fn test_no_server_name_falls_back_to_legacy() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::RsaLegacy], &[]);
            let message = hello(None, suites(&[ECDHE_RSA_AES128_GCM]), false);
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaLegacy)));
        }

        #[test]
        fn test_ecdsa_sha256_with_compatible_cipher() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[ECDHE_ECDSA_AES128_GCM]);
            let message = hello(
                Some(signature_algorithms(&[(4, 3), (4, 1)])),
                suites(&[ECDHE_ECDSA_AES128_GCM]),
                false,
            );
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::EcdsaSha256)));
        }

        #[test]
        fn test_ecdsa_skipped_without_ecdsa_cipher() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[ECDHE_ECDSA_AES128_GCM]);
            let message = hello(
                Some(signature_algorithms(&[(4, 3), (4, 1)])),
                suites(&[ECDHE_RSA_AES128_GCM]),
                false,
            );
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaSha256)));
            assert!(matches!(on_client_hello_bytes(&bundle, &message), HandshakeOutcome::UseDefault));
        }

        #[test]
        fn test_signature_algorithms_length_past_end_aborts() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[ECDHE_ECDSA_AES128_GCM]);
            let message = hello(Some(vec![0x00, 0x10, 4, 3]), suites(&[ECDHE_ECDSA_AES128_GCM]), true);
            assert!(run(&bundle, &message).is_err());
            match on_client_hello_bytes(&bundle, &message) {
                HandshakeOutcome::Abort(error) => assert_eq!(error.alert_description(), 50),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        #[test]
        fn test_malformed_signature_algorithms_never_fall_back() {
            let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256], &[]);
            for data in [vec![0x00, 0x00], vec![0x00, 0x03, 4, 1, 5], vec![0x00, 0x02, 4, 1, 0]] {
                let message = hello(Some(data), suites(&[ECDHE_RSA_AES128_GCM]), true);
                assert!(run(&bundle, &message).is_err());
            }
        }

        #[test]
        fn test_signature_algorithms_not_read_for_legacy_only_bundle() {
            let bundle = bundle(Slot::RsaLegacy, &[], &[]);
            let message = hello(Some(vec![0x00, 0x10]), suites(&[ECDHE_RSA_AES128_GCM]), false);
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaLegacy)));
        }

        #[test]
        fn test_no_rule_matched_uses_fallback() {
            let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256], &[]);
            let only_sha384 = Some(signature_algorithms(&[(5, 1)]));
            let with_sni = hello(only_sha384.clone(), suites(&[ECDHE_RSA_AES128_GCM]), true);
            let without_sni = hello(only_sha384, suites(&[ECDHE_RSA_AES128_GCM]), false);
            assert_eq!(run(&bundle, &with_sni), Ok(Selection::Slot(Slot::RsaSha256)));
            assert_eq!(run(&bundle, &without_sni), Ok(Selection::Slot(Slot::RsaLegacy)));
        }

        #[test]
        fn test_nothing_matches_without_legacy() {
            let bundle = bundle(Slot::RsaSha384, &[], &[]);
            let message = hello(Some(signature_algorithms(&[(4, 1)])), suites(&[ECDHE_RSA_AES128_GCM]), true);
            assert_eq!(run(&bundle, &message), Ok(Selection::UseDefault));
        }

        #[test]
        fn test_ecdsa_cipher_outside_allowed_set() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha384], &[ECDHE_ECDSA_AES256_GCM]);
            let message = hello(
                Some(signature_algorithms(&[(5, 3), (4, 1)])),
                suites(&[ECDHE_ECDSA_AES128_GCM, TLS13_AES128_GCM]),
                false,
            );
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaSha256)));
        }

        #[test]
        fn test_empty_ecdsa_cipher_set_disables_ecdsa() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[]);
            let message = hello(
                Some(signature_algorithms(&[(4, 3), (4, 1)])),
                suites(&[ECDHE_ECDSA_AES128_GCM]),
                false,
            );
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaSha256)));
        }

        #[test]
        fn test_truncated_cipher_list_aborts_during_scan() {
            let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[ECDHE_ECDSA_AES128_GCM]);
            let mut cipher_suites = suites(&[ECDHE_RSA_AES128_GCM]);
            cipher_suites.push(0xc0);
            let message = hello(Some(signature_algorithms(&[(4, 3), (4, 1)])), cipher_suites, false);
            assert_eq!(run(&bundle, &message), Err(ClientHelloError::TrailingCipherByte));
        }

        #[test]
        fn test_truncated_cipher_list_ignored_without_scan() {
            let bundle = bundle(Slot::RsaSha256, &[], &[]);
            let mut cipher_suites = suites(&[ECDHE_RSA_AES128_GCM]);
            cipher_suites.push(0xc0);
            let message = hello(Some(signature_algorithms(&[(4, 3), (4, 1)])), cipher_suites, false);
            assert_eq!(run(&bundle, &message), Ok(Selection::Slot(Slot::RsaSha256)));
        }

        #[test]
        fn test_unreadable_client_hello_aborts() {
            let bundle = bundle(Slot::RsaSha256, &[], &[]);
            let mut message = hello(None, suites(&[ECDHE_RSA_AES128_GCM]), false);
            message[0] = 2;
            assert!(on_client_hello_bytes(&bundle, &message).is_abort());
        }

        #[test]
        fn test_outcome_serving_context() {
            let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256], &[]);
            let message = hello(None, suites(&[ECDHE_RSA_AES128_GCM]), false);
            let outcome = on_client_hello_bytes(&bundle, &message);
            assert_eq!(**outcome.serving_context(&bundle).unwrap(), Slot::RsaLegacy);
        }
    }

    mod priority_tests {
        use super::*;
        use crate::client_hello::structs::client_hello_view::ClientHelloView;
        use crate::selector::enums::selection::Selection;
        use crate::selector::selector::select;

        const ALL_PAIRS: [(u8, u8); 6] = [(4, 1), (5, 1), (6, 1), (4, 3), (5, 3), (6, 3)];

        fn full_bundle() -> Bundle<Slot> {
            bundle(
                Slot::RsaLegacy,
                &[
                    Slot::RsaSha256,
                    Slot::RsaSha384,
                    Slot::RsaSha512,
                    Slot::EcdsaSha256,
                    Slot::EcdsaSha384,
                    Slot::EcdsaSha512,
                ],
                &[ECDHE_ECDSA_AES128_GCM, ECDHE_ECDSA_AES256_GCM],
            )
        }

        fn select_with(pairs: &[(u8, u8)], cipher_suites: &[u16]) -> Selection {
            let message = hello(Some(signature_algorithms(pairs)), suites(cipher_suites), true);
            let view = ClientHelloView::from_handshake(&message).unwrap();
            select(&full_bundle(), &view).unwrap()
        }

        #[test]
        fn test_everything_advertised_picks_ecdsa_sha512() {
            assert_eq!(select_with(&ALL_PAIRS, &[ECDHE_ECDSA_AES256_GCM]), Selection::Slot(Slot::EcdsaSha512));
            let mut reversed = ALL_PAIRS;
            reversed.reverse();
            assert_eq!(select_with(&reversed, &[ECDHE_ECDSA_AES256_GCM]), Selection::Slot(Slot::EcdsaSha512));
        }

        #[test]
        fn test_descending_order() {
            assert_eq!(select_with(&[(4, 3), (5, 3)], &[ECDHE_ECDSA_AES128_GCM]), Selection::Slot(Slot::EcdsaSha384));
            assert_eq!(select_with(&[(4, 3), (6, 1)], &[ECDHE_ECDSA_AES128_GCM]), Selection::Slot(Slot::EcdsaSha256));
            assert_eq!(select_with(&[(4, 3), (6, 1)], &[ECDHE_RSA_AES128_GCM]), Selection::Slot(Slot::RsaSha512));
            assert_eq!(select_with(&[(4, 1), (5, 1)], &[ECDHE_ECDSA_AES128_GCM]), Selection::Slot(Slot::RsaSha384));
            assert_eq!(select_with(&[(4, 1)], &[ECDHE_ECDSA_AES128_GCM]), Selection::Slot(Slot::RsaSha256));
        }

        #[test]
        fn test_untracked_pairs_are_ignored() {
            assert_eq!(select_with(&[(2, 1), (8, 7), (8, 4)], &[ECDHE_ECDSA_AES128_GCM]), Selection::Slot(Slot::RsaSha256));
        }
    }

    mod property_tests {
        use super::*;
        use crate::client_hello::structs::client_hello_view::ClientHelloView;
        use crate::selector::enums::selection::Selection;
        use crate::selector::selector::{
            on_client_hello_bytes,
            select
        };
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn select_is_idempotent(
                pairs in proptest::collection::vec((any::<u8>(), any::<u8>()), 0..16),
                cipher_suites in proptest::collection::vec(any::<u16>(), 0..16),
                server_name in any::<bool>(),
            ) {
                let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256, Slot::EcdsaSha384], &[ECDHE_ECDSA_AES128_GCM, ECDHE_ECDSA_AES256_GCM]);
                let message = hello(Some(signature_algorithms(&pairs)), suites(&cipher_suites), server_name);
                let view = ClientHelloView::from_handshake(&message).unwrap();
                prop_assert_eq!(select(&bundle, &view), select(&bundle, &view));
            }

            #[test]
            fn priority_ignores_advertised_order(
                pairs in Just(vec![(4u8, 1u8), (5, 1), (6, 1), (4, 3), (5, 3), (6, 3)]).prop_shuffle(),
            ) {
                let bundle = bundle(
                    Slot::RsaSha256,
                    &[Slot::RsaSha384, Slot::RsaSha512, Slot::EcdsaSha256, Slot::EcdsaSha384, Slot::EcdsaSha512],
                    &[ECDHE_ECDSA_AES128_GCM],
                );
                let message = hello(Some(signature_algorithms(&pairs)), suites(&[ECDHE_ECDSA_AES128_GCM]), false);
                let view = ClientHelloView::from_handshake(&message).unwrap();
                prop_assert_eq!(select(&bundle, &view), Ok(Selection::Slot(Slot::EcdsaSha512)));
            }

            #[test]
            fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                let bundle = bundle(Slot::RsaSha256, &[Slot::EcdsaSha256], &[ECDHE_ECDSA_AES128_GCM]);
                let _ = on_client_hello_bytes(&bundle, &bytes);
            }

            #[test]
            fn malformed_signature_algorithms_always_abort(
                declared in any::<u16>(),
                payload in proptest::collection::vec(any::<u8>(), 0..12),
            ) {
                let well_formed = declared as usize == payload.len() && !payload.is_empty() && payload.len() % 2 == 0;
                prop_assume!(!well_formed);
                let mut data = declared.to_be_bytes().to_vec();
                data.extend_from_slice(&payload);
                let bundle = bundle(Slot::RsaLegacy, &[Slot::RsaSha256], &[]);
                let message = hello(Some(data), suites(&[ECDHE_RSA_AES128_GCM]), true);
                let view = ClientHelloView::from_handshake(&message).unwrap();
                prop_assert!(select(&bundle, &view).is_err());
            }
        }
    }
}
