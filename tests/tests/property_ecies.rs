//! Property-based tests for the ECIES and ECDSA operations

use k1ecies::prelude::*;
use proptest::prelude::*;

/// Random bytes the curve accepts as a private key
fn private_key() -> impl Strategy<Value = PrivateKey> {
    any::<[u8; 32]>()
        .prop_filter("valid secp256k1 scalar", |bytes| Ecies::new().get_public(bytes).is_ok())
        .prop_map(PrivateKey::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ecies_roundtrip(
        recipient in private_key(),
        ephemeral in private_key(),
        iv in any::<[u8; 16]>(),
        message in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let ecies = Ecies::new();
        let pk = ecies.get_public(&recipient).unwrap();
        let options = EncryptOptions::new()
            .with_ephem_private_key(ephemeral)
            .with_iv(Iv::new(iv));

        let envelope = ecies.encrypt_with(pk, &message, &options).unwrap();
        prop_assert_eq!(envelope.ciphertext().len(), (message.len() / 16 + 1) * 16);
        prop_assert_eq!(ecies.decrypt(&recipient, &envelope).unwrap(), message);
    }

    #[test]
    fn ecdh_is_symmetric(a in private_key(), b in private_key()) {
        let ecies = Ecies::new();
        let pa = ecies.get_public(&a).unwrap();
        let pb = ecies.get_public(&b).unwrap();

        let ab = ecies.derive(&a, pb).unwrap();
        let ba = ecies.derive(&b, pa).unwrap();
        prop_assert_eq!(&ab, &ba);
        prop_assert!(!ab.is_empty() && ab.len() <= 32);
        prop_assert_eq!(ecies.derive(&a, pb).unwrap(), ab);
    }

    #[test]
    fn sign_then_verify(
        sk in private_key(),
        message in prop::collection::vec(any::<u8>(), 1..=32)
    ) {
        let ecies = Ecies::new();
        let pk = ecies.get_public(&sk).unwrap();
        let sig = ecies.sign(&sk, &message).unwrap();
        prop_assert!(ecies.verify(pk, &message, &sig).is_ok());
    }

    #[test]
    fn flipped_ciphertext_bit_is_rejected(
        recipient in private_key(),
        message in prop::collection::vec(any::<u8>(), 0..=64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let ecies = Ecies::new();
        let pk = ecies.get_public(&recipient).unwrap();
        let envelope = ecies.encrypt(pk, &message).unwrap();

        let mut ciphertext = envelope.ciphertext().to_vec();
        let i = position.index(ciphertext.len());
        ciphertext[i] ^= 1 << bit;
        let forged = Envelope::from_parts(
            envelope.iv(),
            envelope.ephem_public_key(),
            ciphertext,
            envelope.mac(),
        ).unwrap();

        let is_bad_mac = matches!(ecies.decrypt(&recipient, &forged), Err(Error::BadMac { .. }));
        prop_assert!(is_bad_mac);
    }
}
