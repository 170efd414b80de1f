//! The async facade behaves exactly like the synchronous engine

use k1ecies::prelude::*;
use k1ecies_tests::backends::{Primitive, TestBackend};
use k1ecies_tests::vectors::{self, scalar};

#[tokio::test]
async fn test_async_get_public() {
    let ecies = AsyncEcies::new();
    let pk = ecies.get_public(scalar(1)).await.unwrap();
    assert_eq!(hex::encode(pk.as_bytes()), vectors::GENERATOR);
}

#[tokio::test]
async fn test_async_sign_verify() {
    let ecies = AsyncEcies::new();
    let keypair = ecies.generate_keypair().await.unwrap();
    let sig = ecies.sign(keypair.private_key(), [7u8; 32]).await.unwrap();
    ecies.verify(keypair.public_key(), [7u8; 32], &sig).await.unwrap();

    let err = ecies.verify(keypair.public_key(), [8u8; 32], &sig).await.unwrap_err();
    assert!(matches!(err, Error::BadSignature { .. }));
}

#[tokio::test]
async fn test_async_encrypt_decrypt() {
    let ecies = AsyncEcies::new();
    let keypair = ecies.generate_keypair().await.unwrap();
    let options = EncryptOptions::new().with_iv(Iv::new([9u8; 16]));

    let envelope = ecies
        .encrypt_with(keypair.public_key(), b"deferred", &options)
        .await
        .unwrap();
    assert_eq!(envelope.iv(), &Iv::new([9u8; 16]));
    assert_eq!(ecies.decrypt(keypair.private_key(), &envelope).await.unwrap(), b"deferred");
}

#[tokio::test]
async fn test_async_derive_matches_sync() {
    let ecies = AsyncEcies::new();
    let a = ecies.derive(scalar(1), vectors::unhex(vectors::TWO_G)).await.unwrap();
    let b = ecies.blocking().derive(scalar(1), vectors::unhex(vectors::TWO_G)).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_async_failures_resolve_to_errors() {
    let ecies = AsyncEcies::with_backend(TestBackend::new().without(Primitive::Mac));
    let pk = ecies.get_public(scalar(4)).await.unwrap();
    assert!(matches!(
        ecies.encrypt(pk, b"m").await,
        Err(Error::PrimitiveUnavailable { primitive: "HMAC-SHA256", .. })
    ));
    assert!(ecies.get_public([0u8; 31]).await.unwrap_err().is_invalid_input());
}

#[tokio::test]
async fn test_concurrent_callers_share_an_engine() {
    let ecies = std::sync::Arc::new(AsyncEcies::new());
    let keypair = ecies.generate_keypair().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let ecies = ecies.clone();
        let pk = *keypair.public_key();
        handles.push(tokio::spawn(async move {
            ecies.encrypt(pk, [i; 24]).await
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let envelope = handle.await.unwrap().unwrap();
        assert_eq!(ecies.decrypt(keypair.private_key(), &envelope).await.unwrap(), vec![i as u8; 24]);
    }
}
