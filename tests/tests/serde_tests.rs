//! Serde encoding of envelopes and keys

use k1ecies::prelude::*;
use k1ecies_tests::vectors::scalar;

#[test]
fn test_envelope_json_round_trip() {
    let ecies = Ecies::new();
    let pk = ecies.get_public(scalar(3)).unwrap();
    let envelope = ecies.encrypt(pk, b"on the wire").unwrap();

    let json = serde_json::to_string(&envelope).unwrap();
    assert!(json.contains("\"ephemPublicKey\""));
    let decoded: Envelope = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, envelope);
    assert_eq!(ecies.decrypt(scalar(3), &decoded).unwrap(), b"on the wire");
}

#[test]
fn test_deserialization_enforces_lengths() {
    let ecies = Ecies::new();
    let pk = ecies.get_public(scalar(3)).unwrap();

    let mut value = serde_json::to_value(pk).unwrap();
    value.as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<PublicKey>(value).is_err());

    let envelope = ecies.encrypt(pk, b"x").unwrap();
    let mut value = serde_json::to_value(&envelope).unwrap();
    value["mac"].as_array_mut().unwrap().push(0.into());
    assert!(serde_json::from_value::<Envelope>(value).is_err());
}
