//! Unit tests for signing key material

use crate::domain::entities::key_material::{Jwk, JwkSet, KeyMaterial};

#[test]
fn test_generated_key_has_rs256_jwk_view() {
    let key = KeyMaterial::generate().expect("key generation");
    let jwk = key.public_jwk();

    assert_eq!(jwk.kty, "RSA");
    assert_eq!(jwk.key_use, "sig");
    assert_eq!(jwk.alg, "RS256");
    assert_eq!(jwk.kid, key.kid());
    assert!(!jwk.n.is_empty());
    // 65537 encodes as "AQAB" in base64url
    assert_eq!(jwk.e, "AQAB");
}

#[test]
fn test_generated_keys_have_unique_kids() {
    let a = KeyMaterial::generate().expect("key generation");
    let b = KeyMaterial::generate().expect("key generation");
    assert_ne!(a.kid(), b.kid());
}

#[test]
fn test_debug_output_never_leaks_key_material() {
    let key = KeyMaterial::generate().expect("key generation");
    let debug = format!("{key:?}");

    assert!(debug.contains(key.kid()));
    assert!(!debug.contains(&key.public_jwk().n));
}

#[test]
fn test_jwk_set_serializes_use_field() {
    let jwks = JwkSet {
        keys: vec![Jwk {
            kty: "RSA".to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            kid: "k1".to_string(),
            n: "modulus".to_string(),
            e: "AQAB".to_string(),
        }],
    };

    let json = serde_json::to_string(&jwks).expect("serialize");
    assert!(json.contains("\"use\":\"sig\""));

    let decoded: JwkSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded.keys[0].kid, "k1");
}
