//! Signing key material for RS256 token signing and verification.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// RSA modulus size in bits for generated signing keys
pub const RSA_KEY_BITS: usize = 2048;

/// A single public key entry in the JWKS discovery document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type, always "RSA"
    pub kty: String,

    /// Key use, always "sig"
    #[serde(rename = "use")]
    pub key_use: String,

    /// Signing algorithm, always "RS256"
    pub alg: String,

    /// Unique key identifier
    pub kid: String,

    /// RSA modulus, base64url without padding
    pub n: String,

    /// RSA public exponent, base64url without padding
    pub e: String,
}

/// The JWKS discovery document: current public keys, no private material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

/// An RSA signing key pair identified by a unique key id
///
/// The private half exists only for locally generated keys and is never
/// exposed outside this type; callers get the `EncodingKey`/`DecodingKey`
/// views and the public-only [`Jwk`].
#[derive(Clone)]
pub struct KeyMaterial {
    kid: String,
    algorithm: Algorithm,
    created_at: DateTime<Utc>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    public_jwk: Jwk,
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("kid", &self.kid)
            .field("algorithm", &self.algorithm)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl KeyMaterial {
    /// Generates a fresh RSA-2048 key pair with a unique key id
    ///
    /// # Returns
    ///
    /// * `Ok(KeyMaterial)` - New key material ready for signing
    /// * `Err(TokenError::KeyGenerationFailed)` - RSA generation or encoding failed
    pub fn generate() -> Result<Self, TokenError> {
        let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), RSA_KEY_BITS)
            .map_err(|_| TokenError::KeyGenerationFailed)?;
        let public_key = private_key.to_public_key();

        let private_der = private_key
            .to_pkcs1_der()
            .map_err(|_| TokenError::KeyGenerationFailed)?;
        let encoding_key = EncodingKey::from_rsa_der(private_der.as_bytes());

        let n = public_key.n().to_bytes_be();
        let e = public_key.e().to_bytes_be();
        let decoding_key = DecodingKey::from_rsa_raw_components(&n, &e);

        let kid = Uuid::new_v4().to_string();
        let public_jwk = Jwk {
            kty: "RSA".to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            kid: kid.clone(),
            n: URL_SAFE_NO_PAD.encode(n),
            e: URL_SAFE_NO_PAD.encode(e),
        };

        Ok(Self {
            kid,
            algorithm: Algorithm::RS256,
            created_at: Utc::now(),
            encoding_key,
            decoding_key,
            public_jwk,
        })
    }

    /// Returns the unique key identifier
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// Returns the signing algorithm for this key
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns when this key was generated
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the private key view used for signing
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the public key view used for verification
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the public-only JWK view of this key
    pub fn public_jwk(&self) -> &Jwk {
        &self.public_jwk
    }
}
