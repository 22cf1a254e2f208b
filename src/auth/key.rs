//! Private-key loading.
//!
//! The Aplos UI hands out API keys as a file of base64 text which
//! decodes to a DER-encoded PKCS8 structure wrapping an RSA private
//! key. Both that on-disk form and the raw DER bytes are supported.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;

use crate::{Error, Result};

/// Parse PKCS8 DER bytes into an RSA private key.
///
/// Fails with [`Error::Key`] if the bytes are not a PKCS8 structure or
/// if the wrapped key is of any type other than RSA; other asymmetric
/// key types are rejected, not silently accepted.
pub fn private_key_from_der(der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| Error::Key(format!("not a PKCS8 RSA private key: {e}")))
}

/// Load a base64-encoded, PKCS8-formatted RSA key file from disk.
///
/// This is the format returned by the Aplos UI when creating and
/// downloading an API key. The whole file is read into memory; key
/// files are small and fixed-size, so streaming buys nothing.
///
/// Fails with [`Error::Io`] if the file cannot be read,
/// [`Error::Decode`] if its contents are not valid base64, and
/// [`Error::Key`] if the decoded bytes are not a PKCS8 RSA key.
pub fn private_key_from_file(path: impl AsRef<Path>) -> Result<RsaPrivateKey> {
    let encoded = fs::read(path)?;
    let der = BASE64
        .decode(encoded.trim_ascii())
        .map_err(|e| Error::Decode(format!("key file is not valid base64: {e}")))?;
    private_key_from_der(&der)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;

    // RFC 8410 example key: PKCS8 with an Ed25519 algorithm identifier.
    const ED25519_PKCS8: [u8; 48] = [
        0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22,
        0x04, 0x20, 0xd4, 0xee, 0x72, 0xdb, 0xf9, 0x13, 0x58, 0x4a, 0xd5, 0xb6, 0xd8, 0xf1,
        0xf7, 0x69, 0xf8, 0xad, 0x3a, 0xfe, 0x7c, 0x28, 0xcb, 0xf1, 0xd4, 0xfb, 0xe0, 0x97,
        0xa8, 0x8f, 0x44, 0x75, 0x58, 0x42,
    ];

    fn generate_key() -> RsaPrivateKey {
        RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("key generation")
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("aplos-key-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn round_trips_generated_key() {
        let key = generate_key();
        let der = key.to_pkcs8_der().unwrap();

        let loaded = private_key_from_der(der.as_bytes()).unwrap();
        assert_eq!(loaded, key);
    }

    #[test]
    fn rejects_non_rsa_key() {
        let err = private_key_from_der(&ED25519_PKCS8).unwrap_err();
        assert!(matches!(err, Error::Key(_)), "got {err:?}");
    }

    #[test]
    fn rejects_malformed_der() {
        let err = private_key_from_der(b"garbage").unwrap_err();
        assert!(matches!(err, Error::Key(_)));
    }

    #[test]
    fn loads_key_file() {
        let key = generate_key();
        let der = key.to_pkcs8_der().unwrap();
        // A trailing newline is typical of downloaded key files.
        let contents = format!("{}\n", BASE64.encode(der.as_bytes()));

        let path = temp_path("valid");
        fs::write(&path, contents).unwrap();
        let loaded = private_key_from_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(loaded.unwrap(), key);
    }

    #[test]
    fn bad_base64_file_is_decode_error() {
        let path = temp_path("bad-b64");
        fs::write(&path, "this is *not* base64").unwrap();
        let err = private_key_from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = private_key_from_file(temp_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
