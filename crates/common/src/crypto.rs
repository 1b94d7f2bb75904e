use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::fill;
use xsalsa20poly1305::aead::{Aead, KeyInit};
use xsalsa20poly1305::{Key, Nonce, XSalsa20Poly1305};

use crate::crypto_hash::CryptoHash;

const NONCE_SIZE: usize = 24;

pub fn blake3_hash(data: &[u8]) -> CryptoHash {
    CryptoHash::new(*blake3::hash(data).as_bytes())
}

/// Symmetric token sealing: the shared salt is hashed into the cipher key,
/// the nonce is prepended to the ciphertext, the whole thing base64-encoded.
pub fn encrypt(plaintext: &str, salt: &str) -> Result<String> {
    let key = blake3_hash(salt.as_bytes());
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.hash()));

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    fill(&mut nonce_bytes[..]);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| anyhow!("encrypt failed: {}", e))?;

    let mut sealed = nonce_bytes.to_vec();
    sealed.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(sealed))
}

pub fn decrypt(token: &str, salt: &str) -> Result<String> {
    let sealed = STANDARD.decode(token)?;
    if sealed.len() <= NONCE_SIZE {
        return Err(anyhow!("token too short"));
    }

    let key = blake3_hash(salt.as_bytes());
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.hash()));

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| anyhow!("decrypt failed: {}", e))?;

    Ok(String::from_utf8(plaintext)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_and_open() {
        let token = encrypt("{\"user_id\":\"u1\"}", "salt").unwrap();
        let opened = decrypt(&token, "salt").unwrap();
        assert_eq!(opened, "{\"user_id\":\"u1\"}");
    }

    #[test]
    fn wrong_salt_fails() {
        let token = encrypt("payload", "salt-a").unwrap();
        assert!(decrypt(&token, "salt-b").is_err());
    }

    #[test]
    fn garbage_token_fails() {
        assert!(decrypt("not-base64!!", "salt").is_err());
        assert!(decrypt(&STANDARD.encode([0u8; 8]), "salt").is_err());
    }
}
