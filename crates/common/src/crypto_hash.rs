use anyhow::{anyhow, Result};
use rand::fill;
use serde::{Deserialize, Serialize};

/// 32-byte opaque hash, hex-encoded on the wire. Used both as the identity
/// namespace for stored records and as generated record identifiers.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CryptoHash {
    #[serde(with = "hex::serde")]
    hash: [u8; 32],
}

impl CryptoHash {
    pub fn new(hash: [u8; 32]) -> Self {
        Self { hash }
    }

    pub fn random() -> Self {
        let mut arr = [0u8; 32];
        fill(&mut arr[..]);
        Self::new(arr)
    }

    pub fn hash(&self) -> &[u8; 32] {
        &self.hash
    }

    pub fn to_hex_string(&self) -> String {
        hex::encode(self.hash)
    }

    pub fn from_hex_string(s: &str) -> Result<Self> {
        let decoded = hex::decode(s)?;
        let arr: [u8; 32] = decoded
            .try_into()
            .map_err(|v: Vec<u8>| anyhow!("expected 32 bytes, got {}", v.len()))?;
        Ok(Self::new(arr))
    }
}

impl std::str::FromStr for CryptoHash {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_string(s)
    }
}

impl std::fmt::Display for CryptoHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let id = CryptoHash::random();
        let parsed = CryptoHash::from_hex_string(&id.to_hex_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_short_hex() {
        assert!(CryptoHash::from_hex_string("deadbeef").is_err());
    }
}
