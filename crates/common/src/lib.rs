mod client;
mod crypto;
mod crypto_hash;
mod env;

pub use client::ModuleClient;
pub use crypto::{blake3_hash, decrypt, encrypt};
pub use crypto_hash::CryptoHash;
pub use env::EnvVars;

pub fn get_current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs() as i64
}

/// Millisecond resolution for record timestamps. Latest-wins reads sort on
/// these, so second resolution would tie for saves within the same second.
pub fn get_current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
