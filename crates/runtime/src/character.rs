use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use personachat_common::{get_current_timestamp_ms, CryptoHash};
use personachat_database::UserRecord;

/// Persona sheet for a role-played character. Only `name` is required;
/// every other field is free-form text and absent when left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specials: Option<String>,
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("character name required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfigRecord {
    #[serde(rename = "_id")]
    pub id: CryptoHash,
    pub owner: CryptoHash,
    #[serde(flatten)]
    pub config: CharacterConfig,
    pub timestamp: i64,
}

impl CharacterConfigRecord {
    pub fn new(owner: CryptoHash, config: CharacterConfig) -> Self {
        Self {
            id: CryptoHash::random(),
            owner,
            config,
            timestamp: get_current_timestamp_ms(),
        }
    }
}

impl UserRecord for CharacterConfigRecord {
    const COLLECTION_NAME: &'static str = "configs";

    fn id(&self) -> &CryptoHash {
        &self.id
    }

    fn owner(&self) -> &CryptoHash {
        &self.owner
    }
}
