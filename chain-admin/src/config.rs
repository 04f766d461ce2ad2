//! Admin chain configuration

use crate::constants::admin_chain_id;
use crate::{AdminError, AdminResult};
use chain_core::Hash;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on the per-block entry pre-allocation
pub const MAX_ENTRY_CAPACITY_HINT: usize = 65_536;

/// How the header's `body_size` is treated when decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySizePolicy {
    /// Accept whatever the header declares
    #[default]
    Advisory,
    /// Reject blocks whose declared body size differs from the decoded entries
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminChainConfig {
    /// Chain id stamped into every block header
    pub chain_id: Hash,
    /// Chain name segments
    pub name: Vec<String>,
    /// Initial entry capacity for each new block
    pub entry_capacity_hint: usize,
    /// Body size handling on decode
    pub body_size_policy: BodySizePolicy,
}

impl Default for AdminChainConfig {
    fn default() -> Self {
        Self {
            chain_id: admin_chain_id(),
            name: Vec::new(),
            entry_capacity_hint: 16,
            body_size_policy: BodySizePolicy::Advisory,
        }
    }
}

impl AdminChainConfig {
    /// Create a new admin chain configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set chain id
    pub fn with_chain_id(mut self, chain_id: Hash) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set chain name segments
    pub fn with_name(mut self, name: Vec<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_entry_capacity_hint(mut self, hint: usize) -> Self {
        self.entry_capacity_hint = hint;
        self
    }

    pub fn with_body_size_policy(mut self, policy: BodySizePolicy) -> Self {
        self.body_size_policy = policy;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> AdminResult<()> {
        if self.chain_id.is_zero() {
            return Err(AdminError::Config("chain_id must not be zero".to_string()));
        }

        if self.entry_capacity_hint > MAX_ENTRY_CAPACITY_HINT {
            return Err(AdminError::Config(format!(
                "entry_capacity_hint {} exceeds {}",
                self.entry_capacity_hint, MAX_ENTRY_CAPACITY_HINT
            )));
        }

        if self.name.iter().any(|segment| segment.is_empty()) {
            return Err(AdminError::Config(
                "chain name segments must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Load configuration from TOML
    pub fn from_toml(toml_str: &str) -> AdminResult<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| AdminError::Config(format!("Failed to parse admin chain config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> AdminResult<String> {
        toml::to_string(self).map_err(|e| {
            AdminError::Config(format!("Failed to serialize admin chain config: {}", e))
        })
    }

    /// Read and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> AdminResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Name segments as raw bytes
    pub fn name_bytes(&self) -> Vec<Vec<u8>> {
        self.name.iter().map(|s| s.as_bytes().to_vec()).collect()
    }
}
