//! Admin chain height tracking

use crate::block::AdminBlock;
use crate::config::{AdminChainConfig, BodySizePolicy};
use crate::{AdminError, AdminResult};
use chain_core::{BlockHeight, Hash};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Default entry pre-allocation for chains built without a config
const DEFAULT_ENTRY_CAPACITY: usize = 16;

/// Administrative chain.
///
/// Owns the height that the next block will receive. The height is read,
/// checked against the parent, and advanced under a single lock, so
/// concurrent callers always get distinct consecutive heights.
#[derive(Debug)]
pub struct AdminChain {
    chain_id: Hash,
    name: Vec<Vec<u8>>,
    entry_capacity_hint: usize,
    body_size_policy: BodySizePolicy,
    next_height: Mutex<BlockHeight>,
}

impl AdminChain {
    /// Create a chain whose next block is the origin block
    pub fn new(chain_id: Hash) -> Self {
        Self::resume(chain_id, 0)
    }

    /// Create a chain that continues at `next_height`
    pub fn resume(chain_id: Hash, next_height: BlockHeight) -> Self {
        Self {
            chain_id,
            name: Vec::new(),
            entry_capacity_hint: DEFAULT_ENTRY_CAPACITY,
            body_size_policy: BodySizePolicy::Advisory,
            next_height: Mutex::new(next_height),
        }
    }

    /// Create a fresh chain from validated configuration
    pub fn from_config(config: &AdminChainConfig) -> AdminResult<Self> {
        config.validate()?;
        info!(chain_id = %config.chain_id, "admin chain initialized");
        Ok(Self::new(config.chain_id)
            .with_name(config.name_bytes())
            .with_entry_capacity_hint(config.entry_capacity_hint)
            .with_body_size_policy(config.body_size_policy))
    }

    /// Set chain name segments
    pub fn with_name(mut self, name: Vec<Vec<u8>>) -> Self {
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

    pub fn chain_id(&self) -> Hash {
        self.chain_id
    }

    pub fn name(&self) -> &[Vec<u8>] {
        &self.name
    }

    pub fn body_size_policy(&self) -> BodySizePolicy {
        self.body_size_policy
    }

    /// Height the next block will be assigned
    pub fn next_height(&self) -> BlockHeight {
        *self.next_height.lock()
    }

    /// Create the next empty block and advance the height.
    ///
    /// The height only moves when the block was created; a linkage error or
    /// an exhausted counter leaves the chain untouched.
    pub fn begin_next_block(&self, prev: Option<&mut AdminBlock>) -> AdminResult<AdminBlock> {
        let mut next_height = self.next_height.lock();
        let height = *next_height;
        let following = height.checked_add(1).ok_or(AdminError::HeightOverflow)?;

        let block = AdminBlock::link(self.chain_id, height, prev, self.entry_capacity_hint)?;
        *next_height = following;

        debug!(height, next_height = following, "admin chain advanced");
        Ok(block)
    }

    /// Decode a block received for this chain under its body size policy
    pub fn decode_block(&self, data: &[u8]) -> AdminResult<AdminBlock> {
        AdminBlock::from_bytes_with_policy(data, self.body_size_policy)
    }
}
