//! Private blocks: element ranges reserved by a named owner.

use tracing::debug;

use crate::document::{DatasetId, Document};
use crate::error::CoreError;
use crate::tag::{Tag, PRIVATE_CREATOR_SLOTS};
use crate::value::Value;
use crate::vr::Vr;

/// A reserved block `(gggg,bb00)`..`(gggg,bbFF)` whose anchor is `(gggg,00bb)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrivateBlock {
    pub group: u16,
    pub block: u8,
}

impl PrivateBlock {
    /// The creator element holding the owner string.
    pub fn anchor(&self) -> Tag {
        Tag::new(self.group, u16::from(self.block))
    }

    /// The concrete tag of `offset` within this block.
    pub fn tag(&self, offset: u8) -> Tag {
        Tag::new(self.group, (u16::from(self.block) << 8) | u16::from(offset))
    }
}

/// Owner strings are stored space-padded to even length; compare without it.
pub fn owner_matches(stored: &str, owner: &str) -> bool {
    stored.trim_end_matches(' ') == owner.trim_end_matches(' ')
}

impl Document {
    /// Find the block reserved for `owner` in `ds` itself.
    pub fn private_block(&self, ds: DatasetId, group: u16, owner: &str) -> Option<PrivateBlock> {
        PRIVATE_CREATOR_SLOTS.into_iter().find_map(|slot| {
            let element = self.get(ds, Tag::new(group, slot))?;
            let stored = element.value.as_str()?;
            owner_matches(stored, owner).then(|| PrivateBlock { group, block: slot as u8 })
        })
    }

    /// Find the block for `owner` in `ds`, then in each enclosing dataset
    /// outward to the root.
    pub fn find_private_block(
        &self,
        ds: DatasetId,
        group: u16,
        owner: &str,
    ) -> Option<PrivateBlock> {
        let mut cursor = Some(ds);
        while let Some(id) = cursor {
            if let Some(block) = self.private_block(id, group, owner) {
                if id != ds {
                    debug!(group, owner, "private block found in enclosing dataset");
                }
                return Some(block);
            }
            cursor = self.parent(id);
        }
        None
    }

    /// Reserve the first free creator slot of `group` in `ds` for `owner`.
    pub fn create_private_block(
        &mut self,
        ds: DatasetId,
        group: u16,
        owner: &str,
    ) -> Result<PrivateBlock, CoreError> {
        let slot = PRIVATE_CREATOR_SLOTS
            .into_iter()
            .find(|&slot| !self.contains(ds, Tag::new(group, slot)))
            .ok_or(CoreError::PrivateBlocksExhausted(group))?;
        let block = PrivateBlock { group, block: slot as u8 };
        self.insert(ds, block.anchor(), Vr::LO, Value::text(owner));
        debug!(anchor = %block.anchor(), owner, "created private block");
        Ok(block)
    }
}
