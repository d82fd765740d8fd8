use thiserror::Error;

use crate::tag::Tag;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid tag key: {0:?}")]
    InvalidTag(String),
    #[error("unknown VR: {0:?}")]
    UnknownVr(String),
    #[error("{0} is not a sequence")]
    NotASequence(Tag),
    #[error("no free private creator slot in group {0:04X}")]
    PrivateBlocksExhausted(u16),
    #[error("invalid document JSON: {0}")]
    Json(String),
}
