//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `WhError` via `From` impls, or keep them separate.  Conditions the
//! simulation treats as normal outcomes — an unreachable path, a blocked
//! move, a density shortfall — are deliberately *not* errors; they are
//! signaled through empty paths and boolean returns.

use thiserror::Error;

use crate::{AgentId, ZoneId};

/// The top-level error type for `wh-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WhError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("drop zone {0} not found")]
    ZoneNotFound(ZoneId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wh-*` crates.
pub type WhResult<T> = Result<T, WhError>;
