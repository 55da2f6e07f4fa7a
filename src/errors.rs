//! Domain-level errors for pattern operations

use thiserror::Error;

/// Failures raised by tree and registry operations.
///
/// Both "not found" conditions are surfaced to the caller; nothing is
/// silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("child not found in branch")]
    ChildNotFound,

    #[error("observer not registered: {0}")]
    ObserverNotFound(String),

    #[error("leaf nodes cannot hold children")]
    NotComposite,

    #[error("cycle detected: node cannot be added below itself")]
    CycleDetected,

    #[error("invalid state range: {start}..{end}")]
    InvalidStateRange { start: u32, end: u32 },
}

pub type PatternResult<T> = Result<T, PatternError>;
