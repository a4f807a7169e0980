//! Core types for the frame graph

use thiserror::Error;

/// Frame identifier within one tree.
///
/// Ids index the owning tree's slot vector; they are never reused and
/// never valid across trees.
pub type FrameId = u32;

/// Cache-generation sentinel meaning "never computed".
///
/// The tree's generation counter starts at 0 and is bumped by 1, so a
/// collision with a live generation takes a full u64 wraparound; if that
/// ever happened the cost would be one wasted recomputation, not a wrong
/// transform, because a stale cache is recomputed from scratch.
pub(crate) const GENERATION_NEVER: u64 = u64::MAX;

/// Frame graph error types.
///
/// Both variants are programming errors in calling code. They fire
/// before any output is written, so a failed operation never leaves a
/// partial numeric result behind. Names are carried for display only;
/// the checks themselves compare handles, never names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frames '{from}' and '{to}' do not share a root frame")]
    DifferentRoots { from: String, to: String },

    #[error("reference frame mismatch: expected '{expected}', got '{actual}'")]
    FrameMismatch { expected: String, actual: String },
}

/// Result type for frame graph operations
pub type FrameResult<T> = Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrameError::DifferentRoots {
            from: "camera".to_string(),
            to: "map".to_string(),
        };
        assert!(err.to_string().contains("camera"));
        assert!(err.to_string().contains("map"));

        let err = FrameError::FrameMismatch {
            expected: "base".to_string(),
            actual: "tool".to_string(),
        };
        assert!(err.to_string().contains("mismatch"));
    }
}
