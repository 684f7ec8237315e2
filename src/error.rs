//! Error types for rig building

use std::path::PathBuf;

/// Errors produced while building a body mesh from a rig.
///
/// Config errors abort the whole build pass; geometry errors are scoped to a
/// single limb and the caller decides whether to skip the limb or abort.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    #[error("Config file unavailable: {path:?}")]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rig config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Ring {ring} has {found} points, expected {expected}")]
    RingSizeMismatch {
        ring: usize,
        expected: usize,
        found: usize,
    },

    #[error("Vertex count {count} exceeds the u16 index range")]
    TooManyVertices { count: usize },
}
