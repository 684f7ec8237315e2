//! Rig configuration parsing
//!
//! Parses the JSON limb document that declares which skeleton nodes
//! participate in the body mesh and how their cross-sections are shaped.
//!
//! A joint entry is either a bare node name (all ring defaults) or an object
//! carrying explicit cross-section data:
//!
//! ```json
//! {
//!   "limbs": [
//!     { "name": "left_arm", "joints": ["shoulder_l", "elbow_l", "wrist_l"] },
//!     { "name": "torso", "joints": [
//!       { "name": "hips", "scale": 1.5, "vertices": [
//!         { "x": 0.1, "y": 0.0, "z": 0.08 },
//!         { "x": -0.1, "y": 0.0, "z": 0.08 },
//!         { "x": -0.1, "y": 0.0, "z": -0.08 },
//!         { "x": 0.1, "y": 0.0, "z": -0.08 }
//!       ] }
//!     ] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::RigError;
use crate::ring::{DEFAULT_RING_DIVISIONS, DEFAULT_RING_RADIUS};

/// Root rig config structure
#[derive(Debug, Clone, Deserialize)]
pub struct RigConfig {
    #[serde(default)]
    pub limbs: Vec<LimbConfig>,
}

/// One limb: a label plus the ordered joints whose rings form its tube
#[derive(Debug, Clone, Deserialize)]
pub struct LimbConfig {
    pub name: String,
    #[serde(default)]
    pub joints: Vec<JointEntry>,
}

/// A joint reference in a limb, either by name alone or with ring data
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JointEntry {
    Name(String),
    Joint(JointConfig),
}

impl JointEntry {
    /// Node name this entry binds to
    pub fn name(&self) -> &str {
        match self {
            JointEntry::Name(name) => name,
            JointEntry::Joint(joint) => &joint.name,
        }
    }

    /// Normalize to a full `JointConfig`, filling defaults for bare names
    pub fn joint_config(&self) -> JointConfig {
        match self {
            JointEntry::Name(name) => JointConfig {
                name: name.clone(),
                scale: default_scale(),
                vertices: Vec::new(),
                radius: default_radius(),
                divisions: default_divisions(),
            },
            JointEntry::Joint(joint) => joint.clone(),
        }
    }
}

/// Per-joint cross-section settings
///
/// When `vertices` is non-empty the ring is taken verbatim from it (scaled by
/// `scale`, order preserved); otherwise a circle of `radius` with `divisions`
/// points is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct JointConfig {
    pub name: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub vertices: Vec<VertexDef>,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_divisions")]
    pub divisions: u32,
}

/// Config-side 3D point
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VertexDef {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

fn default_scale() -> f32 {
    1.0
}

fn default_radius() -> f32 {
    DEFAULT_RING_RADIUS
}

fn default_divisions() -> u32 {
    DEFAULT_RING_DIVISIONS
}

/// Load and parse a rig config from a JSON file
///
/// A missing or unreadable file is a hard error for the whole build pass, as
/// is a document that fails to parse.
pub fn load_rig_config(path: &Path) -> Result<RigConfig, RigError> {
    let text = fs::read_to_string(path).map_err(|source| RigError::ConfigUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text)?;
    Ok(config)
}
