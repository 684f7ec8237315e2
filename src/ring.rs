//! Cross-section ring generation
//!
//! Every joint contributes one ring: an ordered closed polygon of points in
//! the joint node's local space. Rings come from explicit config vertices or
//! from a procedural circle, and their point order defines the triangle
//! winding of the final tube, so both paths keep a stable deterministic
//! order.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::config::{JointConfig, VertexDef};

/// Default ring radius when a joint has no explicit cross-section
pub const DEFAULT_RING_RADIUS: f32 = 0.05;

/// Default number of points in a procedural ring
pub const DEFAULT_RING_DIVISIONS: u32 = 8;

const MIN_DIVISIONS: u32 = 3;
const MAX_DIVISIONS: u32 = 256;

/// Generate a circular ring in the local XZ plane
///
/// Point `i` sits at angle `i * 360/divisions` degrees, starting at angle 0
/// on the +X axis and increasing toward +Z. The circle is centered on the
/// local origin; the owning node's transform places and orients it in the
/// world.
///
/// # Arguments
/// * `radius` - Circle radius (>= 0.0)
/// * `divisions` - Number of points (min 3, max 256)
pub fn generate_ring(radius: f32, divisions: u32) -> Vec<Vec3> {
    let radius = if radius < 0.0 {
        warn!("generate_ring: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };

    if !(MIN_DIVISIONS..=MAX_DIVISIONS).contains(&divisions) {
        warn!(
            "generate_ring: divisions {} outside {}..={}, clamping",
            divisions, MIN_DIVISIONS, MAX_DIVISIONS
        );
    }
    let divisions = divisions.clamp(MIN_DIVISIONS, MAX_DIVISIONS);

    (0..divisions)
        .map(|i| {
            let theta = (i as f32 / divisions as f32) * 2.0 * PI;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Build a ring from explicit config vertices
///
/// Each vertex is scaled by `scale`; input order is preserved because it
/// defines the eventual winding.
pub fn ring_from_vertices(vertices: &[VertexDef], scale: f32) -> Vec<Vec3> {
    vertices
        .iter()
        .map(|v| Vec3::new(v.x, v.y, v.z) * scale)
        .collect()
}

/// Compute the ring for one joint, selecting the policy by config content
pub fn joint_ring(config: &JointConfig) -> Vec<Vec3> {
    if config.vertices.is_empty() {
        generate_ring(config.radius, config.divisions)
    } else {
        ring_from_vertices(&config.vertices, config.scale)
    }
}
