//! Coordinate space conversion
//!
//! Ring points are generated in their owning node's local space. Before
//! triangulation every point goes local → world via the node's transform,
//! then world → mesh-local via the inverse of the transform of the object
//! that owns the combined mesh. Skipping the world-space step is wrong
//! whenever the nodes and the mesh owner are not colocated and unrotated
//! relative to each other.

use glam::{Affine3A, Quat, Vec3};

/// World-space TRS pose of a skeleton node or the mesh owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Pose at `position` with no rotation and unit scale
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Affine matrix mapping local space to world space
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Map a local-space point to world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.to_affine().transform_point3(point)
    }

    /// Map a world-space point into this transform's local space
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        self.to_affine().inverse().transform_point3(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Convert a node-local ring into the mesh owner's local space
///
/// Applies the two-step conversion to every point: node local → world, then
/// world → mesh-local.
pub fn ring_to_mesh_space(ring: &[Vec3], node: &Transform, mesh_owner: &Transform) -> Vec<Vec3> {
    let to_world = node.to_affine();
    let to_mesh = mesh_owner.to_affine().inverse();

    ring.iter()
        .map(|&point| to_mesh.transform_point3(to_world.transform_point3(point)))
        .collect()
}
