//! Procedural tube-body mesh generation from skeleton rigs
//!
//! Builds a combined body mesh by resolving a declarative limb config
//! against a skeleton hierarchy, computing a cross-section ring per joint,
//! and stitching consecutive rings into triangulated tubes. A cheap pose
//! checksum keeps the mesh synchronized with the skeleton without rebuilding
//! when nothing moved.
//!
//! # Example
//! ```no_run
//! use glam::Vec3;
//! use rig_builder::{RigController, Skeleton, Transform};
//!
//! // Mirror the host hierarchy into the node arena
//! let mut skeleton = Skeleton::with_root("root", Transform::IDENTITY);
//! let shoulder = skeleton.add_node(
//!     skeleton.root(),
//!     "shoulder",
//!     Transform::from_position(Vec3::new(0.0, 1.4, 0.0)),
//! );
//! let elbow = skeleton.add_node(
//!     shoulder,
//!     "elbow",
//!     Transform::from_position(Vec3::new(0.0, 1.1, 0.0)),
//! );
//! skeleton.add_node(
//!     elbow,
//!     "wrist",
//!     Transform::from_position(Vec3::new(0.0, 0.8, 0.0)),
//! );
//!
//! // Build once, then poll every tick
//! let mut controller = RigController::new("limbs.json", Transform::IDENTITY);
//! controller.initialize(&skeleton)?;
//!
//! skeleton.set_position(elbow, Vec3::new(0.1, 1.1, 0.0));
//! controller.update(&skeleton)?;
//!
//! let mesh = controller.mesh().expect("built above");
//! println!("{} vertices", mesh.vertex_count());
//! # Ok::<(), rig_builder::RigError>(())
//! ```

pub mod checksum;
pub mod config;
pub mod controller;
pub mod error;
pub mod mesh;
pub mod resolver;
pub mod ring;
pub mod skeleton;
pub mod space;

pub use checksum::rig_checksum;
pub use config::{load_rig_config, JointConfig, JointEntry, LimbConfig, RigConfig, VertexDef};
pub use controller::{RebuildOutcome, RigController};
pub use error::RigError;
pub use mesh::{build_tube, combine, write_obj, BodyMesh};
pub use resolver::{resolve_limbs, LimbChain, ResolvedJoint};
pub use ring::{generate_ring, joint_ring, ring_from_vertices};
pub use skeleton::{NodeIndex, Skeleton, SkeletonNode};
pub use space::{ring_to_mesh_space, Transform};
