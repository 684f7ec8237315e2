//! Rebuild orchestration
//!
//! Owns the Idle/Built state machine around the geometry pipeline. The host
//! drives it through exactly two entry points: [`RigController::initialize`]
//! for an explicit rebuild (editor action) and [`RigController::update`] for
//! the per-tick checksum poll. A failed rebuild never leaves a half-built
//! mesh behind; whatever state existed before the attempt is kept.

use std::path::PathBuf;

use glam::Vec3;
use tracing::{debug, error};

use crate::checksum::rig_checksum;
use crate::config::load_rig_config;
use crate::error::RigError;
use crate::mesh::{build_tube, combine, BodyMesh};
use crate::resolver::{resolve_limbs, LimbChain};
use crate::skeleton::Skeleton;
use crate::space::{ring_to_mesh_space, Transform};

/// Result of a check-and-maybe-rebuild poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Checksum matched the last build; nothing was done
    Unchanged,
    /// The pipeline ran and produced a fresh mesh
    Rebuilt,
}

enum ControllerState {
    Idle,
    Built {
        checksum: u64,
        mesh: BodyMesh,
        limbs: Vec<LimbChain>,
    },
}

/// Builds the body mesh and keeps it synchronized with skeleton pose changes
///
/// The config is reloaded from disk on every rebuild, so edits to the limb
/// document are picked up the next time the skeleton moves or `initialize`
/// is called.
pub struct RigController {
    config_path: PathBuf,
    /// World pose of the object that owns the combined mesh; all limb
    /// geometry is expressed in this frame.
    mesh_transform: Transform,
    state: ControllerState,
}

impl RigController {
    pub fn new(config_path: impl Into<PathBuf>, mesh_transform: Transform) -> Self {
        Self {
            config_path: config_path.into(),
            mesh_transform,
            state: ControllerState::Idle,
        }
    }

    /// Explicit rebuild, regardless of whether the pose changed
    ///
    /// On success the controller is `Built` with a fresh mesh and checksum.
    /// On a hard error the previous state (including any previous mesh) is
    /// kept and the error is returned.
    pub fn initialize(&mut self, skeleton: &Skeleton) -> Result<(), RigError> {
        let checksum = rig_checksum(skeleton);
        let (mesh, limbs) = self.build(skeleton).map_err(|err| {
            error!("Rig build failed: {err}");
            err
        })?;
        self.state = ControllerState::Built {
            checksum,
            mesh,
            limbs,
        };
        Ok(())
    }

    /// Per-tick poll: rebuild only if the skeleton checksum changed
    pub fn update(&mut self, skeleton: &Skeleton) -> Result<RebuildOutcome, RigError> {
        let checksum = rig_checksum(skeleton);
        if let ControllerState::Built {
            checksum: previous, ..
        } = &self.state
        {
            if *previous == checksum {
                return Ok(RebuildOutcome::Unchanged);
            }
            debug!("Rig checksum changed, rebuilding");
        }

        let (mesh, limbs) = self.build(skeleton).map_err(|err| {
            error!("Rig rebuild failed, keeping previous state: {err}");
            err
        })?;
        self.state = ControllerState::Built {
            checksum,
            mesh,
            limbs,
        };
        Ok(RebuildOutcome::Rebuilt)
    }

    /// The combined body mesh of the last successful build
    pub fn mesh(&self) -> Option<&BodyMesh> {
        match &self.state {
            ControllerState::Built { mesh, .. } => Some(mesh),
            ControllerState::Idle => None,
        }
    }

    /// Resolved limb chains of the last successful build
    pub fn limbs(&self) -> &[LimbChain] {
        match &self.state {
            ControllerState::Built { limbs, .. } => limbs,
            ControllerState::Idle => &[],
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, ControllerState::Built { .. })
    }

    /// Run the full pipeline: config → chains → rings → tubes → combined mesh
    fn build(&self, skeleton: &Skeleton) -> Result<(BodyMesh, Vec<LimbChain>), RigError> {
        let config = load_rig_config(&self.config_path)?;
        let chains = resolve_limbs(&config, skeleton);

        let mut limb_meshes = Vec::with_capacity(chains.len());
        for chain in &chains {
            // Fewer than two rings cannot form a tube; not an error
            if chain.joints.len() < 2 {
                continue;
            }

            let rings: Vec<Vec<Vec3>> = chain
                .joints
                .iter()
                .map(|joint| ring_to_mesh_space(&joint.ring, &joint.transform, &self.mesh_transform))
                .collect();

            match build_tube(&rings) {
                Ok(mesh) => limb_meshes.push(mesh),
                Err(err) => error!("Skipping limb '{}': {err}", chain.name),
            }
        }

        let mesh = combine(&limb_meshes)?;
        debug!(
            "Built body mesh: {} limbs, {} vertices, {} triangles",
            limb_meshes.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok((mesh, chains))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("limbs.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    fn arm_skeleton() -> Skeleton {
        let mut skeleton = Skeleton::with_root("root", Transform::IDENTITY);
        let shoulder = skeleton.add_node(
            skeleton.root(),
            "shoulder",
            Transform::from_position(Vec3::new(0.0, 1.4, 0.0)),
        );
        let elbow = skeleton.add_node(
            shoulder,
            "elbow",
            Transform::from_position(Vec3::new(0.0, 1.1, 0.0)),
        );
        skeleton.add_node(
            elbow,
            "wrist",
            Transform::from_position(Vec3::new(0.0, 0.8, 0.0)),
        );
        skeleton
    }

    const ARM_CONFIG: &str = r#"{
        "limbs": [
            { "name": "arm", "joints": ["shoulder", "elbow", "wrist"] }
        ]
    }"#;

    #[test]
    fn test_initialize_builds_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, ARM_CONFIG);
        let skeleton = arm_skeleton();

        let mut controller = RigController::new(&path, Transform::IDENTITY);
        assert!(!controller.is_built());

        controller.initialize(&skeleton).unwrap();

        assert!(controller.is_built());
        let mesh = controller.mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 32);
        assert_eq!(controller.limbs().len(), 1);
    }

    #[test]
    fn test_update_noop_when_pose_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, ARM_CONFIG);
        let skeleton = arm_skeleton();

        let mut controller = RigController::new(&path, Transform::IDENTITY);
        assert_eq!(
            controller.update(&skeleton).unwrap(),
            RebuildOutcome::Rebuilt
        );
        assert_eq!(
            controller.update(&skeleton).unwrap(),
            RebuildOutcome::Unchanged
        );
    }

    #[test]
    fn test_update_rebuilds_on_pose_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, ARM_CONFIG);
        let mut skeleton = arm_skeleton();

        let mut controller = RigController::new(&path, Transform::IDENTITY);
        controller.initialize(&skeleton).unwrap();

        let wrist = skeleton.find_by_name("wrist").unwrap();
        skeleton.set_position(wrist, Vec3::new(0.3, 0.8, 0.0));

        assert_eq!(
            controller.update(&skeleton).unwrap(),
            RebuildOutcome::Rebuilt
        );
    }

    #[test]
    fn test_missing_config_stays_idle() {
        let skeleton = arm_skeleton();
        let mut controller =
            RigController::new("/nonexistent/limbs.json", Transform::IDENTITY);

        let err = controller.update(&skeleton).unwrap_err();
        assert!(matches!(err, RigError::ConfigUnavailable { .. }));
        assert!(!controller.is_built());
        assert!(controller.mesh().is_none());
    }

    #[test]
    fn test_failed_reload_keeps_previous_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, ARM_CONFIG);
        let mut skeleton = arm_skeleton();

        let mut controller = RigController::new(&path, Transform::IDENTITY);
        controller.initialize(&skeleton).unwrap();
        let vertex_count = controller.mesh().unwrap().vertex_count();

        // Break the config, then move the skeleton to force a rebuild attempt
        std::fs::remove_file(&path).unwrap();
        let elbow = skeleton.find_by_name("elbow").unwrap();
        skeleton.set_position(elbow, Vec3::new(0.1, 1.1, 0.0));

        assert!(controller.update(&skeleton).is_err());
        assert!(controller.is_built());
        assert_eq!(controller.mesh().unwrap().vertex_count(), vertex_count);
    }

    #[test]
    fn test_degenerate_limb_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "limbs": [
                    { "name": "arm", "joints": ["shoulder", "elbow", "wrist"] },
                    { "name": "stub", "joints": ["shoulder"] }
                ]
            }"#,
        );
        let skeleton = arm_skeleton();

        let mut controller = RigController::new(&path, Transform::IDENTITY);
        controller.initialize(&skeleton).unwrap();

        // Only the three-joint limb produces geometry
        assert_eq!(controller.mesh().unwrap().vertex_count(), 24);
        assert_eq!(controller.limbs().len(), 2);
    }
}
