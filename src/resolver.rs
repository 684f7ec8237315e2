//! Limb chain resolution
//!
//! Binds configured joint names to skeleton nodes, one chain per configured
//! limb in config order. Resolution snapshots everything a build needs (pose
//! and ring per joint), so later pipeline stages never read the skeleton
//! again within the same pass.

use hashbrown::HashSet;

use glam::Vec3;
use tracing::warn;

use crate::config::RigConfig;
use crate::ring::joint_ring;
use crate::skeleton::{NodeIndex, Skeleton};
use crate::space::Transform;

/// A config joint bound to a skeleton node, with its computed ring
#[derive(Debug, Clone)]
pub struct ResolvedJoint {
    /// Index of the bound node in the skeleton arena
    pub node: NodeIndex,
    pub name: String,
    /// Snapshot of the node's world pose at resolve time
    pub transform: Transform,
    /// Cross-section ring in the node's local space
    pub ring: Vec<Vec3>,
    /// Direct skeleton children that were themselves resolved in this pass.
    /// Topology metadata only; triangulation relies on chain order alone.
    pub children: Vec<NodeIndex>,
}

/// Ordered joints forming one tube
#[derive(Debug, Clone)]
pub struct LimbChain {
    pub name: String,
    pub joints: Vec<ResolvedJoint>,
}

/// Resolve every configured limb against the skeleton
///
/// A joint name with no matching node is warned about and dropped, which may
/// leave its chain shorter than configured; chains that end up with fewer
/// than two joints simply produce no geometry downstream.
pub fn resolve_limbs(config: &RigConfig, skeleton: &Skeleton) -> Vec<LimbChain> {
    let names = skeleton.name_index();

    let mut chains = Vec::with_capacity(config.limbs.len());
    for limb in &config.limbs {
        let mut joints = Vec::with_capacity(limb.joints.len());
        for entry in &limb.joints {
            let joint = entry.joint_config();
            match names.get(joint.name.as_str()) {
                Some(&index) => {
                    let node = skeleton.node(index);
                    joints.push(ResolvedJoint {
                        node: index,
                        name: joint.name.clone(),
                        transform: node.transform,
                        ring: joint_ring(&joint),
                        children: Vec::new(),
                    });
                }
                None => {
                    warn!(
                        "Joint '{}' not found in skeleton, dropping from limb '{}'",
                        joint.name, limb.name
                    );
                }
            }
        }
        chains.push(LimbChain {
            name: limb.name.clone(),
            joints,
        });
    }

    assign_direct_children(&mut chains, skeleton);
    chains
}

/// Fill each joint's direct-child list from the skeleton's immediate children,
/// keeping only nodes resolved somewhere in this pass
fn assign_direct_children(chains: &mut [LimbChain], skeleton: &Skeleton) {
    let resolved: HashSet<NodeIndex> = chains
        .iter()
        .flat_map(|chain| chain.joints.iter().map(|joint| joint.node))
        .collect();

    for chain in chains {
        for joint in &mut chain.joints {
            joint.children = skeleton
                .node(joint.node)
                .children
                .iter()
                .copied()
                .filter(|child| resolved.contains(child))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn arm_config(joints: &[&str]) -> RigConfig {
        let joints: Vec<String> = joints.iter().map(|j| format!("\"{j}\"")).collect();
        let json = format!(
            r#"{{ "limbs": [ {{ "name": "arm", "joints": [{}] }} ] }}"#,
            joints.join(", ")
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_resolve_full_chain() {
        let skeleton = arm_skeleton();
        let config = arm_config(&["shoulder", "elbow", "wrist"]);

        let chains = resolve_limbs(&config, &skeleton);

        assert_eq!(chains.len(), 1);
        let chain = &chains[0];
        assert_eq!(chain.name, "arm");
        assert_eq!(chain.joints.len(), 3);
        assert_eq!(chain.joints[0].name, "shoulder");
        assert_eq!(chain.joints[2].name, "wrist");
        // Snapshot carries the node pose
        assert_eq!(chain.joints[0].transform.position.y, 1.4);
        // Default procedural ring
        assert_eq!(chain.joints[0].ring.len(), 8);
    }

    #[test]
    fn test_unresolved_joint_dropped() {
        let skeleton = arm_skeleton();
        let config = arm_config(&["shoulder", "phantom", "wrist"]);

        let chains = resolve_limbs(&config, &skeleton);

        assert_eq!(chains[0].joints.len(), 2);
        assert_eq!(chains[0].joints[0].name, "shoulder");
        assert_eq!(chains[0].joints[1].name, "wrist");
    }

    #[test]
    fn test_config_order_preserved() {
        let skeleton = arm_skeleton();
        // Deliberately reversed relative to the hierarchy
        let config = arm_config(&["wrist", "elbow", "shoulder"]);

        let chains = resolve_limbs(&config, &skeleton);

        let names: Vec<&str> = chains[0].joints.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, ["wrist", "elbow", "shoulder"]);
    }

    #[test]
    fn test_direct_children_within_pass() {
        let skeleton = arm_skeleton();
        let config = arm_config(&["shoulder", "elbow", "wrist"]);

        let chains = resolve_limbs(&config, &skeleton);

        let elbow_index = skeleton.find_by_name("elbow").unwrap();
        let wrist_index = skeleton.find_by_name("wrist").unwrap();
        assert_eq!(chains[0].joints[0].children, vec![elbow_index]);
        assert_eq!(chains[0].joints[1].children, vec![wrist_index]);
        assert!(chains[0].joints[2].children.is_empty());
    }

    #[test]
    fn test_direct_children_exclude_unresolved() {
        let skeleton = arm_skeleton();
        // Elbow is not part of any limb, so shoulder has no resolved child
        let config = arm_config(&["shoulder", "wrist"]);

        let chains = resolve_limbs(&config, &skeleton);

        assert_eq!(chains[0].joints.len(), 2);
        assert!(chains[0].joints[0].children.is_empty());
    }

    #[test]
    fn test_empty_limb_yields_empty_chain() {
        let skeleton = arm_skeleton();
        let config = arm_config(&[]);

        let chains = resolve_limbs(&config, &skeleton);

        assert_eq!(chains.len(), 1);
        assert!(chains[0].joints.is_empty());
    }
}
