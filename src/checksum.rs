//! Pose change detection
//!
//! Folds the whole skeleton into a single u64 so the per-tick poll can skip
//! rebuilding when nothing moved. xxHash3 keeps this cheap even for large
//! skeletons; it is change detection, not security.

use xxhash_rust::xxh3::Xxh3;

use crate::skeleton::{NodeIndex, Skeleton};

/// Compute an order-sensitive checksum over the skeleton's structure and pose
///
/// Preorder depth-first fold: per node, the name, position, rotation and
/// scale (in that fixed order) and the child count, then the children in
/// their existing order. Identical skeleton state always produces the same
/// digest; any single pose change produces a different one with overwhelming
/// probability, and sibling reordering is a change.
pub fn rig_checksum(skeleton: &Skeleton) -> u64 {
    let mut hasher = Xxh3::new();
    fold_node(skeleton, skeleton.root(), &mut hasher);
    hasher.digest()
}

fn fold_node(skeleton: &Skeleton, index: NodeIndex, hasher: &mut Xxh3) {
    let node = skeleton.node(index);

    // Length-prefix the name so adjacent fields cannot alias across nodes
    hasher.update(&(node.name.len() as u32).to_le_bytes());
    hasher.update(node.name.as_bytes());

    let t = &node.transform;
    let components = [
        t.position.x,
        t.position.y,
        t.position.z,
        t.rotation.x,
        t.rotation.y,
        t.rotation.z,
        t.rotation.w,
        t.scale.x,
        t.scale.y,
        t.scale.z,
    ];
    for component in components {
        hasher.update(&component.to_bits().to_le_bytes());
    }

    hasher.update(&(node.children.len() as u32).to_le_bytes());
    for &child in &node.children {
        fold_node(skeleton, child, hasher);
    }
}
