use glam::Quat;

use crate::{
    core::types::Transform,
    utils::allocator::{Arena, Handle},
};

use super::{SceneBackend, SceneNode};

/// Headless scene graph backed by an [`Arena`].
#[derive(Debug, Default)]
pub struct InMemoryScene {
    nodes: Arena<SceneNode>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl SceneBackend for InMemoryScene {
    fn name(&self) -> &str {
        "InMemoryScene"
    }

    fn spawn(&mut self, node: SceneNode) -> Handle {
        log::trace!("spawning scene node '{}'", node.name);
        self.nodes.insert(node)
    }

    fn despawn(&mut self, id: Handle) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    fn node(&self, id: Handle) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn set_orientation(&mut self, id: Handle, orientation: Quat) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.transform.rotation = orientation;
                true
            }
            None => false,
        }
    }

    fn world_transform(&self, id: Handle) -> Option<Transform> {
        let node = self.nodes.get(id)?;
        let mut world = node.transform;
        let mut parent = node.parent;
        // A despawned parent ends the chain; its handle no longer resolves.
        while let Some(parent_node) = parent.and_then(|handle| self.nodes.get(handle)) {
            world = parent_node.transform.combine(&world);
            parent = parent_node.parent;
        }
        Some(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NodeKind;
    use crate::core::shape::ShapePreset;
    use glam::Vec3;

    #[test]
    fn orientation_writes_reach_the_node() {
        let mut scene = InMemoryScene::new();
        let id = scene.spawn(SceneNode::solid("box", ShapePreset::Cube.dimensions()));
        let turned = Quat::from_rotation_y(0.4);
        assert!(scene.set_orientation(id, turned));
        assert_eq!(scene.orientation(id), Some(turned));
        assert!(matches!(scene.node(id).map(|n| n.kind), Some(NodeKind::Solid { .. })));
    }

    #[test]
    fn despawned_handles_reject_writes() {
        let mut scene = InMemoryScene::new();
        let id = scene.spawn(SceneNode::solid("box", ShapePreset::Cube.dimensions()));
        assert!(scene.despawn(id).is_some());
        assert!(!scene.set_orientation(id, Quat::IDENTITY));
        assert!(scene.world_position(id).is_none());
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn world_position_applies_parents() {
        let mut scene = InMemoryScene::new();
        let mut rig = SceneNode::solid("rig", ShapePreset::Cube.dimensions());
        rig.transform.position = Vec3::new(0.0, 2.0, 0.0);
        let rig = scene.spawn(rig);

        let camera = scene.spawn(
            SceneNode::camera("camera", Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
                .with_parent(rig),
        );
        let position = scene.world_position(camera).expect("camera");
        assert!((position - Vec3::new(0.0, 2.0, 10.0)).length() < 1e-5);
        let up = scene.world_up(camera).expect("camera");
        assert!((up - Vec3::Y).length() < 1e-5);
    }
}
