use glam::{Quat, Vec2, Vec3};

use crate::{
    backend::{InMemoryPhysics, InMemoryScene, PhysicsBackend, SceneBackend, SceneNode},
    config::ViewerConfig,
    core::{
        rigidbody::RigidBody,
        shape::{ShapeDimensions, ShapePreset},
        types::Material,
    },
    error::{Result, ViewerError},
    interaction::{
        CameraPose, DragEvent, DragRotationMapper, DragState, ObjectPose, ReleaseInertia,
        RotationStep,
    },
    utils::{
        allocator::Handle,
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
        math::renormalize,
    },
};

/// The solid currently on screen and the body driving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveShape {
    pub preset: ShapePreset,
    pub dimensions: ShapeDimensions,
    pub node: Handle,
    pub body: Handle,
}

/// Owns the camera, the single solid, and the drag gesture in progress.
pub struct Viewer {
    pub config: ViewerConfig,
    scene: Box<dyn SceneBackend>,
    physics: Box<dyn PhysicsBackend>,
    camera: Handle,
    active: Option<ActiveShape>,
    mapper: DragRotationMapper,
    release: ReleaseInertia,
}

impl Viewer {
    /// Builds a headless viewer showing the default preset.
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_backends(
            config,
            Box::new(InMemoryScene::new()),
            Box::new(InMemoryPhysics::new()),
        )
    }

    pub fn with_backends(
        config: ViewerConfig,
        mut scene: Box<dyn SceneBackend>,
        physics: Box<dyn PhysicsBackend>,
    ) -> Self {
        let camera = scene.spawn(SceneNode::camera(
            "camera",
            config.camera_position,
            Vec3::ZERO,
            config.camera_up,
        ));
        log::debug!(
            "viewer using scene '{}' and physics '{}'",
            scene.name(),
            physics.name()
        );

        let mut viewer = Self {
            config,
            scene,
            physics,
            camera,
            active: None,
            mapper: DragRotationMapper::new(config.drag_sensitivity, config.renormalize_interval),
            release: ReleaseInertia::new(config.release_sensitivity),
        };
        viewer.select_shape(ShapePreset::default());
        viewer
    }

    /// Replaces the solid with a fresh node and body for `preset`.
    pub fn select_shape(&mut self, preset: ShapePreset) -> ActiveShape {
        self.spawn_solid(preset, preset.dimensions())
    }

    /// Like [`select_shape`](Self::select_shape) with custom extents; the
    /// preset only labels the node.
    pub fn select_dimensions(&mut self, preset: ShapePreset, dimensions: ShapeDimensions) -> ActiveShape {
        self.spawn_solid(preset, dimensions)
    }

    fn spawn_solid(&mut self, preset: ShapePreset, dimensions: ShapeDimensions) -> ActiveShape {
        if self.mapper.is_dragging() {
            log::debug!("shape swap during an active drag, gesture continues on the new solid");
        }
        // The UI gesture keeps reporting cumulative translation, so only the
        // renormalization cadence restarts with the fresh orientation.
        self.mapper.restart_renormalization();

        if let Some(old) = self.active.take() {
            self.physics.remove_body(old.body);
            self.scene.despawn(old.node);
        }

        let node = self.scene.spawn(SceneNode::solid(preset.name(), dimensions));
        let material = Material {
            friction: self.config.friction,
            restitution: self.config.restitution,
        };
        let body = RigidBody::for_box(node, dimensions, self.config.mass, material);
        log::debug!(
            "spawned {preset} {}x{}x{} with inertia {:?}",
            dimensions.width,
            dimensions.height,
            dimensions.length,
            body.mass_properties.inertia
        );
        let body = self.physics.insert_body(body);

        let active = ActiveShape {
            preset,
            dimensions,
            node,
            body,
        };
        self.active = Some(active);
        active
    }

    pub fn handle_event(&mut self, event: DragEvent) -> Result<()> {
        match event {
            DragEvent::Changed { translation } => self.drag_changed(translation).map(|_| ()),
            DragEvent::Ended { velocity } => self.drag_ended(velocity).map(|_| ()),
        }
    }

    /// Rotates the solid for one drag update and writes the result to the scene.
    pub fn drag_changed(&mut self, translation: Vec2) -> Result<RotationStep> {
        let timer = ScopedTimer::new("drag_changed");
        let active = self.active.ok_or(ViewerError::NoActiveShape)?;
        let grabbing = !self.mapper.is_dragging();

        let camera = self.camera_pose()?;
        let object = self.object_pose()?;
        let step = self.mapper.update(translation, &camera, &object);

        if step.degenerate {
            log::debug!("camera geometry has no drag axes, skipping frame");
        } else if !self.scene.set_orientation(active.node, step.orientation) {
            return Err(ViewerError::NodeNotFound(active.node));
        }

        if grabbing && self.config.grab_stops_spin {
            self.set_spin(active.body, Vec3::ZERO)?;
        }

        warn_if_frame_budget_exceeded("drag_changed", timer.elapsed(), self.config.frame_budget_ms);
        Ok(step)
    }

    /// Ends the gesture and hands the release spin to the physics engine.
    pub fn drag_ended(&mut self, velocity: Vec2) -> Result<Vec3> {
        let angular = self.release.release(&mut self.mapper, velocity);
        let active = self.active.ok_or(ViewerError::NoActiveShape)?;

        let orientation = self
            .scene
            .orientation(active.node)
            .ok_or(ViewerError::NodeNotFound(active.node))?;
        if !self.scene.set_orientation(active.node, renormalize(orientation)) {
            return Err(ViewerError::NodeNotFound(active.node));
        }

        self.set_spin(active.body, angular)?;
        log::debug!("released {} with angular velocity {angular:?}", active.preset);
        Ok(angular)
    }

    fn set_spin(&mut self, body: Handle, angular: Vec3) -> Result<()> {
        if self.physics.set_angular_velocity(body, angular) {
            Ok(())
        } else {
            Err(ViewerError::BodyNotFound(body))
        }
    }

    pub fn camera_pose(&self) -> Result<CameraPose> {
        let not_found = ViewerError::NodeNotFound(self.camera);
        let position = self.scene.world_position(self.camera).ok_or(not_found.clone())?;
        let up = self.scene.world_up(self.camera).ok_or(not_found)?;
        Ok(CameraPose { position, up })
    }

    pub fn object_pose(&self) -> Result<ObjectPose> {
        let active = self.active.ok_or(ViewerError::NoActiveShape)?;
        let not_found = ViewerError::NodeNotFound(active.node);
        let position = self.scene.world_position(active.node).ok_or(not_found.clone())?;
        let orientation = self.scene.orientation(active.node).ok_or(not_found)?;
        Ok(ObjectPose {
            position,
            orientation,
        })
    }

    pub fn orientation(&self) -> Result<Quat> {
        self.object_pose().map(|pose| pose.orientation)
    }

    pub fn body(&self) -> Result<&RigidBody> {
        let active = self.active.ok_or(ViewerError::NoActiveShape)?;
        self.physics
            .body(active.body)
            .ok_or(ViewerError::BodyNotFound(active.body))
    }

    pub fn active_shape(&self) -> Option<ActiveShape> {
        self.active
    }

    pub fn drag_state(&self) -> &DragState {
        self.mapper.state()
    }

    pub fn scene(&self) -> &dyn SceneBackend {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> &mut dyn SceneBackend {
        self.scene.as_mut()
    }

    pub fn physics(&self) -> &dyn PhysicsBackend {
        self.physics.as_ref()
    }

    pub fn physics_mut(&mut self) -> &mut dyn PhysicsBackend {
        self.physics.as_mut()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_cube() {
        let viewer = Viewer::default();
        let active = viewer.active_shape().expect("shape");
        assert_eq!(active.preset, ShapePreset::Cube);
        assert_eq!(viewer.orientation().expect("pose"), Quat::IDENTITY);
        assert_eq!(viewer.body().expect("body").node, active.node);
    }

    #[test]
    fn default_camera_pose() {
        let viewer = Viewer::default();
        let camera = viewer.camera_pose().expect("camera");
        assert!((camera.position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-6);
        assert!((camera.up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn despawned_solid_surfaces_node_error() {
        let mut viewer = Viewer::default();
        let active = viewer.active_shape().expect("shape");
        viewer.scene_mut().despawn(active.node);
        assert_eq!(
            viewer.drag_changed(Vec2::new(1.0, 0.0)),
            Err(ViewerError::NodeNotFound(active.node))
        );
    }

    #[test]
    fn removed_body_surfaces_body_error() {
        let mut viewer = Viewer::default();
        let active = viewer.active_shape().expect("shape");
        viewer.physics_mut().remove_body(active.body);
        assert_eq!(
            viewer.drag_ended(Vec2::new(10.0, 0.0)),
            Err(ViewerError::BodyNotFound(active.body))
        );
        assert_eq!(viewer.drag_state().previous_translation, Vec2::ZERO);
    }

    #[test]
    fn failed_frame_keeps_the_spin() {
        let mut viewer = Viewer::default();
        viewer.drag_ended(Vec2::new(0.0, 400.0)).expect("release");
        let active = viewer.active_shape().expect("shape");
        viewer.scene_mut().despawn(active.node);

        assert!(viewer.drag_changed(Vec2::new(5.0, 0.0)).is_err());
        assert!(viewer.body().expect("body").is_spinning());
    }

    /// Scene whose engine rejects orientation writes.
    struct LockedScene(InMemoryScene);

    impl SceneBackend for LockedScene {
        fn name(&self) -> &str {
            "LockedScene"
        }

        fn spawn(&mut self, node: SceneNode) -> Handle {
            self.0.spawn(node)
        }

        fn despawn(&mut self, id: Handle) -> Option<SceneNode> {
            self.0.despawn(id)
        }

        fn node(&self, id: Handle) -> Option<&SceneNode> {
            self.0.node(id)
        }

        fn set_orientation(&mut self, _id: Handle, _orientation: Quat) -> bool {
            false
        }

        fn world_transform(&self, id: Handle) -> Option<crate::core::types::Transform> {
            self.0.world_transform(id)
        }
    }

    #[test]
    fn rejected_release_write_surfaces_node_error() {
        let mut viewer = Viewer::with_backends(
            ViewerConfig::default(),
            Box::new(LockedScene(InMemoryScene::new())),
            Box::new(InMemoryPhysics::new()),
        );
        let active = viewer.active_shape().expect("shape");
        assert_eq!(
            viewer.drag_ended(Vec2::new(200.0, 0.0)),
            Err(ViewerError::NodeNotFound(active.node))
        );
        assert_eq!(viewer.body().expect("body").angular_velocity, Vec3::ZERO);
    }
}
