use approx::assert_abs_diff_eq;
use drag_spin::*;

#[test]
fn cube_preset_inertia() {
    let props = MassProperties::solid_cuboid(ShapePreset::Cube.dimensions(), 1.0);
    assert_abs_diff_eq!(props.inertia.x, 0.667, epsilon = 1e-3);
    assert_abs_diff_eq!(props.inertia.y, 0.667, epsilon = 1e-3);
    assert_abs_diff_eq!(props.inertia.z, 0.667, epsilon = 1e-3);
}

#[test]
fn cuboid_preset_inertia() {
    let props = MassProperties::solid_cuboid(ShapePreset::Cuboid.dimensions(), 1.0);
    assert_abs_diff_eq!(props.inertia.x, 0.417, epsilon = 1e-3);
    assert_abs_diff_eq!(props.inertia.y, 0.833, epsilon = 1e-3);
    assert_abs_diff_eq!(props.inertia.z, 1.083, epsilon = 1e-3);
}

#[test]
fn longest_side_gives_largest_moment_about_perpendicular_axes() {
    let dims = ShapeDimensions::new(0.5, 0.5, 6.0).expect("valid dims");
    let props = MassProperties::solid_cuboid(dims, 2.0);
    assert_abs_diff_eq!(props.inertia.x, props.inertia.y, epsilon = 1e-6);
    assert!(props.inertia.z < props.inertia.x);
}

#[test]
fn viewer_bodies_carry_preset_parameters() {
    let mut viewer = Viewer::default();
    viewer.select_shape(ShapePreset::Cuboid);
    let body = viewer.body().expect("body");

    assert_abs_diff_eq!(body.mass_properties.mass, 1.0);
    assert_abs_diff_eq!(body.material.friction, 0.5);
    assert_abs_diff_eq!(body.material.restitution, 0.5);
    assert!(!body.affected_by_gravity);
    assert!(!body.is_kinematic);
    assert_abs_diff_eq!(body.mass_properties.inertia.z, 1.083, epsilon = 1e-3);
}

#[test]
fn configured_mass_scales_the_tensor() {
    let config = ViewerConfig {
        mass: 3.0,
        ..ViewerConfig::default()
    };
    let viewer = Viewer::new(config);
    let body = viewer.body().expect("body");
    assert_abs_diff_eq!(body.mass_properties.inertia.x, 2.0, epsilon = 1e-5);
}
