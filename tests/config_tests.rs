use drag_spin::*;

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: ViewerConfig =
        serde_json::from_str(r#"{ "drag_sensitivity": 0.02, "grab_stops_spin": false }"#)
            .expect("config should parse");
    assert_eq!(config.drag_sensitivity, 0.02);
    assert!(!config.grab_stops_spin);
    assert_eq!(config.release_sensitivity, 0.0005);
    assert_eq!(config.camera_position, Vec3::new(0.0, 0.0, 10.0));
}

#[test]
fn configured_sensitivity_drives_the_viewer() {
    let config: ViewerConfig =
        serde_json::from_str(r#"{ "drag_sensitivity": 0.02, "release_sensitivity": 0.001 }"#)
            .expect("config should parse");
    let mut viewer = Viewer::new(config);

    let step = viewer.drag_changed(Vec2::new(10.0, 0.0)).expect("drag");
    let (_, angle) = step.increment.to_axis_angle();
    assert!((angle - 0.2).abs() < 1e-5);

    let spin = viewer.drag_ended(Vec2::new(200.0, 0.0)).expect("release");
    assert!((spin.y + 0.2).abs() < 1e-6);
}

#[test]
fn presets_serialize_by_name() {
    let json = serde_json::to_string(&ShapePreset::Cuboid).expect("serialize");
    assert_eq!(json, "\"Cuboid\"");
    let body = RigidBody::default();
    let round: RigidBody =
        serde_json::from_str(&serde_json::to_string(&body).expect("serialize")).expect("parse");
    assert_eq!(round, body);
}
