use drag_spin::*;

fn main() {
    let shared = SharedViewer::new(Viewer::new(ViewerConfig::default()));

    // Drag right and slightly down, swapping to the cuboid halfway through.
    for i in 1..=30 {
        let translation = Vec2::new(i as f32 * 4.0, i as f32);
        if i == 15 {
            let active = shared.select_shape(ShapePreset::Cuboid);
            println!("Switched to {} mid-drag", active.preset);
        }
        if let Err(err) = shared.handle_event(DragEvent::Changed { translation }) {
            println!("Drag update failed: {err}");
            return;
        }
    }

    if let Err(err) = shared.handle_event(DragEvent::Ended {
        velocity: Vec2::new(240.0, -60.0),
    }) {
        println!("Release failed: {err}");
        return;
    }

    let viewer = shared.lock();
    if let Ok(orientation) = viewer.orientation() {
        println!("Orientation after drag: {orientation:?}");
    }
    if let Ok(body) = viewer.body() {
        let spin = body.axis_angular_velocity();
        println!(
            "Handed off spin: {:.3} rad/s about {:?} (inertia {:?})",
            spin.rate, spin.axis, body.mass_properties.inertia
        );
    }
}
