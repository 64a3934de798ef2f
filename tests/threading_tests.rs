use drag_spin::{DragEvent, SharedViewer, ShapePreset, Vec2, Viewer};
use std::thread;

#[test]
fn test_viewer_is_sync_and_send() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<Viewer>();
    assert_sync_send::<SharedViewer>();
}

#[test]
fn test_preset_swaps_race_with_drags() {
    let shared = SharedViewer::default();

    let mut handles = vec![];
    for worker in 0..4 {
        let viewer = shared.clone();
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                if worker == 0 && i % 10 == 0 {
                    let preset = if i % 20 == 0 {
                        ShapePreset::Cuboid
                    } else {
                        ShapePreset::Cube
                    };
                    viewer.select_shape(preset);
                    continue;
                }
                viewer
                    .handle_event(DragEvent::Changed {
                        translation: Vec2::new(i as f32, (i * 2) as f32),
                    })
                    .expect("drag should always find the current shape");
            }
            viewer
                .handle_event(DragEvent::Ended {
                    velocity: Vec2::new(100.0, 0.0),
                })
                .expect("release");
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let viewer = shared.lock();
    let orientation = viewer.orientation().expect("pose");
    assert!((orientation.length() - 1.0).abs() < 1e-3);
    let active = viewer.active_shape().expect("shape");
    assert!(viewer.physics().body(active.body).is_some());
}
