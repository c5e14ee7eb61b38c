// Host-side tests for screen/world conversions. The main crate is
// wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

const W: f32 = 1280.0;
const H: f32 = 720.0;
const FOV: f32 = 50.0 * std::f32::consts::PI / 180.0;

#[test]
fn center_ray_points_down_the_view_axis() {
    let (ro, rd) = screen_to_world_ray(W, H, W / 2.0, H / 2.0, 10.0, FOV);
    assert_eq!(ro, Vec3::new(0.0, 0.0, 10.0));
    assert!(rd.z < -0.999, "center ray should look straight at -z: {rd:?}");
    assert!(rd.x.abs() < 1e-3);
    assert!(rd.y.abs() < 1e-3);
}

#[test]
fn origin_projects_to_screen_center() {
    let screen = world_to_screen(W, H, Vec3::ZERO, 10.0, FOV).unwrap();
    assert!((screen.x - W / 2.0).abs() < 0.5);
    assert!((screen.y - H / 2.0).abs() < 0.5);
}

#[test]
fn screen_y_grows_downward() {
    let above = world_to_screen(W, H, Vec3::new(0.0, 1.0, 0.0), 10.0, FOV).unwrap();
    let below = world_to_screen(W, H, Vec3::new(0.0, -1.0, 0.0), 10.0, FOV).unwrap();
    assert!(above.y < H / 2.0);
    assert!(below.y > H / 2.0);
}

#[test]
fn behind_camera_is_not_projected() {
    assert!(world_to_screen(W, H, Vec3::new(0.0, 0.0, 20.0), 10.0, FOV).is_none());
}

#[test]
fn project_then_raycast_recovers_the_point() {
    // Property: a ray cast through a projected point passes close to it.
    for &point in &[
        Vec3::new(-1.8, 1.5, 0.0),
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(1.2, 0.4, -2.0),
    ] {
        let screen = world_to_screen(W, H, point, 7.0, FOV).unwrap();
        let (ro, rd) = screen_to_world_ray(W, H, screen.x, screen.y, 7.0, FOV);
        // closest approach of the ray to the original point
        let t = (point - ro).dot(rd);
        let closest = ro + rd * t;
        assert!(
            (closest - point).length() < 1e-2,
            "ray missed {point:?} by {}",
            (closest - point).length()
        );
    }
}
