// Host-side tests for pure input functions. The main crate is wasm-only,
// so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!((t - 3.0).abs() < 1e-4, "near hit should land at z=3, got {t}");
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(1.0, 0.0, 0.0);

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = glam::Vec3::new(0.0, 0.0, 10.0);
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0); // pointing away

    let center = glam::Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_tangent_still_hits() {
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);

    let center = glam::Vec3::new(2.0, 0.0, 5.0);
    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());
    assert!(result.unwrap() > 0.0);
}

#[test]
fn ray_sphere_scales_with_radius() {
    // Property: growing the radius can only pull the near hit closer.
    let ray_origin = glam::Vec3::ZERO;
    let ray_dir = glam::Vec3::new(0.0, 0.0, 1.0);
    let center = glam::Vec3::new(0.3, 0.0, 5.0);

    let mut prev = f32::MAX;
    for radius in [0.5, 1.0, 1.5, 2.0, 3.0] {
        let t = ray_sphere(ray_origin, ray_dir, center, radius)
            .unwrap_or_else(|| panic!("radius {radius} should hit"));
        assert!(t <= prev, "near hit moved away as radius grew");
        prev = t;
    }
}
