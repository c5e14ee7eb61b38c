// Host-side tests for constants and their relationships. The main crate
// is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_and_scales_are_ordered() {
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
    assert!(MOBILE_SCALE < TABLET_SCALE);
    assert!(TABLET_SCALE < DESKTOP_SCALE);
    assert!(DESKTOP_SCALE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_tables_are_consistent() {
    // sidebar always brings the camera closer than the intro
    for i in 0..3 {
        assert!(SIDEBAR_CAMERA_Z[i] < INTRO_CAMERA_Z[i]);
        assert!(SIDEBAR_CAMERA_Z[i] > 0.0);
    }
    // smaller devices sit farther back
    assert!(INTRO_CAMERA_Z[0] > INTRO_CAMERA_Z[1]);
    assert!(INTRO_CAMERA_Z[1] > INTRO_CAMERA_Z[2]);
    assert!(FOV_MOBILE_DEG > FOV_DEG);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_menu_targets_are_sane() {
    assert!(VISUAL_LERP_PER_FRAME > 0.0 && VISUAL_LERP_PER_FRAME < 1.0);
    assert!(MENU_SCALE_ACTIVE > MENU_SCALE_HOVER);
    assert!(MENU_SCALE_HOVER > MENU_SCALE_IDLE);
    assert!(MENU_GLOW_ACTIVE > MENU_GLOW_HOVER);
    assert!(MENU_GLOW_HOVER > MENU_GLOW_IDLE);
    assert!(MENU_GLOW_ACTIVE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_well_formed() {
    assert!(PARTICLE_SPEED_MIN < PARTICLE_SPEED_MAX);
    assert!(PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(PARTICLE_Z_MIN < PARTICLE_Z_MAX);
    assert!(PARTICLE_Z_MAX < PARTICLE_RECYCLE_Z);
    assert!(PARTICLE_COUNT % 2 == 0, "count must halve cleanly on mobile");
    assert!(PARTICLE_DRIFT_PER_FRAME > 0.0);
    assert!(PARTICLE_SPIN_PER_FRAME > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn post_gates_are_ordered() {
    assert!(BREACH_BANNER_CRACK_THRESHOLD < EXTRA_NOISE_CRACK_THRESHOLD);
    assert!(EXTRA_NOISE_CRACK_THRESHOLD < EXTRA_BLOOM_CRACK_THRESHOLD);
    assert!(EXTRA_BLOOM_CRACK_THRESHOLD < 1.0);
    assert!(PIXELATION_DESKTOP_FLOOR < PIXELATION_DESKTOP_START);
    assert!(PIXELATION_DESKTOP_START < PIXELATION_TRANSITION);
    assert!(PIXELATION_DECAY_STEP > 0.0);
    assert!(SCANLINE_OPACITY_MOBILE < SCANLINE_OPACITY);
    assert!(NOISE_OPACITY_MOBILE < NOISE_OPACITY);
    assert!(NOISE_OPACITY < NOISE_OPACITY_TRANSITION);
    assert!(BLOOM_INTENSITY_MOBILE < BLOOM_INTENSITY);
    assert!(BLOOM_INTENSITY < BLOOM_INTENSITY_TRANSITION);
    assert!(EXTRA_BLOOM_THRESHOLD < BLOOM_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn menu_catalog_tables_line_up() {
    assert_eq!(MENU_POSITIONS.len(), MENU_BASE_COLORS.len());
    assert_eq!(MENU_POSITIONS.len(), MENU_EMISSIVE_COLORS.len());
    for color in MENU_BASE_COLORS.iter().chain(MENU_EMISSIVE_COLORS.iter()) {
        for c in color {
            assert!((0.0..=1.0).contains(c));
        }
    }
    // entries are stacked with even spacing
    let ys: Vec<f32> = MENU_POSITIONS.iter().map(|p| p[1]).collect();
    for pair in ys.windows(2) {
        assert!((pair[0] - pair[1] - 1.0).abs() < 1e-6);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_geometry_is_sane() {
    assert!(MENU_BAR_WIDTH_MOBILE < MENU_BAR_WIDTH);
    assert!(MENU_GLOW_SCALE[0] > MENU_BAR_WIDTH, "glow extends past the bar");
    assert!(PICK_SPHERE_RADIUS > MENU_BAR_HEIGHT);
    assert!(SIDEBAR_SLIDE_CLOSED_X_MOBILE < SIDEBAR_SLIDE_CLOSED_X);
    assert!((0.0..=1.0).contains(&SIDEBAR_BG_OPACITY));
    assert!((0.0..=1.0).contains(&PARTICLE_OPACITY));
    assert!(SCROLL_OFFSET_PX < 0.0, "scroll correction nudges upward");
}
