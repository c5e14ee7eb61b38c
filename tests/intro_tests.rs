// Host-side tests for the intro text choreography. The main crate is
// wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod intro {
    include!("../src/core/intro.rs");
}

use intro::*;

#[test]
fn title_fades_in_and_saturates() {
    assert_eq!(title_pose(0.0, false).opacity, 0.0);
    assert!((title_pose(1.0, false).opacity - 0.5).abs() < 1e-6);
    assert_eq!(title_pose(2.0, false).opacity, 1.0);
    assert_eq!(title_pose(60.0, false).opacity, 1.0);
}

#[test]
fn subtitle_trails_by_one_second() {
    assert_eq!(subtitle_pose(0.5, false).opacity, 0.0);
    assert_eq!(subtitle_pose(1.0, false).opacity, 0.0);
    assert!((subtitle_pose(2.0, false).opacity - 0.5).abs() < 1e-6);
    assert_eq!(subtitle_pose(4.0, false).opacity, 1.0);
}

#[test]
fn bob_stays_within_amplitude_around_base() {
    for t in 0..200 {
        let t = t as f32 * 0.1;
        let title = title_pose(t, false);
        assert!((title.y - 1.0).abs() <= 0.1 + 1e-6);
        let title_mobile = title_pose(t, true);
        assert!((title_mobile.y - 1.5).abs() <= 0.1 + 1e-6);

        let subtitle = subtitle_pose(t, false);
        assert!((subtitle.y - 0.3).abs() <= 0.05 + 1e-6);
    }
}

#[test]
fn instruction_blinks_inside_its_fade_envelope() {
    assert_eq!(instruction_opacity(1.9), 0.0);
    for t in 21..200 {
        let t = t as f32 * 0.1;
        let envelope = ((t - 2.0) * 0.5).clamp(0.0, 1.0);
        let opacity = instruction_opacity(t);
        assert!(opacity <= envelope + 1e-6, "blink exceeded envelope at t={t}");
        assert!(
            opacity >= envelope * 0.5 - 1e-6,
            "blink dipped below half envelope at t={t}"
        );
    }
}

#[test]
fn backdrop_tilt_is_slow_and_small() {
    for t in 0..400 {
        let t = t as f32 * 0.1;
        assert!(backdrop_tilt(t).abs() <= 0.02 + 1e-6);
    }
    // one full sway takes ~31 seconds
    assert!(backdrop_tilt(0.0).abs() < 1e-6);
    assert!(backdrop_tilt(7.85) > 0.019);
}
