// Host-side tests for viewport classification and the shared reactive
// value. The main crate is wasm-only, so we include the pure-Rust modules
// directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use crate::core::viewport::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn classify_boundaries() {
    assert_eq!(classify(767.0, 800.0).device, DeviceClass::Mobile);
    assert_eq!(classify(768.0, 800.0).device, DeviceClass::Tablet);
    assert_eq!(classify(1023.0, 800.0).device, DeviceClass::Tablet);
    assert_eq!(classify(1024.0, 800.0).device, DeviceClass::Desktop);
    assert_eq!(classify(0.0, 0.0).device, DeviceClass::Mobile);
}

#[test]
fn classify_matches_rule_over_width_sweep() {
    // Property: mobile iff w < 768, tablet iff 768 <= w < 1024, else desktop
    for w in 0..2100 {
        let wf = w as f32;
        let device = classify(wf, 900.0).device;
        let expected = if wf < 768.0 {
            DeviceClass::Mobile
        } else if wf < 1024.0 {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        };
        assert_eq!(device, expected, "wrong class at width {w}");
    }
}

#[test]
fn derived_values_per_device() {
    let mobile = classify(400.0, 800.0);
    let tablet = classify(800.0, 800.0);
    let desktop = classify(1440.0, 900.0);

    assert_eq!(mobile.scale_factor(), 0.6);
    assert_eq!(tablet.scale_factor(), 0.8);
    assert_eq!(desktop.scale_factor(), 1.0);

    // particle budget is halved on mobile
    assert_eq!(mobile.particle_count(), 10);
    assert_eq!(tablet.particle_count(), 20);
    assert_eq!(desktop.particle_count(), 20);

    assert_eq!(mobile.fov_deg(), 70.0);
    assert_eq!(desktop.fov_deg(), 50.0);

    assert!(mobile.is_compact());
    assert!(!tablet.is_compact());
    assert!(!desktop.is_compact());
}

#[test]
fn default_viewport_is_desktop() {
    let vp = ViewportState::default();
    assert_eq!(vp.device, DeviceClass::Desktop);
}

#[test]
fn shared_viewport_notifies_subscribers() {
    let mut shared = SharedViewport::new(classify(1440.0, 900.0));
    let seen: Rc<RefCell<Vec<DeviceClass>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_sub = seen.clone();
    shared.subscribe(move |vp| seen_sub.borrow_mut().push(vp.device));

    shared.set(400.0, 700.0);
    shared.set(900.0, 700.0);

    assert_eq!(
        *seen.borrow(),
        vec![DeviceClass::Mobile, DeviceClass::Tablet]
    );
    assert_eq!(shared.get().device, DeviceClass::Tablet);
}

#[test]
fn shared_viewport_last_write_wins() {
    let mut shared = SharedViewport::new(ViewportState::default());
    // a burst of resize events; only the final value matters
    for w in [300.0, 500.0, 801.0, 1100.0, 640.0] {
        shared.set(w, 700.0);
    }
    assert_eq!(shared.get().width, 640.0);
    assert_eq!(shared.get().device, DeviceClass::Mobile);
}

#[test]
fn shared_viewport_unsubscribe_stops_delivery() {
    let mut shared = SharedViewport::new(ViewportState::default());
    let count = Rc::new(RefCell::new(0usize));
    let count_sub = count.clone();
    let id = shared.subscribe(move |_| *count_sub.borrow_mut() += 1);
    assert_eq!(shared.subscriber_count(), 1);

    shared.set(500.0, 700.0);
    assert!(shared.unsubscribe(id), "first release should succeed");
    shared.set(900.0, 700.0);

    assert_eq!(*count.borrow(), 1, "no delivery after unsubscribe");
    assert!(!shared.unsubscribe(id), "second release is a no-op");
    assert_eq!(shared.subscriber_count(), 0);
}
