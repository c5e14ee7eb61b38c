use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{SceneMode, SceneStateMachine};

/// Any key starts the portfolio while the intro is showing. The scene
/// machine ignores repeats once the transition is in flight.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<SceneStateMachine>>) {
    let mut scene = scene.borrow_mut();
    if scene.mode() != SceneMode::Intro {
        return;
    }
    if scene.start_transition(super::random_seed()) {
        log::info!("[keys] '{}' pressed; starting transition", ev.key());
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneStateMachine>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
