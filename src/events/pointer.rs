use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use glam::Vec3;

use crate::camera;
use crate::constants::PICK_SPHERE_RADIUS;
use crate::core::{MenuAnimator, SceneMode, SceneStateMachine, SectionId};
use crate::dom;
use crate::input;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneStateMachine>>,
    pub menu: Rc<RefCell<MenuAnimator>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Ray-pick the menu entry under the pointer, through the current camera
/// rig and sidebar slide offset.
fn pick_entry(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    scene: &SceneStateMachine,
    menu: &MenuAnimator,
) -> Option<SectionId> {
    let rig = scene.camera_target();
    let (ro, rd) = camera::screen_to_world_ray(
        canvas.width() as f32,
        canvas.height() as f32,
        sx,
        sy,
        rig.distance,
        rig.fov_deg.to_radians(),
    );
    let sf = scene.viewport().scale_factor();
    let slide = Vec3::new(menu.slide_x(), 0.0, 0.0);

    let mut best: Option<(SectionId, f32)> = None;
    for entry in menu.entries() {
        let center = (entry.base_position + slide) * sf;
        if let Some(t) = input::ray_sphere(ro, rd, center, PICK_SPHERE_RADIUS * sf) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((entry.section, t)),
            }
        }
    }
    best.map(|(section, _)| section)
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let scene = w.scene.borrow();
        // hover tracking only matters once the menu is on screen
        if scene.mode() == SceneMode::Sidebar {
            let pos = input::pointer_canvas_px(&ev, &w.canvas);
            let mut menu = w.menu.borrow_mut();
            let hover = pick_entry(&w.canvas, pos.x, pos.y, &scene, &menu);
            menu.set_hovered(hover);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut scene = w.scene.borrow_mut();
        match scene.mode() {
            SceneMode::Intro => {
                // click or tap anywhere within the intro scene starts the run
                if scene.start_transition(super::random_seed()) {
                    log::info!("[click] starting transition");
                }
                ev.prevent_default();
            }
            SceneMode::Transitioning => {}
            SceneMode::Sidebar => {
                let hovered = w.menu.borrow().hovered();
                if let Some(section) = hovered {
                    scene.select_section(section);
                    let request = w.menu.borrow().click(section);
                    log::info!("[click] menu entry {:?}", section);
                    dom::set_timeout(
                        move || {
                            if let Some(doc) = dom::window_document() {
                                dom::scroll_to_section(
                                    &doc,
                                    request.section.dom_id(),
                                    request.offset_px,
                                );
                            }
                        },
                        request.delay_ms,
                    );
                    ev.prevent_default();
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
