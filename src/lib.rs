#![cfg(target_arch = "wasm32")]
//! Browser entry point: wires the DOM, the shared viewport value, the
//! event listeners and the render loop around the pure scene core.

use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod observer;
mod overlay;
mod render;

use crate::constants::{CANVAS_ID, SIDEBAR_TOGGLE_ID};
use crate::core::{
    JitterClock, MenuAnimator, ParticleField, PixelationDecay, SceneStateMachine, SharedViewport,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_window_resize(
    canvas: &web::HtmlCanvasElement,
    viewport: Rc<RefCell<SharedViewport>>,
) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let (w, h) = dom::window_inner_size();
        // last write wins; no debounce needed
        viewport.borrow_mut().set(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // The single process-wide viewport value; the resize listener is its
    // only writer.
    let (w, h) = dom::window_inner_size();
    let initial = core::classify(w, h);
    let shared_viewport = Rc::new(RefCell::new(SharedViewport::new(initial)));
    log::info!(
        "[viewport] {}x{} -> {:?}",
        initial.width,
        initial.height,
        initial.device
    );

    let scene = Rc::new(RefCell::new(SceneStateMachine::new(initial)));
    let menu = Rc::new(RefCell::new(MenuAnimator::new()));
    let seed = events::random_seed();
    let mut field_rng = StdRng::seed_from_u64(seed);
    let particles = Rc::new(RefCell::new(ParticleField::new(
        initial.particle_count(),
        1.0,
        Vec3::ZERO,
        &mut field_rng,
    )));

    // Subscribers: the scene follows every reclassification; the particle
    // field rebuilds only when the budget actually changes.
    {
        let scene_sub = scene.clone();
        let particles_sub = particles.clone();
        let mut rebuild_rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        shared_viewport.borrow_mut().subscribe(move |vp| {
            scene_sub.borrow_mut().set_viewport(vp);
            let mut field = particles_sub.borrow_mut();
            if field.len() != vp.particle_count() {
                *field = ParticleField::new(vp.particle_count(), 1.0, Vec3::ZERO, &mut rebuild_rng);
                log::info!("[particles] rebuilt with {} boxes", field.len());
            }
        });
    }
    wire_window_resize(&canvas, shared_viewport.clone());

    let section_observer = Rc::new(RefCell::new(observer::SectionObserver::new(scene.clone())));

    events::wire_global_keydown(scene.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        menu: menu.clone(),
    });

    {
        let scene_btn = scene.clone();
        dom::add_click_listener(&document, SIDEBAR_TOGGLE_ID, move || {
            let mut s = scene_btn.borrow_mut();
            s.toggle_sidebar();
            log::info!("[sidebar] open={}", s.sidebar_open());
        });
    }

    let gpu = frame::init_gpu(&canvas).await;
    let camera_distance = scene.borrow().camera_target().distance;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        menu,
        particles,
        observer: section_observer,
        canvas,
        gpu,
        rng: StdRng::seed_from_u64(seed ^ 0x2545_F491_4F6C_DD1D),
        pixelation: PixelationDecay::new(),
        jitter: JitterClock::new(seed ^ 0xDA94_2042_E4DD_58B5),
        camera_distance,
        started_at: Instant::now(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
