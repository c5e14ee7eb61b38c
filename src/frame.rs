use glam::{Mat4, Quat, Vec2, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{intro, post};
use crate::core::{
    CameraRig, JitterClock, MenuAnimator, ParticleField, PixelationDecay, SceneMode,
    SceneStateMachine, SectionId, ViewportState,
};
use crate::observer::SectionObserver;
use crate::{camera, dom, overlay, render};

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneStateMachine>>,
    pub menu: Rc<RefCell<MenuAnimator>>,
    pub particles: Rc<RefCell<ParticleField>>,
    pub observer: Rc<RefCell<SectionObserver>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub rng: StdRng,
    pub pixelation: PixelationDecay,
    pub jitter: JitterClock,
    pub camera_distance: f32,

    pub started_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let document = dom::window_document();

        // Wall-clock transition timing, decoupled from the frame-coupled
        // smoothing below.
        {
            let mut scene = self.scene.borrow_mut();
            if let Some(update) = scene.advance_transition(dt) {
                if update.flash {
                    dom::flash_invert();
                }
                if update.completed {
                    dom::clear_invert();
                    if let Some(doc) = &document {
                        overlay::hide_intro(doc);
                        overlay::show_sidebar_toggle(doc);
                    }
                    self.observer.borrow_mut().start();
                    log::info!("[scene] transition complete; entering sidebar mode");
                }
            }
        }
        let (mode, viewport, active, sidebar_open, signal, rig) = {
            let scene = self.scene.borrow();
            (
                scene.mode(),
                scene.viewport(),
                scene.active_section(),
                scene.sidebar_open(),
                scene.transition_signal(),
                scene.camera_target(),
            )
        };

        // One step per rendered frame for every smoothed visual
        self.particles.borrow_mut().advance(&mut self.rng);
        if mode == SceneMode::Sidebar {
            self.menu
                .borrow_mut()
                .advance(active, sidebar_open, viewport.is_compact());
        }
        self.camera_distance = CameraRig::smooth(self.camera_distance, rig.distance);

        let t = (now - self.started_at).as_secs_f32();
        if let Some(doc) = &document {
            match mode {
                SceneMode::Intro | SceneMode::Transitioning => {
                    overlay::update_intro(
                        doc,
                        intro::title_pose(t, viewport.is_compact()),
                        intro::subtitle_pose(t, viewport.is_compact()),
                        intro::instruction_opacity(t),
                    );
                    overlay::hide_menu_labels(doc);
                }
                SceneMode::Sidebar => {
                    self.place_labels(doc, viewport, rig.fov_deg.to_radians());
                    overlay::set_sidebar_toggle_label(doc, sidebar_open);
                }
            }
            overlay::update_transition(doc, signal);
            overlay::apply_layout(
                doc,
                mode == SceneMode::Sidebar,
                sidebar_open,
                viewport.is_compact(),
            );
        }

        let desktop_pixelation = self.pixelation.advance(dt);
        let jitter = self.jitter.advance(dt);
        let params = post::compose(
            mode == SceneMode::Transitioning,
            viewport.device,
            desktop_pixelation,
            signal,
            jitter,
        );

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let instances = build_instances(
                mode,
                viewport,
                &self.particles.borrow(),
                &self.menu.borrow(),
                active,
                intro::backdrop_tilt(t),
            );
            if let Err(e) = gpu.render(
                dt.as_secs_f32(),
                self.camera_distance,
                rig.fov_deg.to_radians(),
                &instances,
                &params,
            ) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Project each menu bar to CSS pixels and pin its DOM label there.
    fn place_labels(&self, doc: &web::Document, viewport: ViewportState, fov_y: f32) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0) as f32;
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let menu = self.menu.borrow();
        let sf = viewport.scale_factor();
        let slide = Vec3::new(menu.slide_x(), 0.0, 0.0);
        for entry in menu.entries() {
            let visual = menu.visual(entry.section);
            let world = (entry.base_position + slide) * sf + Vec3::new(0.0, 0.0, 0.03);
            let screen = camera::world_to_screen(width, height, world, self.camera_distance, fov_y)
                .map(|p: Vec2| p / dpr.max(0.1));
            overlay::place_menu_label(doc, entry.section, screen, visual.label_color, visual.scale);
        }
    }
}

fn build_instances(
    mode: SceneMode,
    viewport: ViewportState,
    particles: &ParticleField,
    menu: &MenuAnimator,
    active: SectionId,
    backdrop_tilt: f32,
) -> Vec<render::Instance> {
    let sf = viewport.scale_factor();
    let mut out = Vec::with_capacity(particles.len() + 16);

    match mode {
        SceneMode::Intro | SceneMode::Transitioning => {
            out.push(render::Instance::new(
                Mat4::from_scale_rotation_translation(
                    Vec3::new(BACKDROP_SCALE[0] * sf, BACKDROP_SCALE[1] * sf, 1.0),
                    Quat::from_rotation_z(backdrop_tilt),
                    Vec3::new(0.0, 0.0, BACKDROP_POSITION_Z * sf),
                ),
                Vec3::from_array(BACKDROP_COLOR),
                1.0,
            ));
        }
        SceneMode::Sidebar => {
            let slide = Vec3::new(menu.slide_x(), 0.0, 0.0);
            out.push(render::Instance::new(
                Mat4::from_scale_rotation_translation(
                    Vec3::new(SIDEBAR_BG_SCALE[0] * sf, SIDEBAR_BG_SCALE[1] * sf, 1.0),
                    Quat::IDENTITY,
                    (slide + Vec3::new(0.0, 0.0, SIDEBAR_BG_Z)) * sf,
                ),
                Vec3::from_array(SIDEBAR_BG_COLOR),
                SIDEBAR_BG_OPACITY,
            ));
        }
    }

    for p in particles.particles() {
        out.push(render::Instance::new(
            Mat4::from_scale_rotation_translation(
                Vec3::splat(PARTICLE_BOX_SIZE * p.size),
                Quat::from_euler(glam::EulerRot::XYZ, p.rotation.x, p.rotation.y, p.rotation.z),
                p.position,
            ),
            Vec3::from_array(PARTICLE_COLOR),
            PARTICLE_OPACITY,
        ));
    }

    if mode == SceneMode::Sidebar {
        let slide = Vec3::new(menu.slide_x(), 0.0, 0.0);
        let bar_width = if viewport.is_compact() {
            MENU_BAR_WIDTH_MOBILE
        } else {
            MENU_BAR_WIDTH
        };
        for entry in menu.entries() {
            let visual = menu.visual(entry.section);
            let is_active = entry.section == active;
            let pos = (entry.base_position + slide) * sf;

            out.push(render::Instance::new(
                Mat4::from_scale_rotation_translation(
                    Vec3::new(MENU_GLOW_SCALE[0] * sf, MENU_GLOW_SCALE[1] * sf, 1.0),
                    Quat::IDENTITY,
                    pos + Vec3::new(0.0, 0.0, MENU_GLOW_Z * sf),
                ),
                if is_active {
                    entry.hover_emissive
                } else {
                    entry.emissive
                },
                visual.glow_opacity,
            ));
            out.push(render::Instance::new(
                Mat4::from_scale_rotation_translation(
                    Vec3::new(bar_width * visual.scale * sf, MENU_BAR_HEIGHT * sf, 1.0),
                    Quat::IDENTITY,
                    pos,
                ),
                if is_active {
                    entry.hover_color
                } else {
                    entry.base_color
                },
                1.0,
            ));
        }
    }

    out
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
