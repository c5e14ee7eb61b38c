//! DOM overlay layer: intro text, the transition glitch/breach chrome,
//! menu labels and the sidebar toggle button.
//!
//! Every update addresses elements by id and silently skips anything the
//! host page has not mounted; degradation is frame-local.

use glam::{Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::constants::BREACH_BANNER_CRACK_THRESHOLD;
use crate::core::intro::IntroPose;
use crate::core::sections::SectionId;
use crate::core::transition::TransitionSignal;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1("hidden");
    }
}

fn style_of(document: &web::Document, element_id: &str) -> Option<web::CssStyleDeclaration> {
    document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
        .map(|el| el.style())
}

fn apply_pose(document: &web::Document, element_id: &str, pose: IntroPose) {
    if let Some(style) = style_of(document, element_id) {
        _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
        _ = style.set_property(
            "transform",
            &format!("translateY({:.1}px)", -pose.y * OVERLAY_PX_PER_UNIT),
        );
    }
}

/// Per-frame intro text choreography.
pub fn update_intro(
    document: &web::Document,
    title: IntroPose,
    subtitle: IntroPose,
    instruction_opacity: f32,
) {
    apply_pose(document, INTRO_TITLE_ID, title);
    apply_pose(document, INTRO_SUBTITLE_ID, subtitle);
    if let Some(style) = style_of(document, INTRO_INSTRUCTION_ID) {
        _ = style.set_property("opacity", &format!("{:.3}", instruction_opacity));
    }
}

pub fn hide_intro(document: &web::Document) {
    hide(document, INTRO_OVERLAY_ID);
}

/// Per-frame transition chrome: the scanline glitch overlay tracks the
/// glitch intensity, the breach banner appears once the crack is half
/// open.
pub fn update_transition(document: &web::Document, signal: TransitionSignal) {
    if let Some(style) = style_of(document, GLITCH_OVERLAY_ID) {
        _ = style.set_property(
            "opacity",
            &format!("{:.3}", (signal.glitch_intensity * 0.5).min(1.0)),
        );
    }
    let crack = signal.crack_progress;
    if crack > BREACH_BANNER_CRACK_THRESHOLD {
        show(document, BREACH_BANNER_ID);
        if let Some(style) = style_of(document, BREACH_BANNER_ID) {
            _ = style.set_property("opacity", &format!("{:.3}", crack));
            _ = style.set_property(
                "text-shadow",
                &format!("0 0 {:.0}px #00ff00", 5.0 + crack * 10.0),
            );
        }
    } else {
        hide(document, BREACH_BANNER_ID);
    }
}

pub fn show_sidebar_toggle(document: &web::Document) {
    show(document, SIDEBAR_TOGGLE_ID);
}

pub fn set_sidebar_toggle_label(document: &web::Document, open: bool) {
    if let Some(el) = document.get_element_by_id(SIDEBAR_TOGGLE_ID) {
        let label = if open { "<<" } else { ">>" };
        if el.text_content().as_deref() != Some(label) {
            el.set_text_content(Some(label));
        }
    }
}

/// Body classes the page layout reads: scene mode, sidebar margin and the
/// compact-layout flag for the content sections.
pub fn apply_layout(document: &web::Document, sidebar_mode: bool, open: bool, compact: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let cl = body.class_list();
    _ = cl.toggle_with_force(CLASS_SIDEBAR_MODE, sidebar_mode);
    _ = cl.toggle_with_force(CLASS_SIDEBAR_OPEN, open);
    _ = cl.toggle_with_force(CLASS_COMPACT, compact);
}

fn label_element_id(section: SectionId) -> &'static str {
    match section {
        SectionId::About => "menu-label-about",
        SectionId::Projects => "menu-label-projects",
        SectionId::Skills => "menu-label-skills",
        SectionId::Contact => "menu-label-contact",
    }
}

/// Position one menu label over its 3D bar. `screen` is in CSS pixels;
/// `None` hides the label (entry behind the camera or menu unmounted).
pub fn place_menu_label(
    document: &web::Document,
    section: SectionId,
    screen: Option<Vec2>,
    color: Vec3,
    scale: f32,
) {
    let id = label_element_id(section);
    let Some(screen) = screen else {
        hide(document, id);
        return;
    };
    show(document, id);
    if let Some(style) = style_of(document, id) {
        _ = style.set_property("left", &format!("{:.0}px", screen.x));
        _ = style.set_property("top", &format!("{:.0}px", screen.y));
        _ = style.set_property(
            "transform",
            &format!("translate(-50%, -50%) scale({:.3})", scale),
        );
        let [r, g, b] = (color * 255.0).to_array().map(|c| c.round() as u8);
        _ = style.set_property("color", &format!("rgb({r}, {g}, {b})"));
    }
}

pub fn hide_menu_labels(document: &web::Document) {
    for section in SectionId::ALL {
        hide(document, label_element_id(section));
    }
}
