//! Section visibility observation transport.
//!
//! Wraps an IntersectionObserver as a restartable capability: `start`
//! queries the mounted section regions and begins feeding observation
//! batches into the pure max-ratio selector, `stop` disconnects and drops
//! the callback so nothing leaks across mode switches. A region missing
//! from the DOM is simply never observed.

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::constants::VISIBILITY_THRESHOLD;
use crate::core::{most_visible, RegionObservation, SceneStateMachine, SectionId};
use crate::dom;

pub struct SectionObserver {
    scene: Rc<RefCell<SceneStateMachine>>,
    lookup: FnvHashMap<String, SectionId>,
    observer: Option<web::IntersectionObserver>,
    // kept alive for the lifetime of the observer
    callback: Option<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array)>>,
}

impl SectionObserver {
    pub fn new(scene: Rc<RefCell<SceneStateMachine>>) -> Self {
        let mut lookup = FnvHashMap::default();
        for section in SectionId::ALL {
            lookup.insert(section.dom_id().to_string(), section);
        }
        Self {
            scene,
            lookup,
            observer: None,
            callback: None,
        }
    }

    /// (Re)start observation over whatever section regions are mounted.
    pub fn start(&mut self) {
        self.stop();

        let scene = self.scene.clone();
        let lookup = self.lookup.clone();
        let callback =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |entries: js_sys::Array| {
                let viewport_height = web::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;

                let mut batch: SmallVec<[RegionObservation; 4]> = SmallVec::new();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(&section) = lookup.get(&entry.target().id()) else {
                        continue;
                    };
                    let rect = entry.bounding_client_rect();
                    batch.push(RegionObservation {
                        section,
                        top: rect.top() as f32,
                        bottom: rect.bottom() as f32,
                        intersecting: entry.is_intersecting(),
                    });
                }
                scene
                    .borrow_mut()
                    .observe_visibility(most_visible(&batch, viewport_height));
            }) as Box<dyn FnMut(_)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD as f64));
        match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                let mut observed = 0;
                if let Some(document) = dom::window_document() {
                    for section in SectionId::ALL {
                        if let Some(el) = document.get_element_by_id(section.dom_id()) {
                            observer.observe(&el);
                            observed += 1;
                        }
                    }
                }
                log::info!("[observer] tracking {} section regions", observed);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(e) => log::error!("[observer] create failed: {:?}", e),
        }
    }

    pub fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}
