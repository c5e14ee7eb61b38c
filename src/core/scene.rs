// Top-level scene state machine.
//
// Holds the current mode, the active content section, the sidebar-open
// flag and the camera target, and turns events from the other components
// into mode changes. Intro is the initial mode; Transitioning is entered
// exactly once and exits only to Sidebar, which is terminal for the
// session.

use super::constants::*;
use super::sections::SectionId;
use super::transition::{TransitionOrchestrator, TransitionSignal, TransitionUpdate};
use super::viewport::{DeviceClass, ViewportState};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMode {
    Intro,
    Transitioning,
    Sidebar,
}

/// Camera target derived from (mode, device). The rendered distance
/// relaxes toward this with the usual per-frame factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub distance: f32,
    pub fov_deg: f32,
}

impl CameraRig {
    /// One frame-coupled smoothing step of the rendered distance.
    #[inline]
    pub fn smooth(current: f32, target: f32) -> f32 {
        current + (target - current) * VISUAL_LERP_PER_FRAME
    }
}

pub struct SceneStateMachine {
    mode: SceneMode,
    viewport: ViewportState,
    active_section: SectionId,
    sidebar_open: bool,
    transition: Option<TransitionOrchestrator>,
}

impl SceneStateMachine {
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            mode: SceneMode::Intro,
            viewport,
            active_section: SectionId::About,
            sidebar_open: false,
            transition: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    #[inline]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[inline]
    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    #[inline]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// The compact-layout flag the content sections receive.
    #[inline]
    pub fn compact_layout(&self) -> bool {
        self.viewport.is_compact()
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    /// Begin the intro-to-sidebar transition. A trigger while already
    /// transitioning (or after) is an ignored no-op; returns whether the
    /// sequence actually started.
    pub fn start_transition(&mut self, seed: u64) -> bool {
        if self.mode != SceneMode::Intro {
            return false;
        }
        self.mode = SceneMode::Transitioning;
        self.transition = Some(TransitionOrchestrator::new(seed));
        true
    }

    /// Drive the in-flight transition by a wall-clock delta. On completion
    /// the mode flips to Sidebar, the camera target moves in, and the
    /// sidebar auto-opens except on mobile. Returns `None` outside
    /// Transitioning mode.
    pub fn advance_transition(&mut self, dt: Duration) -> Option<TransitionUpdate> {
        let transition = self.transition.as_mut()?;
        let update = transition.advance(dt);
        if update.completed {
            self.transition = None;
            self.mode = SceneMode::Sidebar;
            self.sidebar_open = self.viewport.device != DeviceClass::Mobile;
        }
        Some(update)
    }

    /// Current output signals; {0, 0} outside Transitioning mode.
    pub fn transition_signal(&self) -> TransitionSignal {
        self.transition
            .as_ref()
            .map(|t| t.signal())
            .unwrap_or_default()
    }

    /// Explicit user selection of a menu entry. Takes precedence until the
    /// next visibility update supersedes it.
    pub fn select_section(&mut self, section: SectionId) {
        self.active_section = section;
    }

    /// Visibility tracker result for one observation batch. `None` (no
    /// qualifying region) leaves the active section unchanged.
    pub fn observe_visibility(&mut self, most_visible: Option<SectionId>) {
        if let Some(section) = most_visible {
            self.active_section = section;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn camera_target(&self) -> CameraRig {
        let idx = self.viewport.device.index();
        let distance = match self.mode {
            // camera only moves in once the transition has resolved
            SceneMode::Intro | SceneMode::Transitioning => INTRO_CAMERA_Z[idx],
            SceneMode::Sidebar => SIDEBAR_CAMERA_Z[idx],
        };
        CameraRig {
            distance,
            fov_deg: self.viewport.fov_deg(),
        }
    }
}
