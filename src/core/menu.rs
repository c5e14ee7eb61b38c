// Sidebar menu catalog and per-entry visual smoothing.
//
// Every visual property relaxes toward its target by a fixed factor per
// rendered frame (never a hard jump). The active entry is derived from
// the single active-section value, so no two entries can report active
// at once.

use super::constants::*;
use super::sections::SectionId;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct MenuEntry {
    pub section: SectionId,
    pub base_position: Vec3,
    pub base_color: Vec3,
    pub hover_color: Vec3,
    pub emissive: Vec3,
    pub hover_emissive: Vec3,
}

/// The static four-entry catalog, in sidebar top-to-bottom order.
pub fn menu_catalog() -> [MenuEntry; 4] {
    let mut i = 0;
    SectionId::ALL.map(|section| {
        let entry = MenuEntry {
            section,
            base_position: Vec3::from_array(MENU_POSITIONS[i]),
            base_color: Vec3::from_array(MENU_BASE_COLORS[i]),
            hover_color: Vec3::from_array(MENU_HOVER_COLOR),
            emissive: Vec3::from_array(MENU_EMISSIVE_COLORS[i]),
            hover_emissive: Vec3::from_array(MENU_HOVER_EMISSIVE),
        };
        i += 1;
        entry
    })
}

/// Per-frame smoothed visual state of one entry.
#[derive(Clone, Copy, Debug)]
pub struct MenuVisual {
    pub scale: f32,
    pub label_color: Vec3,
    pub glow_opacity: f32,
}

impl Default for MenuVisual {
    fn default() -> Self {
        Self {
            scale: MENU_SCALE_IDLE,
            label_color: Vec3::ONE,
            glow_opacity: MENU_GLOW_IDLE,
        }
    }
}

/// Scroll the page to a section after a short propagation delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    pub offset_px: f32,
    pub delay_ms: u32,
}

pub struct MenuAnimator {
    entries: [MenuEntry; 4],
    visuals: [MenuVisual; 4],
    hovered: Option<SectionId>,
    slide_x: f32,
}

impl MenuAnimator {
    pub fn new() -> Self {
        Self {
            entries: menu_catalog(),
            visuals: [MenuVisual::default(); 4],
            hovered: None,
            // starts off-screen; slides in once the sidebar opens
            slide_x: SIDEBAR_SLIDE_CLOSED_X,
        }
    }

    #[inline]
    pub fn entries(&self) -> &[MenuEntry; 4] {
        &self.entries
    }

    #[inline]
    pub fn visual(&self, section: SectionId) -> MenuVisual {
        self.visuals[section.index()]
    }

    #[inline]
    pub fn hovered(&self) -> Option<SectionId> {
        self.hovered
    }

    pub fn set_hovered(&mut self, section: Option<SectionId>) {
        self.hovered = section;
    }

    /// Menu group x offset from the sidebar slide animation.
    #[inline]
    pub fn slide_x(&self) -> f32 {
        self.slide_x
    }

    /// One smoothing step per rendered frame.
    pub fn advance(&mut self, active: SectionId, sidebar_open: bool, mobile: bool) {
        for (entry, visual) in self.entries.iter().zip(self.visuals.iter_mut()) {
            let is_active = entry.section == active;
            let is_hovered = self.hovered == Some(entry.section);

            let target_scale = if is_active {
                MENU_SCALE_ACTIVE
            } else if is_hovered {
                MENU_SCALE_HOVER
            } else {
                MENU_SCALE_IDLE
            };
            let target_glow = if is_active {
                MENU_GLOW_ACTIVE
            } else if is_hovered {
                MENU_GLOW_HOVER
            } else {
                MENU_GLOW_IDLE
            };
            let target_color = if is_active {
                Vec3::from_array(MENU_LABEL_ACTIVE_COLOR)
            } else if is_hovered {
                Vec3::from_array(MENU_LABEL_HOVER_COLOR)
            } else {
                entry.base_color
            };

            visual.scale = step(visual.scale, target_scale);
            visual.glow_opacity = step(visual.glow_opacity, target_glow);
            visual.label_color = visual
                .label_color
                .lerp(target_color, VISUAL_LERP_PER_FRAME);
        }

        let slide_target = if sidebar_open {
            SIDEBAR_SLIDE_OPEN_X
        } else if mobile {
            SIDEBAR_SLIDE_CLOSED_X_MOBILE
        } else {
            SIDEBAR_SLIDE_CLOSED_X
        };
        self.slide_x = step(self.slide_x, slide_target);
    }

    /// Click on an entry: the caller applies the selection, then executes
    /// the returned smooth scroll once the delay elapses.
    pub fn click(&self, section: SectionId) -> ScrollRequest {
        ScrollRequest {
            section,
            offset_px: SCROLL_OFFSET_PX,
            delay_ms: SCROLL_DELAY_MS,
        }
    }
}

impl Default for MenuAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn step(current: f32, target: f32) -> f32 {
    current + (target - current) * VISUAL_LERP_PER_FRAME
}
