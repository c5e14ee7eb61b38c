// Window dimensions to device class, and the single shared reactive
// viewport value the rest of the scene reads.
//
// Classification is pure and deterministic; the shared value exists so
// that components subscribe explicitly instead of reading ambient
// globals. The resize listener is the only writer (last-write-wins).

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Index into the mobile/tablet/desktop tuning tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            DeviceClass::Mobile => 0,
            DeviceClass::Tablet => 1,
            DeviceClass::Desktop => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub device: DeviceClass,
}

/// Map window dimensions to a viewport state. Pure; recomputed on every
/// resize event.
pub fn classify(width: f32, height: f32) -> ViewportState {
    let device = if width < MOBILE_MAX_WIDTH {
        DeviceClass::Mobile
    } else if width < TABLET_MAX_WIDTH {
        DeviceClass::Tablet
    } else {
        DeviceClass::Desktop
    };
    ViewportState {
        width,
        height,
        device,
    }
}

impl ViewportState {
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        match self.device {
            DeviceClass::Mobile => MOBILE_SCALE,
            DeviceClass::Tablet => TABLET_SCALE,
            DeviceClass::Desktop => DESKTOP_SCALE,
        }
    }

    /// Background particle budget; halved on mobile to bound GPU cost.
    #[inline]
    pub fn particle_count(&self) -> usize {
        if self.device == DeviceClass::Mobile {
            PARTICLE_COUNT / 2
        } else {
            PARTICLE_COUNT
        }
    }

    #[inline]
    pub fn fov_deg(&self) -> f32 {
        if self.device == DeviceClass::Mobile {
            FOV_MOBILE_DEG
        } else {
            FOV_DEG
        }
    }

    /// The "is compact layout" flag handed to the content sections.
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.device == DeviceClass::Mobile
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        // Pre-resize fallback, matches a typical desktop window
        classify(1200.0, 800.0)
    }
}

pub type SubscriptionId = usize;

/// Process-wide reactive viewport value with an explicit
/// subscribe/unsubscribe lifecycle. Subscribers are notified with the new
/// state after every write; they must not write back into the value from
/// inside the callback.
pub struct SharedViewport {
    state: ViewportState,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(ViewportState)>)>,
}

impl SharedViewport {
    pub fn new(state: ViewportState) -> Self {
        Self {
            state,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> ViewportState {
        self.state
    }

    /// Reclassify from fresh window dimensions and notify subscribers.
    pub fn set(&mut self, width: f32, height: f32) {
        self.state = classify(width, height);
        let state = self.state;
        for (_, f) in &mut self.subscribers {
            f(state);
        }
    }

    pub fn subscribe(&mut self, f: impl FnMut(ViewportState) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false when the id was already released.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
