// Content section identity and the most-visible-region selection.
//
// The observation transport (IntersectionObserver on the web) lives in
// the frontend; this module only sees plain observation batches, so the
// selection rule is testable on the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Projects => 1,
            SectionId::Skills => 2,
            SectionId::Contact => 3,
        }
    }

    /// The page region element id this section tracks.
    #[inline]
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        match id {
            "about" => Some(SectionId::About),
            "projects" => Some(SectionId::Projects),
            "skills" => Some(SectionId::Skills),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "ABOUT",
            SectionId::Projects => "PROJECTS",
            SectionId::Skills => "SKILLS",
            SectionId::Contact => "CONTACT",
        }
    }
}

/// One region's geometry at observation time, in viewport-relative pixels.
#[derive(Clone, Copy, Debug)]
pub struct RegionObservation {
    pub section: SectionId,
    pub top: f32,
    pub bottom: f32,
    pub intersecting: bool,
}

impl RegionObservation {
    /// Fraction of the region's own height currently inside the viewport.
    /// Negative when the region is fully outside; callers only compare.
    pub fn visibility_ratio(&self, viewport_height: f32) -> f32 {
        let height = self.bottom - self.top;
        if height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom.min(viewport_height) - self.top.max(0.0);
        visible / height
    }
}

/// Pick the intersecting region with the strictly largest visibility
/// ratio. Ties keep the first region in observation order. `None` means
/// the caller leaves the previously active section unchanged; this
/// selector never clears.
pub fn most_visible(
    observations: &[RegionObservation],
    viewport_height: f32,
) -> Option<SectionId> {
    let mut best_ratio = 0.0_f32;
    let mut best = None;
    for obs in observations {
        let ratio = obs.visibility_ratio(viewport_height);
        if obs.intersecting && ratio > best_ratio {
            best_ratio = ratio;
            best = Some(obs.section);
        }
    }
    best
}
