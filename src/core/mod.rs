pub mod constants;
pub mod intro;
pub mod menu;
pub mod particles;
pub mod post;
pub mod scene;
pub mod sections;
pub mod transition;
pub mod viewport;

pub use menu::{MenuAnimator, MenuEntry, MenuVisual, ScrollRequest};
pub use particles::{Particle, ParticleField};
pub use post::{compose, JitterClock, PixelationDecay, PostParams};
pub use scene::{CameraRig, SceneMode, SceneStateMachine};
pub use transition::{TransitionOrchestrator, TransitionPhase, TransitionSignal, TransitionUpdate};
pub use sections::{most_visible, RegionObservation, SectionId};
pub use viewport::{classify, DeviceClass, SharedViewport, SubscriptionId, ViewportState};
