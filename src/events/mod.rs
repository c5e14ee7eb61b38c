pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, PointerWiring};

/// Seed derived from browser entropy; per-subsystem RNGs stay seeded and
/// reproducible once constructed.
#[inline]
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64 // 2^53
}
