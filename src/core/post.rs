// Composition of the post-processing parameter set.
//
// This is the full numeric contract handed to the rendering backend each
// frame: the always-on retro stack (pixelation, scanlines, noise, bloom)
// plus the transition-derived glitch/chromatic/extra-bloom layers.

use super::constants::*;
use super::transition::TransitionSignal;
use super::viewport::DeviceClass;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostParams {
    pub pixelation: f32,
    pub scanline_density: f32,
    pub scanline_opacity: f32,
    pub noise_opacity: f32,
    pub bloom_intensity: f32,
    pub bloom_threshold: f32,
    pub glitch_strength: f32,
    pub glitch_secondary: f32,
    pub chromatic_offset: [f32; 2],
    pub chromatic_opacity: f32,
    pub extra_noise_opacity: f32,
    pub extra_bloom_intensity: f32,
    pub extra_bloom_threshold: f32,
}

/// Compose the frame's parameter set. `desktop_pixelation` is the slowly
/// decaying desktop granularity; `jitter` the current chaos value in
/// [0, 1].
pub fn compose(
    transitioning: bool,
    device: DeviceClass,
    desktop_pixelation: f32,
    signal: TransitionSignal,
    jitter: f32,
) -> PostParams {
    let mobile = device == DeviceClass::Mobile;
    let crack = signal.crack_progress;

    let pixelation = if transitioning {
        PIXELATION_TRANSITION
    } else if mobile {
        PIXELATION_MOBILE
    } else {
        desktop_pixelation
    };
    let noise_opacity = if transitioning {
        NOISE_OPACITY_TRANSITION
    } else if mobile {
        NOISE_OPACITY_MOBILE
    } else {
        NOISE_OPACITY
    };
    let bloom_intensity = if transitioning {
        BLOOM_INTENSITY_TRANSITION
    } else if mobile {
        BLOOM_INTENSITY_MOBILE
    } else {
        BLOOM_INTENSITY
    };

    PostParams {
        pixelation,
        scanline_density: SCANLINE_DENSITY,
        scanline_opacity: if mobile {
            SCANLINE_OPACITY_MOBILE
        } else {
            SCANLINE_OPACITY
        },
        noise_opacity,
        bloom_intensity,
        bloom_threshold: BLOOM_THRESHOLD,
        glitch_strength: signal.glitch_intensity * GLITCH_PRIMARY_GAIN,
        glitch_secondary: signal.glitch_intensity
            * if jitter > 0.5 {
                GLITCH_SECONDARY_HI
            } else {
                GLITCH_SECONDARY_LO
            },
        chromatic_offset: [
            crack * CHROMATIC_CRACK_X + jitter * CHROMATIC_JITTER,
            crack * CHROMATIC_CRACK_Y - jitter * CHROMATIC_JITTER,
        ],
        chromatic_opacity: crack * CHROMATIC_OPACITY_GAIN,
        extra_noise_opacity: if crack > EXTRA_NOISE_CRACK_THRESHOLD {
            crack * jitter
        } else {
            0.0
        },
        extra_bloom_intensity: if crack > EXTRA_BLOOM_CRACK_THRESHOLD {
            EXTRA_BLOOM_BASE + jitter * EXTRA_BLOOM_JITTER_SPAN
        } else {
            0.0
        },
        extra_bloom_threshold: EXTRA_BLOOM_THRESHOLD,
    }
}

/// Desktop pixelation granularity, stepping down from the boot value to
/// its floor on a fixed interval for the gradual sharpen-in effect.
pub struct PixelationDecay {
    value: f32,
    acc: Duration,
}

impl PixelationDecay {
    pub fn new() -> Self {
        Self {
            value: PIXELATION_DESKTOP_START,
            acc: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.acc += dt;
        let interval = Duration::from_millis(PIXELATION_DECAY_INTERVAL_MS);
        while self.acc >= interval {
            self.acc -= interval;
            if self.value > PIXELATION_DESKTOP_FLOOR {
                self.value =
                    (self.value - PIXELATION_DECAY_STEP).max(PIXELATION_DESKTOP_FLOOR);
            }
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Default for PixelationDecay {
    fn default() -> Self {
        Self::new()
    }
}

/// A uniform chaos value refreshed on a fixed interval, feeding the
/// secondary glitch layer and the chromatic wobble.
pub struct JitterClock {
    value: f32,
    acc: Duration,
    rng: StdRng,
}

impl JitterClock {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            value: rng.gen(),
            acc: Duration::ZERO,
            rng,
        }
    }

    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.acc += dt;
        let interval = Duration::from_millis(JITTER_REFRESH_MS);
        while self.acc >= interval {
            self.acc -= interval;
            self.value = self.rng.gen();
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}
