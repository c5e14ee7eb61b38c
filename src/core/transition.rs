// The intro-to-sidebar breach transition.
//
// An explicit six-phase state machine driven by a single wall-clock tick
// source. Each phase has a fixed duration and a rule for the two output
// signals the post-processing stack consumes. Once started the sequence
// always runs to completion; there is no cancellation path and re-entry
// is handled one level up by the scene state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Subtle glitches building suspense.
    BuildUp,
    /// First hard glitch spike.
    Spike,
    /// Brief calm before the crack.
    Calm,
    /// The crack opens under heavy glitching.
    Crack,
    /// Maximum intensity; occasional full-screen invert flashes.
    Peak,
    /// Everything fades back out.
    Resolve,
}

impl TransitionPhase {
    pub const SEQUENCE: [TransitionPhase; 6] = [
        TransitionPhase::BuildUp,
        TransitionPhase::Spike,
        TransitionPhase::Calm,
        TransitionPhase::Crack,
        TransitionPhase::Peak,
        TransitionPhase::Resolve,
    ];

    pub fn duration(self) -> Duration {
        Duration::from_millis(match self {
            TransitionPhase::BuildUp => 1200,
            TransitionPhase::Spike => 200,
            TransitionPhase::Calm => 300,
            TransitionPhase::Crack => 800,
            TransitionPhase::Peak => 400,
            TransitionPhase::Resolve => 800,
        })
    }

    pub fn next(self) -> Option<TransitionPhase> {
        match self {
            TransitionPhase::BuildUp => Some(TransitionPhase::Spike),
            TransitionPhase::Spike => Some(TransitionPhase::Calm),
            TransitionPhase::Calm => Some(TransitionPhase::Crack),
            TransitionPhase::Crack => Some(TransitionPhase::Peak),
            TransitionPhase::Peak => Some(TransitionPhase::Resolve),
            TransitionPhase::Resolve => None,
        }
    }
}

/// Full sequence length (sum of all phase durations).
pub fn total_duration() -> Duration {
    TransitionPhase::SEQUENCE
        .iter()
        .map(|p| p.duration())
        .sum()
}

/// The numeric contract with the rendering backend during the transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionSignal {
    pub glitch_intensity: f32,
    pub crack_progress: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionUpdate {
    pub signal: TransitionSignal,
    /// Fire a short full-screen invert flash this tick.
    pub flash: bool,
    pub completed: bool,
}

pub struct TransitionOrchestrator {
    phase: TransitionPhase,
    elapsed_in_phase: Duration,
    signal: TransitionSignal,
    rng: StdRng,
    completed: bool,
}

impl TransitionOrchestrator {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: TransitionPhase::BuildUp,
            elapsed_in_phase: Duration::ZERO,
            signal: TransitionSignal::default(),
            rng: StdRng::seed_from_u64(seed),
            completed: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[inline]
    pub fn signal(&self) -> TransitionSignal {
        self.signal
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Advance by a wall-clock delta. Remainders carry across phase
    /// boundaries so phases never overlap and never stall; a delta larger
    /// than the rest of the sequence completes it in one call.
    pub fn advance(&mut self, dt: Duration) -> TransitionUpdate {
        if self.completed {
            return TransitionUpdate {
                signal: self.signal,
                flash: false,
                completed: true,
            };
        }

        let mut remaining = dt;
        loop {
            let left = self.phase.duration() - self.elapsed_in_phase;
            if remaining < left {
                self.elapsed_in_phase += remaining;
                break;
            }
            remaining -= left;
            match self.phase.next() {
                Some(next) => {
                    self.phase = next;
                    self.elapsed_in_phase = Duration::ZERO;
                }
                None => {
                    self.completed = true;
                    self.signal = TransitionSignal::default();
                    return TransitionUpdate {
                        signal: self.signal,
                        flash: false,
                        completed: true,
                    };
                }
            }
        }

        let progress =
            self.elapsed_in_phase.as_secs_f32() / self.phase.duration().as_secs_f32();
        let mut flash = false;
        self.signal = match self.phase {
            TransitionPhase::BuildUp => {
                let spike = if self.rng.gen_bool(0.2) { 3.0 } else { 1.0 };
                TransitionSignal {
                    glitch_intensity: self.rng.gen_range(0.1..0.3) * spike,
                    crack_progress: 0.0,
                }
            }
            TransitionPhase::Spike => TransitionSignal {
                glitch_intensity: 1.0,
                crack_progress: 0.0,
            },
            TransitionPhase::Calm => TransitionSignal {
                glitch_intensity: 0.2,
                crack_progress: 0.0,
            },
            TransitionPhase::Crack => TransitionSignal {
                glitch_intensity: 0.8 + self.rng.gen_range(0.0..0.5),
                crack_progress: progress,
            },
            TransitionPhase::Peak => {
                flash = self.rng.gen_bool(0.3);
                TransitionSignal {
                    glitch_intensity: if self.rng.gen_bool(0.5) { 2.0 } else { 1.0 },
                    crack_progress: 1.0,
                }
            }
            TransitionPhase::Resolve => TransitionSignal {
                glitch_intensity: 2.0 * (1.0 - progress),
                crack_progress: 1.0 - progress,
            },
        };

        TransitionUpdate {
            signal: self.signal,
            flash,
            completed: false,
        }
    }
}
