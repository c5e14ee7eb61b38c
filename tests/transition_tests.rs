// Host-side tests for the six-phase transition orchestrator. The main
// crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod transition {
    include!("../src/core/transition.rs");
}

use std::time::Duration;
use transition::*;

const FRAME: Duration = Duration::from_millis(16);

fn phase_index(phase: TransitionPhase) -> usize {
    TransitionPhase::SEQUENCE
        .iter()
        .position(|p| *p == phase)
        .unwrap()
}

#[test]
fn phase_table_matches_design() {
    let durations_ms: Vec<u128> = TransitionPhase::SEQUENCE
        .iter()
        .map(|p| p.duration().as_millis())
        .collect();
    assert_eq!(durations_ms, vec![1200, 200, 300, 800, 400, 800]);
    assert_eq!(total_duration(), Duration::from_millis(3700));

    // next() walks the sequence exactly once and terminates
    let mut phase = TransitionPhase::BuildUp;
    let mut visited = vec![phase];
    while let Some(next) = phase.next() {
        phase = next;
        visited.push(phase);
    }
    assert_eq!(visited, TransitionPhase::SEQUENCE.to_vec());
}

#[test]
fn runs_to_completion_and_resets_signals() {
    let mut orchestrator = TransitionOrchestrator::new(7);
    let mut elapsed = Duration::ZERO;
    let mut last_phase = 0usize;
    loop {
        let update = orchestrator.advance(FRAME);
        elapsed += FRAME;
        let idx = phase_index(orchestrator.phase());
        assert!(idx >= last_phase, "phase went backwards");
        last_phase = idx;
        if update.completed {
            break;
        }
        assert!(
            elapsed <= total_duration() + FRAME,
            "did not complete in time"
        );
    }
    assert!(orchestrator.is_completed());
    assert_eq!(orchestrator.signal(), TransitionSignal::default());
}

#[test]
fn completes_for_any_seed() {
    for seed in 0..40 {
        let mut orchestrator = TransitionOrchestrator::new(seed);
        let step = Duration::from_millis(50);
        let mut ticks = 0;
        while !orchestrator.advance(step).completed {
            ticks += 1;
            assert!(ticks < 100, "seed {seed} never completed");
        }
        assert_eq!(orchestrator.signal(), TransitionSignal::default());
    }
}

#[test]
fn signal_bounds_per_phase() {
    let mut orchestrator = TransitionOrchestrator::new(1234);
    let step = Duration::from_millis(10);
    loop {
        let update = orchestrator.advance(step);
        if update.completed {
            break;
        }
        let s = update.signal;
        match orchestrator.phase() {
            TransitionPhase::BuildUp => {
                assert!((0.1..=0.9).contains(&s.glitch_intensity), "{}", s.glitch_intensity);
                assert_eq!(s.crack_progress, 0.0);
            }
            TransitionPhase::Spike => {
                assert_eq!(s.glitch_intensity, 1.0);
                assert_eq!(s.crack_progress, 0.0);
            }
            TransitionPhase::Calm => {
                assert_eq!(s.glitch_intensity, 0.2);
                assert_eq!(s.crack_progress, 0.0);
            }
            TransitionPhase::Crack => {
                assert!((0.8..1.3).contains(&s.glitch_intensity));
                assert!((0.0..=1.0).contains(&s.crack_progress));
            }
            TransitionPhase::Peak => {
                assert!(s.glitch_intensity == 1.0 || s.glitch_intensity == 2.0);
                assert_eq!(s.crack_progress, 1.0);
            }
            TransitionPhase::Resolve => {
                assert!((0.0..=2.0).contains(&s.glitch_intensity));
                assert!((0.0..=1.0).contains(&s.crack_progress));
            }
        }
    }
}

#[test]
fn crack_rises_in_crack_phase_and_falls_in_resolve() {
    let mut orchestrator = TransitionOrchestrator::new(99);
    let step = Duration::from_millis(10);
    let mut crack_in_crack = Vec::new();
    let mut crack_in_resolve = Vec::new();
    loop {
        let update = orchestrator.advance(step);
        if update.completed {
            break;
        }
        match orchestrator.phase() {
            TransitionPhase::Crack => crack_in_crack.push(update.signal.crack_progress),
            TransitionPhase::Resolve => crack_in_resolve.push(update.signal.crack_progress),
            _ => {}
        }
    }
    assert!(crack_in_crack.len() > 10);
    assert!(crack_in_crack.windows(2).all(|w| w[1] >= w[0]), "crack must rise");
    assert!(*crack_in_crack.last().unwrap() > 0.9);

    assert!(crack_in_resolve.len() > 10);
    assert!(
        crack_in_resolve.windows(2).all(|w| w[1] <= w[0]),
        "crack must fall during resolve"
    );
}

#[test]
fn flash_only_fires_during_peak() {
    // Across a pile of seeds: flashes happen, and only in the peak phase.
    let mut any_flash = false;
    for seed in 0..30 {
        let mut orchestrator = TransitionOrchestrator::new(seed);
        let step = Duration::from_millis(10);
        loop {
            let update = orchestrator.advance(step);
            if update.completed {
                break;
            }
            if update.flash {
                any_flash = true;
                assert_eq!(
                    orchestrator.phase(),
                    TransitionPhase::Peak,
                    "flash outside peak (seed {seed})"
                );
            }
        }
    }
    assert!(any_flash, "30% per-tick probability never fired across 30 runs");
}

#[test]
fn oversized_delta_completes_in_one_call() {
    let mut orchestrator = TransitionOrchestrator::new(5);
    let update = orchestrator.advance(total_duration() + Duration::from_millis(1));
    assert!(update.completed);
    assert_eq!(update.signal, TransitionSignal::default());

    // further ticks are inert
    let after = orchestrator.advance(FRAME);
    assert!(after.completed);
    assert!(!after.flash);
    assert_eq!(after.signal, TransitionSignal::default());
}

#[test]
fn delta_spanning_phases_lands_in_the_right_phase() {
    let mut orchestrator = TransitionOrchestrator::new(3);
    // 1.2s build-up + 0.2s spike + half the calm phase
    orchestrator.advance(Duration::from_millis(1550));
    assert_eq!(orchestrator.phase(), TransitionPhase::Calm);
    let update = orchestrator.advance(Duration::from_millis(10));
    assert_eq!(update.signal.glitch_intensity, 0.2);
}
