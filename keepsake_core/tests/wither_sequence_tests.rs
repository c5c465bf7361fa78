//! Full withering runs, checked against the phase-order and monotonicity
//! guarantees.

use keepsake_core::bouquet::{Bouquet, WitherPhase, PETAL_ANGLES};

const PHASE_ORDER: [WitherPhase; 5] = [
    WitherPhase::Waiting,
    WitherPhase::MovingOut,
    WitherPhase::DroppingPetals,
    WitherPhase::Fading,
    WitherPhase::Done,
];

fn order_index(phase: WitherPhase) -> usize {
    PHASE_ORDER.iter().position(|p| *p == phase).unwrap()
}

#[test]
fn full_run_reaches_done_in_phase_order() {
    let mut bouquet = Bouquet::new();
    bouquet.click();

    let mut observed = vec![bouquet.phase()];
    let mut last_shed = 0;
    let (mut last_fade, mut last_message) = (0.0f32, 0.0f32);

    for _ in 0..2_000 {
        bouquet.tick();

        let phase = bouquet.phase();
        if *observed.last().unwrap() != phase {
            observed.push(phase);
        }

        if let Some(tulip) = bouquet.selected() {
            assert!(tulip.petals_shed() >= last_shed);
            assert!(tulip.petals_shed() <= PETAL_ANGLES.len());
            last_shed = tulip.petals_shed();
        }

        assert!(bouquet.fade_alpha() >= last_fade && bouquet.fade_alpha() <= 1.0);
        assert!(bouquet.message_alpha() >= last_message && bouquet.message_alpha() <= 1.0);
        last_fade = bouquet.fade_alpha();
        last_message = bouquet.message_alpha();
    }

    assert_eq!(observed.last(), Some(&WitherPhase::Done));

    // The observed sequence must be exactly the phase order starting at
    // MovingOut (the click already consumed Waiting).
    assert_eq!(observed, PHASE_ORDER[1..].to_vec());

    // Everything but the overlay is hidden at the end.
    assert!(bouquet.tulips().iter().all(|t| t.hidden));
    assert_eq!(bouquet.fade_alpha(), 1.0);
    assert_eq!(bouquet.message_alpha(), 1.0);
}

#[test]
fn truncated_runs_are_prefixes_of_the_phase_order() {
    for budget in [0usize, 5, 30, 120, 200, 400] {
        let mut bouquet = Bouquet::new();
        bouquet.click();

        let mut last = order_index(bouquet.phase());
        for _ in 0..budget {
            bouquet.tick();
            let now = order_index(bouquet.phase());
            assert!(now >= last, "phase regressed with budget {budget}");
            last = now;
        }
    }
}

#[test]
fn ticks_past_done_are_harmless() {
    let mut bouquet = Bouquet::new();
    bouquet.click();
    for _ in 0..2_000 {
        bouquet.tick();
    }
    assert_eq!(bouquet.phase(), WitherPhase::Done);
    for _ in 0..500 {
        bouquet.tick();
    }
    assert_eq!(bouquet.phase(), WitherPhase::Done);
    assert_eq!(bouquet.fade_alpha(), 1.0);
    assert_eq!(bouquet.message_alpha(), 1.0);
}
