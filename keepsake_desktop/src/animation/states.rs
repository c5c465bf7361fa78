use crate::constants::FRAME_BUDGET;
use iced::widget::canvas;
use keepsake_core::{Bouquet, EnvelopeState, WitherPhase};

/// Scene state for the envelope canvas: the core tap state plus the draw
/// cache it invalidates.
#[derive(Debug, Default)]
pub struct EnvelopeSceneState {
    pub envelope: EnvelopeState,
    pub cache: canvas::Cache,
}

impl EnvelopeSceneState {
    /// Applies one tap and invalidates the cached geometry.
    pub fn tap(&mut self) {
        self.envelope = self.envelope.tap();
        self.cache.clear();
    }
}

/// Scene state for the bouquet canvas: the core state machine, the elapsed
/// tick count against the frame budget, and the draw cache.
#[derive(Debug, Default)]
pub struct BouquetSceneState {
    pub bouquet: Bouquet,
    pub frames: u32,
    pub cache: canvas::Cache,
}

impl BouquetSceneState {
    /// Advances the run by one tick while it is still live.
    pub fn update(&mut self) {
        if !self.is_live() {
            return;
        }
        self.frames += 1;
        self.bouquet.tick();
        self.cache.clear();
    }

    /// Forwards a click to the state machine.
    pub fn click(&mut self) {
        self.bouquet.click();
        self.cache.clear();
    }

    /// True while ticks should still be scheduled: budget not exhausted and
    /// the machine not yet terminal.
    pub fn is_live(&self) -> bool {
        self.frames < FRAME_BUDGET && self.bouquet.phase() != WitherPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_goes_dormant_at_frame_budget() {
        let mut scene = BouquetSceneState::default();
        for _ in 0..(FRAME_BUDGET + 50) {
            scene.update();
        }
        assert_eq!(scene.frames, FRAME_BUDGET);
        assert!(!scene.is_live());
    }

    #[test]
    fn scene_goes_dormant_once_done() {
        let mut scene = BouquetSceneState::default();
        scene.click();
        while scene.is_live() {
            scene.update();
        }
        // A full run finishes well inside the budget.
        assert_eq!(scene.bouquet.phase(), WitherPhase::Done);
        assert!(scene.frames < FRAME_BUDGET);
    }

    #[test]
    fn envelope_taps_clamp() {
        let mut scene = EnvelopeSceneState::default();
        for _ in 0..10 {
            scene.tap();
        }
        assert_eq!(scene.envelope.taps(), 4);
    }
}
