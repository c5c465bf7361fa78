//! The envelope reveal sequence.
//!
//! A tap counter walks the envelope through five fixed positions; once the
//! final position is reached, one of four notes can be revealed. State is an
//! explicit value passed through a pure update function rather than a hidden
//! global, and the reveal draws from an injectable random source.

use rand::Rng;

/// The notes an envelope can reveal, in their original wording.
pub const MESSAGES: [&str; 4] = [
    "Yrrr aap guse me toh ekdum tazi tazi laal tamatar Igti hogi!!.",
    "Yrr ap itne khobsuratho kahe 'Al generated' to nhi ho?",
    "Acha hai ki khubsurat hone ka koi bill nhi aata nhi toh aapke papa ji ke bohot paise Ig jaye.",
    "Main raat ko nini bohot der se krta hu... kya aap mujhe 2 thapaa laga ke apni godi me nini karaogi.",
];

/// Where the envelope sits after each tap, in a `[-1, 1]` square world.
/// The final slot is the center.
pub const TAP_POSITIONS: [(f32, f32); 5] = [
    (-0.5, 0.3),
    (0.4, -0.2),
    (-0.3, -0.4),
    (0.5, 0.5),
    (0.0, 0.0),
];

/// Half-extent of the square world the positions live in.
pub const WORLD_HALF_EXTENT: f32 = 1.0;

/// Half-extents of the envelope body.
pub const ENVELOPE_HALF_WIDTH: f32 = 0.2;
pub const ENVELOPE_HALF_HEIGHT: f32 = 0.1;

/// Session state for the envelope: just the tap counter, clamped to the
/// position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeState {
    taps: u32,
}

impl EnvelopeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Pure tap update: one more tap, clamped at the last position index.
    #[must_use]
    pub fn tap(self) -> Self {
        let max = (TAP_POSITIONS.len() - 1) as u32;
        Self {
            taps: (self.taps + 1).min(max),
        }
    }

    /// Index into the position table: `min(taps, 4)`.
    pub fn position_index(&self) -> usize {
        (self.taps as usize).min(TAP_POSITIONS.len() - 1)
    }

    /// The envelope's current center position.
    pub fn position(&self) -> (f32, f32) {
        TAP_POSITIONS[self.position_index()]
    }

    /// True once the envelope has reached its final (center) position and
    /// the reveal becomes available.
    pub fn is_ready(&self) -> bool {
        self.position_index() == TAP_POSITIONS.len() - 1
    }

    /// Reveals one note, uniformly at random, once the sequence is complete.
    /// Returns `None` before the final position is reached.
    pub fn reveal<R: Rng>(&self, rng: &mut R) -> Option<&'static str> {
        if !self.is_ready() {
            return None;
        }
        Some(MESSAGES[rng.gen_range(0..MESSAGES.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn position_index_is_min_of_taps_and_four() {
        let mut state = EnvelopeState::new();
        for expected in [0usize, 1, 2, 3, 4, 4, 4, 4] {
            assert_eq!(state.position_index(), expected.min(state.taps() as usize));
            assert_eq!(state.position(), TAP_POSITIONS[expected.min(4)]);
            state = state.tap();
        }
    }

    #[test]
    fn counter_clamps_at_last_index() {
        let mut state = EnvelopeState::new();
        for _ in 0..50 {
            state = state.tap();
        }
        assert_eq!(state.taps(), 4);
        assert_eq!(state.position(), (0.0, 0.0));
    }

    #[test]
    fn reveal_unreachable_before_final_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = EnvelopeState::new();
        for _ in 0..4 {
            assert_eq!(state.reveal(&mut rng), None);
            state = state.tap();
        }
        assert!(state.is_ready());
        assert!(state.reveal(&mut rng).is_some());
    }

    #[test]
    fn reveal_only_yields_known_messages() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = EnvelopeState::new().tap().tap().tap().tap();
        for _ in 0..200 {
            let message = state.reveal(&mut rng).unwrap();
            assert!(MESSAGES.contains(&message));
        }
    }

    #[test]
    fn reveal_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let state = EnvelopeState::new().tap().tap().tap().tap();
        let mut counts = [0usize; MESSAGES.len()];
        let trials = 4000;
        for _ in 0..trials {
            let message = state.reveal(&mut rng).unwrap();
            let idx = MESSAGES.iter().position(|m| *m == message).unwrap();
            counts[idx] += 1;
        }
        // Uniformity check, not exact equality: each note should land well
        // within a generous band around trials / 4.
        for count in counts {
            assert!(count > trials / 8, "count {count} too low: {counts:?}");
            assert!(count < trials / 2, "count {count} too high: {counts:?}");
        }
    }
}
