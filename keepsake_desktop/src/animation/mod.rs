mod states;

pub use states::{BouquetSceneState, EnvelopeSceneState};
