// ABOUTME: Pitch composition and review workflow for Pitchline
// ABOUTME: Composes proposal documents from briefs and ranked case studies, manages the status lifecycle

pub mod composer;
pub mod error;
pub mod lifecycle;
pub mod manager;
pub mod title;

pub use composer::compose;
pub use error::{PitchError, Result};
pub use lifecycle::{transition, PitchAction};
pub use manager::PitchManager;
pub use title::generate_title;
