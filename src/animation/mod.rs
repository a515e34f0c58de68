pub mod animation_state;
pub mod ticker;

pub use animation_state::{AnimationState, BeginOutcome, Step, Sweep};
pub use ticker::Ticker;
