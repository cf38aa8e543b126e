mod direction_queue;
mod session_rng;
mod settings;
mod snake;
mod state;
mod types;

pub use direction_queue::DirectionQueue;
pub use session_rng::SessionRng;
pub use settings::{GameSettings, SessionSettings, settings_manager};
pub use snake::Snake;
pub use state::{GameState, StepOutcome, place_food};
pub use types::{Direction, EndReason, FieldSize, Point};
