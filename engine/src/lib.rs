pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod session;

pub use game::{
    Direction, DirectionQueue, EndReason, FieldSize, GameSettings, GameState, Point, Snake,
    StepOutcome,
};
pub use input::{InputEvent, map_key_code};
pub use session::{
    GameOverSummary, GameSession, Phase, SessionCommand, StateBroadcaster, StateSnapshot,
};
