mod broadcaster;
mod game_session;

pub use broadcaster::{GameOverSummary, StateBroadcaster, StateSnapshot};
pub use game_session::{GameSession, Phase, SessionCommand};
