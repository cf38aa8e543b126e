use std::future::Future;

use crate::game::{EndReason, FieldSize, Point};
use super::game_session::Phase;

/// Render-ready view of the game, assembled only after a tick has
/// fully committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    pub tick: u64,
    pub field_size: FieldSize,
    /// Occupied cells, head first.
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub phase: Phase,
    pub score: u32,
    pub end_reason: Option<EndReason>,
}

impl StateSnapshot {
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub reason: EndReason,
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
}

/// Sink for committed game states. The renderer lives behind this
/// trait; the engine has no dependency on how the state is drawn.
pub trait StateBroadcaster: Send + Sync + 'static {
    fn publish_state(&self, snapshot: StateSnapshot) -> impl Future<Output = ()> + Send;

    fn publish_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
