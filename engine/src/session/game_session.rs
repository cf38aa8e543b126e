use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::config::Validate;
use crate::game::{
    Direction, GameSettings, GameState, SessionRng, SessionSettings, StepOutcome,
};
use crate::log;
use super::broadcaster::{GameOverSummary, StateBroadcaster, StateSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Turn(Direction),
    Pause,
    Resume,
    TogglePause,
    Restart,
    Shutdown,
}

/// One game from start to game over (and around again via restart).
///
/// The session owns the [`GameState`] outright: input reaches it only
/// through the command channel of [`GameSession::run`], so commands and
/// ticks are serialized on one task and nothing is ever locked.
pub struct GameSession {
    settings: SessionSettings,
    rng: SessionRng,
    state: GameState,
    phase: Phase,
    tick: u64,
}

impl GameSession {
    /// Fails fast on invalid settings; no state is built from them.
    pub fn create(settings: &GameSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;
        let session_settings = SessionSettings::from(settings);
        let mut rng = SessionRng::new(seed);
        let state = GameState::new(&session_settings, &mut rng);

        Ok(Self {
            settings: session_settings,
            rng,
            state,
            phase: Phase::Idle,
            tick: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            tick: self.tick,
            field_size: self.state.field_size,
            body: self.state.snake.body.iter().copied().collect(),
            food: self.state.food,
            phase: self.phase,
            score: self.state.score,
            end_reason: self.state.end_reason,
        }
    }

    /// Applies a lifecycle or input command. Invalid phase transitions
    /// are no-ops. Returns true when the renderer should see a new
    /// snapshot.
    pub fn apply_command(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Start => {
                if self.phase != Phase::Idle {
                    return false;
                }
                self.reset();
                true
            }
            SessionCommand::Restart => {
                self.reset();
                true
            }
            SessionCommand::Pause => self.set_paused(true),
            SessionCommand::Resume => self.set_paused(false),
            SessionCommand::TogglePause => match self.phase {
                Phase::Running => self.set_paused(true),
                Phase::Paused => self.set_paused(false),
                _ => false,
            },
            SessionCommand::Turn(direction) => {
                // intents while paused or over are dropped, not queued
                if self.phase == Phase::Running {
                    self.state.queue_direction(direction);
                }
                false
            }
            SessionCommand::Shutdown => false,
        }
    }

    /// Runs one tick of the state machine; does nothing unless Running.
    pub fn advance_tick(&mut self) -> Option<GameOverSummary> {
        if self.phase != Phase::Running {
            return None;
        }

        self.tick += 1;
        match self.state.step(&mut self.rng) {
            StepOutcome::Moved { ate_food } => {
                if ate_food {
                    log!("ate food, score {}", self.state.score);
                }
                None
            }
            StepOutcome::Ended { reason } => {
                self.phase = Phase::GameOver;
                log!("game over after {} ticks: {:?}", self.tick, reason);
                Some(GameOverSummary {
                    reason,
                    score: self.state.score,
                    length: self.state.snake.len(),
                    ticks: self.tick,
                })
            }
        }
    }

    /// Drives the session: commands and the tick timer multiplexed on
    /// one task. Returns when the channel closes or on `Shutdown`.
    ///
    /// The select is biased with the command branch first, so every
    /// intent queued between two ticks is visible to the next tick. The
    /// ticker is rebuilt on every entry into Running, which is what
    /// disarms it: a replaced driver cannot deliver a stale tick.
    pub async fn run<B: StateBroadcaster>(
        mut self,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) {
        let mut ticker = self.arm_ticker();

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if command == SessionCommand::Shutdown {
                        break;
                    }
                    if self.apply_command(command) {
                        if self.phase == Phase::Running {
                            ticker = self.arm_ticker();
                        }
                        broadcaster.publish_state(self.snapshot()).await;
                    }
                }

                _ = ticker.tick(), if self.phase == Phase::Running => {
                    let summary = self.advance_tick();
                    broadcaster.publish_state(self.snapshot()).await;
                    if let Some(summary) = summary {
                        broadcaster.publish_game_over(summary).await;
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        self.state = GameState::new(&self.settings, &mut self.rng);
        self.tick = 0;
        self.phase = Phase::Running;
        log!(
            "game started on {}x{} grid, seed {}",
            self.settings.field_size.width,
            self.settings.field_size.height,
            self.rng.seed()
        );
    }

    fn set_paused(&mut self, paused: bool) -> bool {
        match (self.phase, paused) {
            (Phase::Running, true) => {
                self.phase = Phase::Paused;
                log!("game paused");
                true
            }
            (Phase::Paused, false) => {
                self.phase = Phase::Running;
                log!("game resumed");
                true
            }
            _ => false,
        }
    }

    /// First tick lands one full period after arming, like a freshly
    /// set interval timer.
    fn arm_ticker(&self) -> Interval {
        let period = self.settings.tick_interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }
}
