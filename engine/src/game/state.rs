use std::collections::HashSet;

use super::direction_queue::DirectionQueue;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::snake::Snake;
use super::types::{Direction, EndReason, FieldSize, Point};

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { ate_food: bool },
    Ended { reason: EndReason },
}

/// Complete state of one game, owned by the session loop and mutated
/// only inside a tick.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Point>,
    pub direction_queue: DirectionQueue,
    pub field_size: FieldSize,
    pub score: u32,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    /// Fresh game: the snake spans the top row from the left corner,
    /// head at `(initial_snake_length - 1, 0)`, heading right, with
    /// food placed on a vacant cell.
    pub fn new(settings: &SessionSettings, rng: &mut SessionRng) -> Self {
        let head = Point::new(settings.initial_snake_length as i32 - 1, 0);
        let snake = Snake::new(head, Direction::Right, settings.initial_snake_length);

        let mut state = Self {
            snake,
            food: None,
            direction_queue: DirectionQueue::new(settings.queue_capacity),
            field_size: settings.field_size,
            score: 0,
            end_reason: None,
        };
        state.food = place_food(state.field_size, &state.snake.body_set, rng);
        state
    }

    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn queue_direction(&mut self, direction: Direction) {
        self.direction_queue.push(direction);
    }

    /// Resolves one tick: commit at most one queued direction change,
    /// move the head, handle collisions, growth and food re-placement.
    pub fn step(&mut self, rng: &mut SessionRng) -> StepOutcome {
        if let Some(reason) = self.end_reason {
            return StepOutcome::Ended { reason };
        }

        if let Some(direction) = self.direction_queue.consume(self.snake.direction) {
            self.snake.direction = direction;
        }

        let next_head = self.snake.next_head(self.snake.direction);
        if let Some(reason) = self.check_collision(next_head) {
            self.end_reason = Some(reason);
            return StepOutcome::Ended { reason };
        }

        let ate_food = self.food == Some(next_head);
        self.snake.advance(next_head, ate_food);

        if ate_food {
            self.score += 1;
            self.food = place_food(self.field_size, &self.snake.body_set, rng);
            if self.food.is_none() {
                let reason = EndReason::BoardFull;
                self.end_reason = Some(reason);
                return StepOutcome::Ended { reason };
            }
        }

        StepOutcome::Moved { ate_food }
    }

    /// The tail still counts as occupied here: it only vacates once the
    /// move commits, and a growth move can never target it because food
    /// is never placed on the snake.
    fn check_collision(&self, pos: Point) -> Option<EndReason> {
        if !self.field_size.contains(pos) {
            return Some(EndReason::WallCollision);
        }

        if self.snake.occupies(pos) {
            return Some(EndReason::SelfCollision);
        }

        None
    }
}

/// Uniformly picks a vacant cell, or `None` when the board is full.
pub fn place_food(
    field_size: FieldSize,
    occupied: &HashSet<Point>,
    rng: &mut SessionRng,
) -> Option<Point> {
    let vacant: Vec<Point> = field_size
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if vacant.is_empty() {
        return None;
    }

    Some(vacant[rng.random_range(0..vacant.len())])
}
