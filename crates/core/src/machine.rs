//! Snake state machine - owns the game context and applies events
//!
//! The machine is an explicit finite-state machine over [`GamePhase`]:
//!
//! | phase | event | actions | next |
//! |-------|-------|---------|------|
//! | new-game | arrow-key | set direction | playing |
//! | playing | tick | move snake | playing |
//! | playing | arrow-key | set direction | playing |
//! | playing | pause | - | paused |
//! | paused | pause | - | playing |
//! | paused | arrow-key | set direction | playing |
//! | game-over | new-game | reset | new-game |
//!
//! Any other (phase, event) pair is ignored.
//!
//! After every mutation while playing (entering the phase, or a tick) the
//! guards run once, highest priority first:
//!
//! 1. **bite apple**: grow, place a new apple, bump score and high score
//! 2. **bite self** or **hit wall**: go to game-over (only if 1 did not fire)
//!
//! Each call to [`SnakeMachine::send`] runs to completion and reports what it
//! did as a [`Transition`].

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::apple::place_apple;
use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GamePhase, GridSize, Point, SnakeEvent, MIN_GRID_WIDTH};

/// Upper bound on actions a single event can trigger.
pub const MAX_ACTIONS: usize = 8;

/// Context mutation performed while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetDirection(Direction),
    MoveSnake,
    GrowSnake,
    NewApple(Point),
    UpdateScore(u32),
    Reset,
}

/// Outcome of [`SnakeMachine::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub event: SnakeEvent,
    pub from: GamePhase,
    pub to: GamePhase,
    pub actions: ArrayVec<Action, MAX_ACTIONS>,
}

impl Transition {
    fn new(event: SnakeEvent, from: GamePhase) -> Self {
        Self {
            event,
            from,
            to: from,
            actions: ArrayVec::new(),
        }
    }

    pub fn phase_changed(&self) -> bool {
        self.from != self.to
    }

    pub fn entered(&self, phase: GamePhase) -> bool {
        self.from != phase && self.to == phase
    }

    pub fn exited(&self, phase: GamePhase) -> bool {
        self.from == phase && self.to != phase
    }

    /// The event was ignored: no action ran and the phase did not change.
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty() && !self.phase_changed()
    }

    pub fn ate_apple(&self) -> bool {
        self.actions.contains(&Action::GrowSnake)
    }

    fn push(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// Mutable game data. Only the machine writes to it.
#[derive(Debug, Clone)]
pub struct GameContext {
    snake: Snake,
    grid_size: GridSize,
    direction: Direction,
    /// Direction committed at the first input since the last movement step.
    locked_direction: Option<Direction>,
    apple: Point,
    score: u32,
    high_score: u32,
}

impl GameContext {
    fn initial(grid_size: GridSize, high_score: u32, rng: &mut SimpleRng) -> Self {
        let snake = Snake::initial(grid_size);
        let apple = match place_apple(grid_size, &snake, rng) {
            Some(p) => p,
            None => panic!("grid {:?} has no room for an apple", grid_size),
        };
        Self {
            snake,
            grid_size,
            direction: Direction::Right,
            locked_direction: None,
            apple,
            score: 0,
            high_score,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn locked_direction(&self) -> Option<Direction> {
        self.locked_direction
    }

    pub fn apple(&self) -> Point {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// The simulation state machine.
#[derive(Debug, Clone)]
pub struct SnakeMachine {
    phase: GamePhase,
    ctx: GameContext,
    rng: SimpleRng,
    /// Number of completed resets (increments on every new game).
    episode_id: u32,
}

impl SnakeMachine {
    /// Create a machine in the new-game phase.
    ///
    /// Panics if the grid cannot hold the initial snake; use
    /// [`SnakeMachine::from_config`] to validate first.
    pub fn new(grid_size: GridSize, seed: u32) -> Self {
        assert!(
            grid_size.x >= MIN_GRID_WIDTH && grid_size.y >= 1,
            "grid {:?} cannot hold the initial snake",
            grid_size
        );
        let mut rng = SimpleRng::new(seed);
        let ctx = GameContext::initial(grid_size, 0, &mut rng);
        Self {
            phase: GamePhase::NewGame,
            ctx,
            rng,
            episode_id: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.grid, config.seed_or_random()))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Process one event to completion.
    pub fn send(&mut self, event: SnakeEvent) -> Transition {
        let mut t = Transition::new(event, self.phase);

        match (self.phase, event) {
            (GamePhase::NewGame, SnakeEvent::ArrowKey(dir)) => {
                self.set_direction(dir, &mut t);
                self.enter_playing(&mut t);
            }
            (GamePhase::Playing, SnakeEvent::Tick) => {
                self.move_snake(&mut t);
                self.run_guards(&mut t);
            }
            (GamePhase::Playing, SnakeEvent::ArrowKey(dir)) => {
                self.set_direction(dir, &mut t);
            }
            (GamePhase::Playing, SnakeEvent::Pause) => {
                self.phase = GamePhase::Paused;
            }
            (GamePhase::Paused, SnakeEvent::Pause) => {
                self.enter_playing(&mut t);
            }
            (GamePhase::Paused, SnakeEvent::ArrowKey(dir)) => {
                self.set_direction(dir, &mut t);
                self.enter_playing(&mut t);
            }
            (GamePhase::GameOver, SnakeEvent::NewGame) => {
                self.reset(&mut t);
                self.phase = GamePhase::NewGame;
            }
            (phase, event) => {
                debug!("ignored {} in {}", event.as_str(), phase.as_str());
            }
        }

        t.to = self.phase;
        if t.phase_changed() {
            debug!(
                "{} -> {} on {}",
                t.from.as_str(),
                t.to.as_str(),
                event.as_str()
            );
        }
        t
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.snake.clone_from_snake(&self.ctx.snake);
        out.grid_size = self.ctx.grid_size;
        out.direction = self.ctx.direction;
        out.apple = self.ctx.apple;
        out.score = self.ctx.score;
        out.high_score = self.ctx.high_score;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            snake: self.ctx.snake.clone(),
            grid_size: self.ctx.grid_size,
            direction: self.ctx.direction,
            apple: self.ctx.apple,
            score: self.ctx.score,
            high_score: self.ctx.high_score,
            episode_id: self.episode_id,
        }
    }

    fn enter_playing(&mut self, t: &mut Transition) {
        self.phase = GamePhase::Playing;
        self.run_guards(t);
    }

    /// Apply a direction change unless it reverses the locked direction.
    fn set_direction(&mut self, dir: Direction, t: &mut Transition) {
        let locked = *self
            .ctx
            .locked_direction
            .get_or_insert(self.ctx.direction);
        if dir.is_opposite(locked) {
            debug!("rejected reversal {} -> {}", locked.as_str(), dir.as_str());
            return;
        }
        self.ctx.direction = dir;
        t.push(Action::SetDirection(dir));
    }

    fn move_snake(&mut self, t: &mut Transition) {
        self.ctx.snake.advance(self.ctx.direction);
        self.ctx.locked_direction = None;
        t.push(Action::MoveSnake);
    }

    fn run_guards(&mut self, t: &mut Transition) {
        if self.bites_apple() {
            self.eat_apple(t);
        } else if self.ctx.snake.bites_self() || self.ctx.snake.hits_wall(self.ctx.grid_size) {
            info!(
                "game over at {:?} with score {}",
                self.ctx.snake.head().point,
                self.ctx.score
            );
            self.phase = GamePhase::GameOver;
        }
    }

    fn bites_apple(&self) -> bool {
        self.ctx.snake.head().point == self.ctx.apple
    }

    fn eat_apple(&mut self, t: &mut Transition) {
        self.ctx.snake.grow();
        t.push(Action::GrowSnake);

        let placed = place_apple(self.ctx.grid_size, &self.ctx.snake, &mut self.rng);
        if let Some(apple) = placed {
            self.ctx.apple = apple;
            t.push(Action::NewApple(apple));
            debug!("apple placed at {:?}", apple);
        }

        self.ctx.score += 1;
        self.ctx.high_score = self.ctx.high_score.max(self.ctx.score);
        t.push(Action::UpdateScore(self.ctx.score));

        if placed.is_none() {
            warn!("no free cell left for an apple; ending game");
            self.phase = GamePhase::GameOver;
        }
    }

    fn reset(&mut self, t: &mut Transition) {
        let high_score = self.ctx.high_score;
        self.ctx = GameContext::initial(self.ctx.grid_size, high_score, &mut self.rng);
        self.episode_id = self.episode_id.wrapping_add(1);
        t.push(Action::Reset);
        info!("new game (episode {}, high score {})", self.episode_id, high_score);
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }
}

#[cfg(test)]
impl GameContext {
    pub(crate) fn set_apple(&mut self, apple: Point) {
        self.apple = apple;
    }

    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub(crate) fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }
}
