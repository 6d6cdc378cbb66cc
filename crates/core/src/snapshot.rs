use crate::geometry::{classify, classify_grid, CellKind};
use crate::snake::Snake;
use crate::types::{Direction, GamePhase, GridSize, Point, GRID_HEIGHT, GRID_WIDTH};

/// Read-only view of the machine for renderers and protocol encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub snake: Snake,
    pub grid_size: GridSize,
    pub direction: Direction,
    pub apple: Point,
    pub score: u32,
    pub high_score: u32,
    pub episode_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let grid_size = GridSize::new(GRID_WIDTH, GRID_HEIGHT);
        Self {
            phase: GamePhase::NewGame,
            snake: Snake::initial(grid_size),
            grid_size,
            direction: Direction::Right,
            apple: Point::default(),
            score: 0,
            high_score: 0,
            episode_id: 0,
        }
    }
}

impl GameSnapshot {
    pub fn classify(&self, point: Point) -> CellKind {
        classify(point, &self.snake, self.apple)
    }

    /// Every grid cell with its kind, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        classify_grid(self.grid_size, &self.snake, self.apple)
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
