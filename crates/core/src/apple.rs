//! Apple placement.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{GridSize, Point};

/// Random draws attempted per grid cell before switching to enumeration.
const DRAWS_PER_CELL: usize = 4;

/// Pick a uniformly random free cell for the apple.
///
/// Draws random cells and rejects occupied ones. On a crowded grid the
/// rejection loop is cut short and a free cell is chosen uniformly from the
/// enumerated free cells instead, so placement terminates whenever at least one
/// cell is free. Returns `None` only when the snake covers the whole grid.
pub fn place_apple(grid: GridSize, snake: &Snake, rng: &mut SimpleRng) -> Option<Point> {
    let cells = (grid.x as usize) * (grid.y as usize);

    for _ in 0..cells * DRAWS_PER_CELL {
        let p = rng.next_point(grid);
        if !snake.occupies(p) {
            return Some(p);
        }
    }

    let free: Vec<Point> = (0..grid.y)
        .flat_map(|y| (0..grid.x).map(move |x| Point::new(x, y)))
        .filter(|p| !snake.occupies(*p))
        .collect();
    if free.is_empty() {
        return None;
    }
    let i = rng.next_range(free.len() as u32) as usize;
    Some(free[i])
}
