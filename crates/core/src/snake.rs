//! Snake body: movement, growth and collision queries.

use std::collections::VecDeque;
use std::ops::Index;

use crate::types::{BodyPart, Direction, GridSize, Point, INITIAL_SNAKE_LEN};

/// Ordered snake body, index 0 = head, last index = tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    parts: VecDeque<BodyPart>,
}

impl Snake {
    /// Build a snake from explicit segments (head first).
    ///
    /// Panics on an empty body; every snake has at least a head.
    pub fn from_parts(parts: impl IntoIterator<Item = BodyPart>) -> Self {
        let parts: VecDeque<BodyPart> = parts.into_iter().collect();
        assert!(!parts.is_empty(), "snake must have at least one segment");
        Self { parts }
    }

    /// Initial snake: three segments centered on the grid, facing right.
    pub fn initial(grid: GridSize) -> Self {
        let x = grid.x / 2;
        let y = grid.y / 2;
        let dir = Direction::Right;
        Self::from_parts((0..INITIAL_SNAKE_LEN as i32).map(|i| BodyPart::new(x - i, y, dir)))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn head(&self) -> BodyPart {
        self.parts[0]
    }

    pub fn tail(&self) -> BodyPart {
        self.parts[self.parts.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<BodyPart> {
        self.parts.get(index).copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BodyPart> + ExactSizeIterator + '_ {
        self.parts.iter()
    }

    /// Last (tail-most) index whose segment occupies `point`.
    pub fn rposition(&self, point: Point) -> Option<usize> {
        self.parts.iter().rposition(|p| p.point == point)
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.parts.iter().any(|p| p.point == point)
    }

    /// Advance one cell: push a new head in `dir`, drop the last segment.
    pub fn advance(&mut self, dir: Direction) {
        let head = self.head();
        self.parts.push_front(BodyPart {
            point: head.point.offset(dir),
            dir,
        });
        self.parts.pop_back();
    }

    /// Append a copy of the tail. The copy overlaps the real tail until the
    /// next [`Snake::advance`] drops the older of the two.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.parts.push_back(tail);
    }

    /// Head occupies the same cell as any non-head segment.
    pub fn bites_self(&self) -> bool {
        let head = self.head().point;
        self.parts.iter().skip(1).any(|p| p.point == head)
    }

    /// Head lies outside `[0, grid)` on either axis.
    pub fn hits_wall(&self, grid: GridSize) -> bool {
        !self.head().point.is_within(grid)
    }

    /// Reuse this allocation to hold a copy of `other`.
    pub fn clone_from_snake(&mut self, other: &Snake) {
        self.parts.clear();
        self.parts.extend(other.parts.iter().copied());
    }
}

impl Index<usize> for Snake {
    type Output = BodyPart;

    fn index(&self, index: usize) -> &BodyPart {
        &self.parts[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> Snake {
        Snake::initial(GridSize::new(25, 15))
    }

    #[test]
    fn test_initial_snake_is_centered() {
        let snake = straight();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), BodyPart::new(12, 7, Direction::Right));
        assert_eq!(snake.get(1), Some(BodyPart::new(11, 7, Direction::Right)));
        assert_eq!(snake.tail(), BodyPart::new(10, 7, Direction::Right));
    }

    #[test]
    fn test_advance_preserves_length() {
        let mut snake = straight();
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), BodyPart::new(13, 7, Direction::Right));
        assert_eq!(snake.tail(), BodyPart::new(11, 7, Direction::Right));
    }

    #[test]
    fn test_advance_tags_head_with_direction() {
        let mut snake = straight();
        snake.advance(Direction::Up);
        assert_eq!(snake.head(), BodyPart::new(12, 6, Direction::Up));
        assert_eq!(snake.get(1), Some(BodyPart::new(12, 7, Direction::Right)));
    }

    #[test]
    fn test_grow_duplicates_tail_until_next_move() {
        let mut snake = straight();
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.get(2), snake.get(3));

        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 4);
        let points: Vec<Point> = snake.iter().map(|p| p.point).collect();
        assert_eq!(
            points,
            vec![
                Point::new(13, 7),
                Point::new(12, 7),
                Point::new(11, 7),
                Point::new(10, 7)
            ]
        );
    }

    #[test]
    fn test_rposition_finds_tail_most_match() {
        let mut snake = straight();
        snake.grow();
        assert_eq!(snake.rposition(Point::new(10, 7)), Some(3));
        assert_eq!(snake.rposition(Point::new(12, 7)), Some(0));
        assert_eq!(snake.rposition(Point::new(0, 0)), None);
    }

    #[test]
    fn test_bites_self() {
        // Head has looped around onto the tail cell.
        let snake = Snake::from_parts([
            BodyPart::new(2, 1, Direction::Up),
            BodyPart::new(2, 2, Direction::Left),
            BodyPart::new(3, 2, Direction::Down),
            BodyPart::new(3, 1, Direction::Right),
            BodyPart::new(2, 1, Direction::Right),
        ]);
        assert!(snake.bites_self());
        assert!(!straight().bites_self());
    }

    #[test]
    fn test_hits_wall() {
        let grid = GridSize::new(4, 3);
        let mut snake = Snake::initial(grid);
        assert!(!snake.hits_wall(grid));
        snake.advance(Direction::Right);
        assert!(!snake.hits_wall(grid));
        snake.advance(Direction::Right);
        assert!(snake.hits_wall(grid));
    }
}
