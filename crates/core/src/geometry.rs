//! Geometry module - per-cell classification for rendering
//!
//! Given the committed snake and apple, [`classify`] tells a renderer what
//! occupies a grid cell and which way its sprite should face. It is pure,
//! reentrant and allocation-free, so it can be called for every cell of the
//! grid on every frame.
//!
//! # Turn corners
//!
//! A turn segment is tagged `<incoming>-<outgoing>`, where incoming is the
//! direction the snake moved to enter the cell and outgoing the direction it
//! left by (vertical directions are spelled `top`/`bottom`). The corner is
//! looked up in a table keyed by the sign of the 2D cross product of the two
//! movement vectors and the incoming direction:
//!
//! | cross | incoming up | incoming down | incoming left | incoming right |
//! |-------|-------------|---------------|---------------|----------------|
//! | `> 0` (clockwise) | top-right | bottom-left | left-top | right-bottom |
//! | `< 0` (counter-clockwise) | top-left | bottom-right | left-bottom | right-top |
//!
//! Screen coordinates are used (`y` grows downward), so a positive cross
//! product is a clockwise turn as seen on screen.

use crate::snake::Snake;
use crate::types::{Direction, GridSize, Point};

/// Corner sprite orientation for a turn segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    RightBottom,
    BottomLeft,
    LeftTop,
    TopRight,
    RightTop,
    TopLeft,
    LeftBottom,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::RightBottom,
        Corner::BottomLeft,
        Corner::LeftTop,
        Corner::TopRight,
        Corner::RightTop,
        Corner::TopLeft,
        Corner::LeftBottom,
        Corner::BottomRight,
    ];

    /// Direction the snake moved to enter the turn cell.
    pub fn incoming(&self) -> Direction {
        match self {
            Corner::RightBottom | Corner::RightTop => Direction::Right,
            Corner::BottomLeft | Corner::BottomRight => Direction::Down,
            Corner::LeftTop | Corner::LeftBottom => Direction::Left,
            Corner::TopRight | Corner::TopLeft => Direction::Up,
        }
    }

    /// Direction the snake moved to leave the turn cell.
    pub fn outgoing(&self) -> Direction {
        match self {
            Corner::RightBottom | Corner::LeftBottom => Direction::Down,
            Corner::BottomLeft | Corner::TopLeft => Direction::Left,
            Corner::LeftTop | Corner::RightTop => Direction::Up,
            Corner::TopRight | Corner::BottomRight => Direction::Right,
        }
    }

    pub fn is_clockwise(&self) -> bool {
        matches!(
            self,
            Corner::RightBottom | Corner::BottomLeft | Corner::LeftTop | Corner::TopRight
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::RightBottom => "right-bottom",
            Corner::BottomLeft => "bottom-left",
            Corner::LeftTop => "left-top",
            Corner::TopRight => "top-right",
            Corner::RightTop => "right-top",
            Corner::TopLeft => "top-left",
            Corner::LeftBottom => "left-bottom",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// What occupies a grid cell, with the orientation the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Head(Direction),
    Body(Direction),
    BodyTurn(Corner),
    /// Direction points from the tail toward the rest of the body.
    Tail(Direction),
    Apple,
}

impl CellKind {
    pub fn kind_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Head(_) => "head",
            CellKind::Body(_) => "body",
            CellKind::BodyTurn(_) => "body-turn",
            CellKind::Tail(_) => "tail",
            CellKind::Apple => "apple",
        }
    }

    pub fn orientation_str(&self) -> Option<&'static str> {
        match self {
            CellKind::Head(d) | CellKind::Body(d) | CellKind::Tail(d) => Some(d.as_str()),
            CellKind::BodyTurn(c) => Some(c.as_str()),
            CellKind::Empty | CellKind::Apple => None,
        }
    }

    pub fn is_snake(&self) -> bool {
        matches!(
            self,
            CellKind::Head(_) | CellKind::Body(_) | CellKind::BodyTurn(_) | CellKind::Tail(_)
        )
    }
}

/// Turn table indexed by `[counter_clockwise as usize][incoming]`.
const TURNS: [[Corner; 4]; 2] = [
    // incoming: up, down, left, right
    [
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::LeftTop,
        Corner::RightBottom,
    ],
    [
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::LeftBottom,
        Corner::RightTop,
    ],
];

fn dir_index(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Direction of the unit step `from -> to`.
///
/// Panics when the points are not grid-adjacent: the snake topology is broken.
fn step(from: Point, to: Point) -> Direction {
    let (dx, dy) = from.delta_to(to);
    match Direction::from_delta(dx, dy) {
        Some(dir) => dir,
        None => panic!("snake segments {:?} and {:?} are not grid-adjacent", from, to),
    }
}

/// Corner for a turn entered moving `incoming` and left moving `outgoing`.
///
/// Panics when the two directions do not form a turn.
pub fn turn_corner(incoming: Direction, outgoing: Direction) -> Corner {
    let (ix, iy) = incoming.delta();
    let (ox, oy) = outgoing.delta();
    let cross = ix * oy - iy * ox;
    match cross.signum() {
        1 => TURNS[0][dir_index(incoming)],
        -1 => TURNS[1][dir_index(incoming)],
        _ => panic!(
            "no turn between {} and {} (zero cross product)",
            incoming.as_str(),
            outgoing.as_str()
        ),
    }
}

/// Direction from the tail toward the body, skipping the growth duplicate.
pub fn tail_direction(snake: &Snake) -> Direction {
    let tail = snake.tail().point;
    let neighbor = snake
        .iter()
        .rev()
        .skip(1)
        .map(|p| p.point)
        .find(|&p| p != tail);
    match neighbor {
        Some(p) => step(tail, p),
        None => panic!("snake has no segment distinct from its tail at {:?}", tail),
    }
}

/// Classify a grid cell against the current snake and apple.
pub fn classify(point: Point, snake: &Snake, apple: Point) -> CellKind {
    let Some(i) = snake.rposition(point) else {
        return if point == apple {
            CellKind::Apple
        } else {
            CellKind::Empty
        };
    };

    let part = snake[i];
    if i == 0 {
        return CellKind::Head(part.dir);
    }
    if i == snake.len() - 1 {
        return CellKind::Tail(tail_direction(snake));
    }

    let incoming = step(snake[i + 1].point, part.point);
    let outgoing = step(part.point, snake[i - 1].point);
    if incoming.is_horizontal() == outgoing.is_horizontal() {
        CellKind::Body(part.dir)
    } else {
        CellKind::BodyTurn(turn_corner(incoming, outgoing))
    }
}

/// Classify every cell of the grid in row-major order.
pub fn classify_grid<'a>(
    grid: GridSize,
    snake: &'a Snake,
    apple: Point,
) -> impl Iterator<Item = (Point, CellKind)> + 'a {
    (0..grid.y)
        .flat_map(move |y| (0..grid.x).map(move |x| Point::new(x, y)))
        .map(move |p| (p, classify(p, snake, apple)))
}
