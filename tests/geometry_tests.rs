use tui_snake::core::{classify, classify_grid, tail_direction, CellKind, Corner, Snake};
use tui_snake::types::{BodyPart, Direction, GridSize, Point};

const GRID: GridSize = GridSize::new(10, 8);

/// A hook shape: right along row 2, down column 5, then left along row 5.
fn hook() -> Snake {
    Snake::from_parts([
        BodyPart::new(2, 5, Direction::Left),
        BodyPart::new(3, 5, Direction::Left),
        BodyPart::new(4, 5, Direction::Left),
        BodyPart::new(5, 5, Direction::Down),
        BodyPart::new(5, 4, Direction::Down),
        BodyPart::new(5, 3, Direction::Down),
        BodyPart::new(5, 2, Direction::Right),
        BodyPart::new(4, 2, Direction::Right),
        BodyPart::new(3, 2, Direction::Right),
    ])
}

#[test]
fn test_hook_classification() {
    let snake = hook();
    let apple = Point::new(8, 7);

    assert_eq!(classify(Point::new(2, 5), &snake, apple), CellKind::Head(Direction::Left));
    assert_eq!(classify(Point::new(3, 5), &snake, apple), CellKind::Body(Direction::Left));
    assert_eq!(
        classify(Point::new(5, 5), &snake, apple),
        CellKind::BodyTurn(Corner::BottomLeft)
    );
    assert_eq!(classify(Point::new(5, 3), &snake, apple), CellKind::Body(Direction::Down));
    assert_eq!(
        classify(Point::new(5, 2), &snake, apple),
        CellKind::BodyTurn(Corner::RightBottom)
    );
    assert_eq!(classify(Point::new(3, 2), &snake, apple), CellKind::Tail(Direction::Right));
    assert_eq!(classify(apple, &snake, apple), CellKind::Apple);
    assert_eq!(classify(Point::new(0, 0), &snake, apple), CellKind::Empty);
}

#[test]
fn test_counter_clockwise_corners() {
    // Moving up, then left, then down.
    let snake = Snake::from_parts([
        BodyPart::new(1, 3, Direction::Down),
        BodyPart::new(1, 2, Direction::Left),
        BodyPart::new(2, 2, Direction::Up),
        BodyPart::new(2, 3, Direction::Up),
    ]);
    let apple = Point::new(9, 9);
    assert_eq!(
        classify(Point::new(2, 2), &snake, apple),
        CellKind::BodyTurn(Corner::TopLeft)
    );
    assert_eq!(
        classify(Point::new(1, 2), &snake, apple),
        CellKind::BodyTurn(Corner::LeftBottom)
    );
    assert_eq!(classify(Point::new(2, 3), &snake, apple), CellKind::Tail(Direction::Up));
}

#[test]
fn test_growth_overlap_resolves_to_tail() {
    let mut snake = Snake::initial(GridSize::new(25, 15));
    snake.grow();
    let apple = Point::new(0, 0);

    // Tail and its duplicate share (10, 7); the tail-most index wins.
    assert_eq!(classify(Point::new(10, 7), &snake, apple), CellKind::Tail(Direction::Right));
    assert_eq!(classify(Point::new(11, 7), &snake, apple), CellKind::Body(Direction::Right));
}

#[test]
fn test_tail_direction_skips_growth_duplicate() {
    let mut snake = Snake::initial(GridSize::new(25, 15));
    assert_eq!(tail_direction(&snake), Direction::Right);
    snake.grow();
    snake.grow();
    assert_eq!(snake.iter().rev().skip(1).count(), 4);
    assert_eq!(tail_direction(&snake), Direction::Right);
}

#[test]
fn test_classify_is_total() {
    let snake = hook();
    let apple = Point::new(8, 7);
    let cells: Vec<(Point, CellKind)> = classify_grid(GRID, &snake, apple).collect();

    assert_eq!(cells.len(), (GRID.x * GRID.y) as usize);
    for (i, (p, _)) in cells.iter().enumerate() {
        assert_eq!(*p, Point::new(i as i32 % GRID.x, i as i32 / GRID.x));
    }

    let heads = cells.iter().filter(|(_, k)| matches!(k, CellKind::Head(_))).count();
    let tails = cells.iter().filter(|(_, k)| matches!(k, CellKind::Tail(_))).count();
    let apples = cells.iter().filter(|(_, k)| *k == CellKind::Apple).count();
    let snake_cells = cells.iter().filter(|(_, k)| k.is_snake()).count();
    assert_eq!((heads, tails, apples, snake_cells), (1, 1, 1, snake.len()));
}

#[test]
fn test_classify_is_idempotent() {
    let snake = hook();
    let apple = Point::new(8, 7);
    for y in 0..GRID.y {
        for x in 0..GRID.x {
            let p = Point::new(x, y);
            assert_eq!(classify(p, &snake, apple), classify(p, &snake, apple));
        }
    }
}

#[test]
fn test_tags() {
    let snake = hook();
    let apple = Point::new(8, 7);
    let tags: Vec<String> = [Point::new(5, 5), Point::new(5, 2), Point::new(3, 2)]
        .into_iter()
        .map(|p| {
            let kind = classify(p, &snake, apple);
            format!("{}:{}", kind.kind_str(), kind.orientation_str().unwrap_or("-"))
        })
        .collect();
    assert_eq!(
        tags,
        vec!["body-turn:bottom-left", "body-turn:right-bottom", "tail:right"]
    );
    assert_eq!(CellKind::Empty.orientation_str(), None);
}

#[test]
#[should_panic(expected = "not grid-adjacent")]
fn test_broken_snake_panics() {
    let snake = Snake::from_parts([
        BodyPart::new(0, 0, Direction::Right),
        BodyPart::new(3, 3, Direction::Right),
        BodyPart::new(4, 3, Direction::Right),
    ]);
    classify(Point::new(3, 3), &snake, Point::new(9, 9));
}
