//! Integration tests for the game lifecycle

use tui_snake::core::{
    classify, Action, CellKind, GameSnapshot, GridSize, SimpleRng, SnakeMachine,
};
use tui_snake::types::{Direction, GamePhase, Point, SnakeEvent};

const GRID: GridSize = GridSize::new(25, 15);

fn started(seed: u32) -> SnakeMachine {
    let mut m = SnakeMachine::new(GRID, seed);
    m.send(SnakeEvent::ArrowKey(Direction::Right));
    m
}

/// Steer toward the apple, avoiding walls, the body and reversals.
fn steer(snap: &GameSnapshot) -> Direction {
    let head = snap.snake.head().point;
    Direction::ALL
        .into_iter()
        .filter(|d| !d.is_opposite(snap.direction))
        .map(|d| (d, head.offset(d)))
        .filter(|(_, p)| p.is_within(snap.grid_size) && !snap.snake.occupies(*p))
        .min_by_key(|(_, p)| p.manhattan(snap.apple))
        .map(|(d, _)| d)
        .unwrap_or(snap.direction)
}

#[test]
fn test_first_tick_moves_head_one_cell() {
    let mut m = SnakeMachine::new(GRID, 12345);
    let before = m.snapshot();
    assert_eq!(before.snake.head().point, Point::new(12, 7));
    assert_eq!(before.snake.tail().point, Point::new(10, 7));

    m.send(SnakeEvent::ArrowKey(Direction::Right));
    // Entering playing does not move the snake.
    assert_eq!(m.snapshot().snake, before.snake);

    // Seed 12345 puts the first apple in the corner, off the snake's path.
    assert_eq!(before.apple, Point::new(0, 0));
    m.send(SnakeEvent::Tick);
    let after = m.snapshot();
    assert_eq!(after.snake.len(), 3);
    assert_eq!(after.snake.head().point, Point::new(13, 7));
    assert_eq!(after.snake.tail().point, Point::new(11, 7));
    assert!(!after.snake.occupies(Point::new(10, 7)));
}

#[test]
fn test_eating_apples() {
    let mut m = started(2024);
    let mut eaten = 0;

    for _ in 0..3000 {
        let snap = m.snapshot();
        let dir = steer(&snap);
        m.send(SnakeEvent::ArrowKey(dir));

        let next = snap.snake.head().point.offset(dir);
        let about_to_eat = next == snap.apple;
        if about_to_eat {
            assert_eq!(classify(next, &snap.snake, snap.apple), CellKind::Apple);
        }

        let t = m.send(SnakeEvent::Tick);
        assert_eq!(m.phase(), GamePhase::Playing, "steering bot crashed");
        let after = m.snapshot();

        assert_eq!(t.ate_apple(), about_to_eat);
        if about_to_eat {
            eaten += 1;
            assert_eq!(after.classify(next), CellKind::Head(dir));
            assert_ne!(after.apple, snap.apple);
            assert!(!after.snake.occupies(after.apple));
            assert_eq!(after.score, snap.score + 1);
            assert_eq!(after.high_score, snap.high_score.max(after.score));
            assert_eq!(after.snake.len(), snap.snake.len() + 1);
            if eaten == 5 {
                break;
            }
        } else {
            assert_eq!(after.snake.len(), snap.snake.len());
        }
    }

    assert_eq!(eaten, 5);
    let snap = m.snapshot();
    assert_eq!(snap.score, 5);
    assert_eq!(snap.high_score, 5);
    assert_eq!(snap.snake.len(), 8);
}

#[test]
fn test_wall_ends_game_and_ticks_are_ignored() {
    // Head starts at x = 12; steer along the top row to avoid the apple.
    let mut m = SnakeMachine::new(GRID, 1);
    m.send(SnakeEvent::ArrowKey(Direction::Up));

    let mut ticks = 0;
    while m.phase() == GamePhase::Playing {
        let head = m.snapshot().snake.head().point;
        if head.y == 0 {
            m.send(SnakeEvent::ArrowKey(Direction::Right));
        }
        m.send(SnakeEvent::Tick);
        ticks += 1;
        assert!(ticks < 100);
    }
    assert_eq!(m.phase(), GamePhase::GameOver);

    let over = m.snapshot();
    assert!(!over.snake.head().point.is_within(GRID));
    let t = m.send(SnakeEvent::Tick);
    assert!(t.is_noop());
    assert_eq!(m.snapshot(), over);

    for ev in [
        SnakeEvent::ArrowKey(Direction::Left),
        SnakeEvent::Pause,
        SnakeEvent::Tick,
    ] {
        assert!(m.send(ev).is_noop());
    }

    let t = m.send(SnakeEvent::NewGame);
    assert!(t.actions.contains(&Action::Reset));
    let fresh = m.snapshot();
    assert_eq!(fresh.phase, GamePhase::NewGame);
    assert_eq!(fresh.snake.len(), 3);
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.high_score, over.high_score);
    assert_eq!(fresh.direction, Direction::Right);
    assert_eq!(fresh.episode_id, over.episode_id + 1);
}

#[test]
fn test_reversal_is_ignored_and_turn_accepted() {
    let mut m = started(7);
    m.send(SnakeEvent::Tick);

    m.send(SnakeEvent::ArrowKey(Direction::Left));
    assert_eq!(m.context().direction(), Direction::Right);

    m.send(SnakeEvent::ArrowKey(Direction::Up));
    assert_eq!(m.context().direction(), Direction::Up);
}

#[test]
fn test_rapid_opposing_keys_within_one_tick() {
    let mut m = started(7);
    m.send(SnakeEvent::Tick);

    // Up then Left: Left still reverses the direction locked at the window start.
    m.send(SnakeEvent::ArrowKey(Direction::Up));
    m.send(SnakeEvent::ArrowKey(Direction::Left));
    assert_eq!(m.context().direction(), Direction::Up);

    // Down only reverses Up, which was never committed by a move.
    m.send(SnakeEvent::ArrowKey(Direction::Down));
    assert_eq!(m.context().direction(), Direction::Down);

    let head = m.snapshot().snake.head().point;
    m.send(SnakeEvent::Tick);
    if m.phase() == GamePhase::Playing {
        assert_eq!(m.snapshot().snake.head().point, head.offset(Direction::Down));
    }

    // New window: Up now reverses the committed Down.
    m.send(SnakeEvent::ArrowKey(Direction::Up));
    assert_eq!(m.context().direction(), Direction::Down);
}

#[test]
fn test_pause_freezes_and_resumes() {
    let mut m = started(3);
    m.send(SnakeEvent::Pause);
    assert_eq!(m.phase(), GamePhase::Paused);

    let frozen = m.snapshot();
    assert!(m.send(SnakeEvent::Tick).is_noop());
    assert!(m.send(SnakeEvent::NewGame).is_noop());
    assert_eq!(m.snapshot(), frozen);

    m.send(SnakeEvent::Pause);
    assert_eq!(m.phase(), GamePhase::Playing);
    assert_eq!(m.snapshot().snake, frozen.snake);
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut m = SnakeMachine::new(GRID, 99);
    let mut rng = SimpleRng::new(31337);
    let mut games = 0;

    for _ in 0..20_000 {
        let before = m.snapshot();
        let event = if before.phase == GamePhase::GameOver {
            SnakeEvent::NewGame
        } else {
            match rng.next_range(100) {
                0..=69 => SnakeEvent::Tick,
                70..=96 => SnakeEvent::ArrowKey(Direction::ALL[rng.next_range(4) as usize]),
                _ => SnakeEvent::Pause,
            }
        };

        let t = m.send(event);
        let after = m.snapshot();

        if t.actions.contains(&Action::Reset) {
            games += 1;
            assert_eq!(after.snake.len(), 3);
        } else {
            assert!(after.snake.len() >= before.snake.len());
        }

        if t.actions.contains(&Action::MoveSnake) && !t.ate_apple() {
            assert_eq!(after.snake.len(), before.snake.len());
            assert_eq!(
                after.snake.head().point,
                before.snake.head().point.offset(before.direction)
            );
        }

        assert!(!after.snake.occupies(after.apple));
        assert!(after.high_score >= after.score);

        let cells: Vec<CellKind> = after.cells().map(|(_, k)| k).collect();
        let count = |f: fn(&CellKind) -> bool| cells.iter().filter(|k| f(k)).count();
        assert_eq!(cells.len(), 25 * 15);
        assert_eq!(count(|k| matches!(k, CellKind::Tail(_))), 1);
        assert!(count(|k| matches!(k, CellKind::Apple)) <= 1);
        if after.phase != GamePhase::GameOver {
            assert_eq!(count(|k| matches!(k, CellKind::Head(_))), 1);
            assert_eq!(count(|k| matches!(k, CellKind::Apple)), 1);
        }
    }

    assert!(games > 0, "random play should finish at least one game");
}
