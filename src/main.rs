//! Terminal snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`. Ticks
//! come from the session's timer; the loop only polls input, pumps the session
//! and redraws.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameConfig, GameSnapshot};
use tui_snake::engine::Session;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on input latency and redraw interval.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init_from_config(&config)?;
    let mut session = Session::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let frame = Duration::from_millis(FRAME_MS).min(session.tick_interval());

    loop {
        session.pump();

        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(ev) = handle_key_event(key) {
                    session.enqueue(ev);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
