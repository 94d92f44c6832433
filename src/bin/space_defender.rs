//! Space defender runner.
//!
//! Fixed-tick loop: drain pending input without blocking, advance the world
//! one tick, render, then sleep out the rest of the 50 ms frame.  Enemy
//! spawning runs on a wall-clock timer checked once per tick.

use std::io::{stdout, BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use terminal_arcade::defender::compute::{self, SPAWN_INTERVAL_MS};
use terminal_arcade::defender::display;
use terminal_arcade::score::Scoreboard;

const FRAME: Duration = Duration::from_millis(50); // ≈20 Hz

fn main() -> Result<()> {
    let mut out = BufWriter::new(stdout());

    if let Err(err) = terminal::enable_raw_mode() {
        eprintln!("warning: could not enable raw terminal mode: {err}");
    }
    let _ = out.execute(terminal::EnterAlternateScreen);
    let _ = out.execute(cursor::Hide);

    let result = run(&mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    let (width, height) = terminal::size().unwrap_or((80, 24));
    let mut world = compute::init_world(width as i32, height as i32);
    let mut board = Scoreboard::new();
    let mut rng = thread_rng();

    let mut last_spawn = Instant::now();

    while !board.is_game_over() {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event::read()?
            {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        board.end_game();
                    }
                    KeyCode::Esc => board.end_game(),
                    KeyCode::Char(c) => match c.to_ascii_lowercase() {
                        'a' => world = compute::move_left(&world),
                        'd' => world = compute::move_right(&world),
                        'f' => world = compute::fire(&world),
                        'q' => board.end_game(),
                        _ => {}
                    },
                    _ => {}
                }
            }
        }

        if !board.is_game_over() {
            let spawn_due = last_spawn.elapsed() >= Duration::from_millis(SPAWN_INTERVAL_MS);
            if spawn_due {
                last_spawn = Instant::now();
            }
            let (next, events) = compute::tick(&world, spawn_due, &mut rng);
            world = next;
            board.apply_all(&events);
        }

        display::render(out, &world, &board)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    // Leave the final frame (with the game-over overlay) up briefly.
    thread::sleep(Duration::from_millis(1000));
    Ok(())
}
