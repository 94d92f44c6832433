//! Treasure hunter runner.
//!
//! Blocking interactive loop: render the grid, wait for one key, move,
//! resolve the collision, feed the events to the scoreboard.  Raw mode is
//! best-effort — a failure to configure the terminal is reported to stderr
//! and the game carries on.

use std::io::{stdout, BufWriter, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use rand::thread_rng;

use terminal_arcade::events::GameEvent;
use terminal_arcade::hunter::compute::{self, Command, FIELD_HEIGHT, FIELD_WIDTH};
use terminal_arcade::hunter::display;
use terminal_arcade::score::Scoreboard;

fn main() -> Result<()> {
    let raw = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: could not enable raw terminal mode: {err}");
            false
        }
    };

    let mut out = BufWriter::new(stdout());
    let result = run(&mut out);

    // Always restore the terminal
    if raw {
        let _ = terminal::disable_raw_mode();
    }
    result
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut rng = thread_rng();
    let mut state = compute::init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
    let mut board = Scoreboard::new();

    display::intro(out)?;
    read_key()?;

    while !board.is_game_over() {
        display::render(out, &state, &board)?;
        display::prompt(out)?;

        let key = read_key()?;
        write!(out, "\r\n")?;

        let command = match compute::parse_command(key) {
            Some(command) => command,
            None => {
                // Skip the tick — no state change.
                display::invalid_command(out)?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                board.end_game();
                continue;
            }
            Command::Move { dx, dy } => state = compute::move_player(&state, dx, dy),
        }

        let (next, events) = compute::resolve_collision(&state, &mut rng);
        state = next;

        for &event in &events {
            match event {
                GameEvent::TreasureCollected => display::treasure_found(out)?,
                GameEvent::TrapTriggered => display::trap_hit(out)?,
                _ => {}
            }
        }
        board.apply_all(&events);
    }

    display::game_over(out, &board)?;
    Ok(())
}

/// Block until a character key press.  Ctrl-C and Esc map to the quit key.
fn read_key() -> Result<char> {
    loop {
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
                    return Ok('q');
                }
                KeyCode::Esc => return Ok('q'),
                KeyCode::Char(c) => return Ok(c),
                _ => {}
            }
        }
    }
}
