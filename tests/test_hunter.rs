use terminal_arcade::events::GameEvent;
use terminal_arcade::hunter::compute::*;
use terminal_arcade::hunter::entities::*;
use terminal_arcade::score::Scoreboard;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// 4×3 board with the player at the center and no cells placed.
fn empty_state() -> HuntState {
    HuntState {
        width: 4,
        height: 3,
        cells: Vec::new(),
        player: Player { x: 2, y: 1 },
    }
}

fn cell(x: i32, y: i32, kind: CellKind) -> Cell {
    Cell {
        x,
        y,
        kind,
        active: true,
    }
}

// ── parse_command ─────────────────────────────────────────────────────────────

#[test]
fn commands_are_case_insensitive() {
    assert_eq!(parse_command('w'), Some(Command::Move { dx: 0, dy: -1 }));
    assert_eq!(parse_command('W'), Some(Command::Move { dx: 0, dy: -1 }));
    assert_eq!(parse_command('a'), Some(Command::Move { dx: -1, dy: 0 }));
    assert_eq!(parse_command('S'), Some(Command::Move { dx: 0, dy: 1 }));
    assert_eq!(parse_command('d'), Some(Command::Move { dx: 1, dy: 0 }));
    assert_eq!(parse_command('Q'), Some(Command::Quit));
}

#[test]
fn unknown_keys_are_rejected() {
    assert_eq!(parse_command('x'), None);
    assert_eq!(parse_command(' '), None);
    assert_eq!(parse_command('1'), None);
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_fills_every_cell_except_the_player() {
    let s = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut seeded_rng());
    assert_eq!(s.player.x, FIELD_WIDTH / 2);
    assert_eq!(s.player.y, FIELD_HEIGHT / 2);
    assert_eq!(s.cells.len(), (FIELD_WIDTH * FIELD_HEIGHT - 1) as usize);
    assert!(s.cells.iter().all(|c| c.active));
    assert!(active_cell_at(&s, s.player.x, s.player.y).is_none());
}

#[test]
fn init_places_each_cell_once() {
    let s = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut seeded_rng());
    for y in 0..FIELD_HEIGHT {
        for x in 0..FIELD_WIDTH {
            let n = s.cells.iter().filter(|c| c.x == x && c.y == y).count();
            let expected = if x == s.player.x && y == s.player.y { 0 } else { 1 };
            assert_eq!(n, expected, "cell ({x}, {y})");
        }
    }
}

// ── move_player ───────────────────────────────────────────────────────────────

#[test]
fn move_within_bounds() {
    let s = empty_state();
    let s2 = move_player(&s, -1, 0);
    assert_eq!((s2.player.x, s2.player.y), (1, 1));
    let s3 = move_player(&s2, 0, 1);
    assert_eq!((s3.player.x, s3.player.y), (1, 2));
}

#[test]
fn out_of_bounds_move_is_a_no_op() {
    let mut s = empty_state();
    s.player = Player { x: 0, y: 0 };
    let s2 = move_player(&s, -1, 0);
    assert_eq!((s2.player.x, s2.player.y), (0, 0));
    let s3 = move_player(&s, 0, -1);
    assert_eq!((s3.player.x, s3.player.y), (0, 0));

    s.player = Player { x: 3, y: 2 };
    let s4 = move_player(&s, 1, 0);
    assert_eq!((s4.player.x, s4.player.y), (3, 2));
    let s5 = move_player(&s, 0, 1);
    assert_eq!((s5.player.x, s5.player.y), (3, 2));
}

#[test]
fn move_does_not_mutate_original() {
    let s = empty_state();
    let _ = move_player(&s, 1, 0);
    assert_eq!((s.player.x, s.player.y), (2, 1));
}

// ── resolve_collision ─────────────────────────────────────────────────────────

#[test]
fn treasure_is_collected_and_deactivated() {
    let mut s = empty_state();
    s.cells.push(cell(2, 1, CellKind::Treasure));
    let (s2, events) = resolve_collision(&s, &mut seeded_rng());

    assert_eq!(events, vec![GameEvent::TreasureCollected]);
    assert!(!s2.cells[0].active);
    // A replacement trap appeared somewhere free
    let traps: Vec<_> = s2
        .cells
        .iter()
        .filter(|c| c.active && c.kind == CellKind::Trap)
        .collect();
    assert_eq!(traps.len(), 1);
    assert!(!(traps[0].x == s2.player.x && traps[0].y == s2.player.y));
}

#[test]
fn trap_raises_trap_triggered() {
    let mut s = empty_state();
    s.cells.push(cell(2, 1, CellKind::Trap));
    let (s2, events) = resolve_collision(&s, &mut seeded_rng());
    assert_eq!(events, vec![GameEvent::TrapTriggered]);
    // The trap itself is not consumed
    assert!(s2.cells[0].active);
}

#[test]
fn empty_cell_raises_nothing() {
    let mut s = empty_state();
    s.cells.push(cell(0, 0, CellKind::Trap));
    let (s2, events) = resolve_collision(&s, &mut seeded_rng());
    assert!(events.is_empty());
    assert_eq!(s2.cells.len(), 1);
}

#[test]
fn inactive_cell_is_never_matched() {
    let mut s = empty_state();
    let mut c = cell(2, 1, CellKind::Trap);
    c.active = false;
    s.cells.push(c);
    let (_, events) = resolve_collision(&s, &mut seeded_rng());
    assert!(events.is_empty());
}

#[test]
fn first_cell_in_storage_order_wins() {
    // Two cells share the player's position: only the first reacts
    let mut s = empty_state();
    s.cells.push(cell(2, 1, CellKind::Treasure));
    s.cells.push(cell(2, 1, CellKind::Trap));
    let (s2, events) = resolve_collision(&s, &mut seeded_rng());
    assert_eq!(events, vec![GameEvent::TreasureCollected]);
    assert!(!s2.cells[0].active);
    assert!(s2.cells[1].active);
}

// ── spawn_trap ────────────────────────────────────────────────────────────────

#[test]
fn spawned_traps_never_overlap() {
    // 12 cells, player on one: eight spawns always have free room left,
    // so all eight must land, each on its own empty cell
    let mut s = empty_state();
    let mut rng = seeded_rng();
    for _ in 0..8 {
        spawn_trap(&mut s, &mut rng);
    }
    assert_eq!(s.cells.len(), 8);
    for (i, a) in s.cells.iter().enumerate() {
        assert!(!(a.x == s.player.x && a.y == s.player.y));
        for b in &s.cells[i + 1..] {
            assert!(!(a.x == b.x && a.y == b.y), "overlap at ({}, {})", a.x, a.y);
        }
    }
}

#[test]
fn spawn_gives_up_cleanly_on_a_full_board() {
    // 2×2 board: player plus three active cells occupy everything
    let mut s = HuntState {
        width: 2,
        height: 2,
        cells: vec![
            cell(1, 0, CellKind::Treasure),
            cell(0, 1, CellKind::Treasure),
            cell(1, 1, CellKind::Trap),
        ],
        player: Player { x: 0, y: 0 },
    };
    spawn_trap(&mut s, &mut seeded_rng());
    assert_eq!(s.cells.len(), 3); // no placement, no panic
}

// ── Whole-game flow ───────────────────────────────────────────────────────────

#[test]
fn collecting_three_treasures_levels_up() {
    let mut s = HuntState {
        width: 5,
        height: 1,
        cells: vec![
            cell(1, 0, CellKind::Treasure),
            cell(2, 0, CellKind::Treasure),
            cell(3, 0, CellKind::Treasure),
        ],
        player: Player { x: 0, y: 0 },
    };
    let mut board = Scoreboard::new();
    let mut rng = seeded_rng();

    for _ in 0..3 {
        s = move_player(&s, 1, 0);
        let (next, events) = resolve_collision(&s, &mut rng);
        s = next;
        board.apply_all(&events);
    }

    assert_eq!(board.level, 2);
    assert_eq!(board.treasures_to_win, 5);
    assert_eq!(board.score, 0);
    assert!(!board.is_game_over());
}
