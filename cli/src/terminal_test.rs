use noventa::{Board, MoveRequest};

use super::*;

// =============================================================
// parse_play_input
// =============================================================

#[test]
fn full_move_is_a_command() {
    let expected: MoveRequest = "12-34".parse().expect("move");
    assert_eq!(parse_play_input("12-34\n"), PlayInput::Command(Command::Move(expected)));
}

#[test]
fn keywords_are_commands() {
    assert_eq!(parse_play_input("deshacer"), PlayInput::Command(Command::Undo));
    assert_eq!(parse_play_input("SALIR"), PlayInput::Command(Command::Quit));
}

#[test]
fn two_digits_are_a_click() {
    assert_eq!(parse_play_input("23"), PlayInput::Click(Coord::new(2, 3)));
}

#[test]
fn out_of_range_cell_is_invalid() {
    assert_eq!(parse_play_input("27"), PlayInput::Invalid("27".to_owned()));
    assert_eq!(parse_play_input("234"), PlayInput::Invalid("234".to_owned()));
}

#[test]
fn blank_line() {
    assert_eq!(parse_play_input("   "), PlayInput::Blank);
}

// =============================================================
// format_grid
// =============================================================

#[test]
fn grid_brackets_highlighted_cell() {
    let board = Board::parse("0 RB --\n1 -- PN\n").expect("board");
    let text = format_grid(board.cells(), Some(Coord::new(1, 1)));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " 0  RB  -- ");
    assert_eq!(lines[1], " 1  -- [PN]");
    assert!(lines[2].trim_start().starts_with('0'));
}

// =============================================================
// TerminalView
// =============================================================

#[test]
fn view_prints_messages_and_status() {
    let mut view = TerminalView::new(Vec::new());
    view.set_status("Turno: Blancas");
    view.set_message("Move applied");
    let out = String::from_utf8(view.into_inner()).expect("utf8");
    assert_eq!(out, "[Turno: Blancas]\n> Move applied\n");
}

#[test]
fn clear_highlight_does_not_reprint() {
    let board = Board::parse("0 RB --\n").expect("board");
    let mut view = TerminalView::new(Vec::new());
    view.render_grid(board.cells());
    view.highlight(Coord::new(0, 0));
    view.clear_highlight();
    let out = String::from_utf8(view.into_inner()).expect("utf8");
    assert_eq!(out.lines().filter(|l| l.starts_with(" 0 ")).count(), 2);
    assert!(out.contains("[RB]"));
}
