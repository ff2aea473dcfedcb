//! Terminal rendering and line input for the interactive `play` loop.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::io::Write;

use noventa::{BOARD_SIZE, BoardView, Cell, Command, Coord};

pub const WELCOME: &str = "\
Bienvenido al juego de Noventa Grados.
Introduzca sus jugadas con el formato dd-dd donde d es un dígito en el rango [0, 6] (por ejemplo 00-04 o 65-63).
También puede seleccionar una casilla con dd y después su destino con otro dd.
Para deshacer la última jugada introduzca \"deshacer\".
Para interrumpir la partida introduzca \"salir\".";

pub const FORMAT_HELP: &str = "\
Error en el formato de entrada.
Se requieren cuatro dígitos en parejas separados por un guion, por ejemplo 04-06 o 62-63, \
dos dígitos para una casilla, o bien \"deshacer\" o \"salir\".
Los números estarán siempre en el rango [0,6].";

/// One line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Command(Command),
    Click(Coord),
    Blank,
    Invalid(String),
}

#[must_use]
pub fn parse_play_input(line: &str) -> PlayInput {
    let line = line.trim();
    if line.is_empty() {
        return PlayInput::Blank;
    }
    if let Ok(command) = line.parse::<Command>() {
        return PlayInput::Command(command);
    }
    match parse_cell(line) {
        Some(coord) => PlayInput::Click(coord),
        None => PlayInput::Invalid(line.to_owned()),
    }
}

fn parse_cell(text: &str) -> Option<Coord> {
    let mut digits = text.chars().map(|c| c.to_digit(10));
    let (Some(Some(row)), Some(Some(col)), None) = (digits.next(), digits.next(), digits.next()) else {
        return None;
    };
    let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
    (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Coord::new(row, col))
}

/// Grid with row numbers on the left and a column header below. The
/// highlighted cell is wrapped in brackets.
#[must_use]
pub fn format_grid(cells: &[Cell], highlighted: Option<Coord>) -> String {
    let mut out = String::new();
    let mut current_row = None;
    for cell in cells {
        if current_row != Some(cell.coord.row) {
            if current_row.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("{:>2} ", cell.coord.row));
            current_row = Some(cell.coord.row);
        }
        if highlighted == Some(cell.coord) {
            out.push_str(&format!("[{}]", cell.token));
        } else {
            out.push_str(&format!(" {} ", cell.token));
        }
    }
    out.push('\n');
    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {col:^2} "));
    }
    out.push('\n');
    out
}

/// [`BoardView`] that prints to a writer, normally stdout.
pub struct TerminalView<W: Write> {
    out: W,
    cells: Vec<Cell>,
    highlighted: Option<Coord>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, cells: Vec::new(), highlighted: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "terminal write failed");
        }
    }

    fn print_grid(&mut self) {
        let grid = format_grid(&self.cells, self.highlighted);
        self.print(&grid);
    }
}

impl<W: Write> BoardView for TerminalView<W> {
    fn render_grid(&mut self, cells: &[Cell]) {
        self.cells = cells.to_vec();
        self.highlighted = None;
        self.print_grid();
    }

    fn highlight(&mut self, coord: Coord) {
        self.highlighted = Some(coord);
        self.print_grid();
    }

    fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    fn set_message(&mut self, text: &str) {
        self.print(&format!("> {text}"));
    }

    fn set_status(&mut self, text: &str) {
        self.print(&format!("[{text}]"));
    }
}
