use std::fmt;

use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 3x3 grid plus the list of cells still open for a move.
///
/// Holds no lock of its own; whoever mutates it must own the game state
/// lock. `empty_cells` always lists exactly the cells that read `Mark::Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    empty_cells: Vec<Position>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::from_cells([[Mark::Empty; BOARD_SIZE]; BOARD_SIZE])
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let empty_cells = get_available_moves(&cells);
        Self { cells, empty_cells }
    }

    /// Builds a board from three rows of `X`, `O` and `.` characters.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!("Row {} must have {} cells: {:?}", y, BOARD_SIZE, row));
            }
            for (x, &symbol) in symbols.iter().enumerate() {
                cells[y][x] = Mark::from_symbol(symbol)
                    .ok_or_else(|| format!("Unknown cell symbol {:?} in row {}", symbol, y))?;
            }
        }
        Ok(Self::from_cells(cells))
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.y][pos.x]
    }

    /// Writes `mark` into an empty cell.
    ///
    /// Callers only ever pick from `empty_cells`, so a non-empty target is a
    /// logic error and is caught in debug builds only.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert_ne!(mark, Mark::Empty, "cannot place an empty mark");
        debug_assert_eq!(self.get(pos), Mark::Empty, "cell {} already marked", pos);

        self.cells[pos.y][pos.x] = mark;
        if let Some(idx) = self.empty_cells.iter().position(|&p| p == pos) {
            self.empty_cells.swap_remove(idx);
        }
    }

    pub fn empty_cells(&self) -> &[Position] {
        &self.empty_cells
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn marked_count(&self) -> usize {
        self.count(Mark::X) + self.count(Mark::O)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn get_available_moves(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Vec<Position> {
    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (y, row) in cells.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(x, y));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.empty_cells().len(), CELL_COUNT);
        assert_eq!(board.marked_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_removes_cell_from_empty_list() {
        let mut board = Board::new();
        let pos = Position::new(1, 2);

        board.place(pos, Mark::O);

        assert_eq!(board.get(pos), Mark::O);
        assert_eq!(board.empty_cells().len(), CELL_COUNT - 1);
        assert!(!board.empty_cells().contains(&pos));
    }

    #[test]
    fn test_from_rows_tracks_empty_cells() {
        let board = Board::from_rows(["X.O", ". X .", "O . ."]).unwrap();

        assert_eq!(board.get(Position::new(0, 0)), Mark::X);
        assert_eq!(board.get(Position::new(2, 0)), Mark::O);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.empty_cells().len(), 5);
        for &pos in board.empty_cells() {
            assert_eq!(board.get(pos), Mark::Empty);
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(["XX", "...", "..."]).is_err());
        assert!(Board::from_rows(["XQX", "...", "..."]).is_err());
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();

        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
        assert_eq!(board.marked_count(), CELL_COUNT);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_rows(["X..", ".O.", "..X"]).unwrap();

        assert_eq!(board.to_string(), " X . .\n . O .\n . . X\n");
    }
}
