use std::sync::{Arc, Mutex};

use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

pub type SharedGameState = Arc<Mutex<TicTacToeGameState>>;

/// One committed move, stamped with its position in lock-acquisition order.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub sequence: u64,
    pub mark: Mark,
    pub position: Position,
    pub board: Board,
    pub status: GameStatus,
}

/// Everything the two players share. Only touched through `SharedGameState`.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub history: Vec<(Mark, Position)>,
    next_sequence: u64,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        let status = evaluate(&board);
        let winning_line = check_win_with_line(&board);
        Self {
            board,
            status,
            winning_line,
            history: Vec::new(),
            next_sequence: 1,
        }
    }

    pub fn shared() -> SharedGameState {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Places `mark` on an empty cell and re-evaluates the board.
    ///
    /// Status only ever moves from `InProgress` to a terminal value.
    pub fn commit_move(&mut self, mark: Mark, position: Position) -> MoveRecord {
        debug_assert!(!self.is_terminal(), "move committed after game over");

        self.board.place(position, mark);
        self.history.push((mark, position));

        self.status = evaluate(&self.board);
        if self.status.winner().is_some() {
            self.winning_line = check_win_with_line(&self.board);
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        MoveRecord {
            sequence,
            mark,
            position,
            board: self.board.clone(),
            status: self.status,
        }
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_progress() {
        let state = TicTacToeGameState::new();

        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.winner(), None);
        assert!(state.winning_line.is_none());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_commit_move_assigns_increasing_sequence() {
        let mut state = TicTacToeGameState::new();

        let first = state.commit_move(Mark::X, Position::new(0, 0));
        let second = state.commit_move(Mark::X, Position::new(1, 1));

        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(second.board.marked_count(), 2);
        assert_eq!(state.history, vec![(Mark::X, Position::new(0, 0)), (Mark::X, Position::new(1, 1))]);
    }

    #[test]
    fn test_commit_winning_move_sets_terminal() {
        let board = Board::from_rows(["OO.", "XX.", "..."]).unwrap();
        let mut state = TicTacToeGameState::from_board(board);

        let record = state.commit_move(Mark::O, Position::new(2, 0));

        assert_eq!(record.status, GameStatus::OWon);
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Mark::O));
        let line = state.winning_line.unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_commit_last_cell_draws() {
        let board = Board::from_rows(["XOX", "XOO", "OX."]).unwrap();
        let mut state = TicTacToeGameState::from_board(board);

        let record = state.commit_move(Mark::X, Position::new(2, 2));

        assert_eq!(record.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert!(state.winning_line.is_none());
    }
}
