use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

/// Every line that wins: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        if mark != Mark::Empty && board.get(b) == mark && board.get(c) == mark {
            Some(WinningLine::new(mark, a, c))
        } else {
            None
        }
    })
}

/// Winner first, then fullness.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(status) = check_win(board).and_then(GameStatus::won_by) {
        return status;
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
