use std::io::{self, Write};

use common::games::tictactoe::{MoveRecord, MoveSink};
use common::log;

/// Prints each committed move and the resulting board. Runs under the game
/// state lock, so the output order is the commit order.
pub struct ConsoleSink;

pub fn render_move(record: &MoveRecord) -> String {
    format!("\nPlayer {} inside mutex_lock\n{}", record.mark, record.board)
}

impl MoveSink for ConsoleSink {
    fn on_move(&self, record: &MoveRecord) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout
            .write_all(render_move(record).as_bytes())
            .and_then(|_| stdout.flush())
        {
            log!("Failed to print move {}: {}", record.sequence, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameStatus, Mark, Position, TicTacToeGameState};

    #[test]
    fn test_render_move_shows_player_and_board() {
        let mut state = TicTacToeGameState::new();
        let record = state.commit_move(Mark::O, Position::new(1, 0));

        assert_eq!(record.status, GameStatus::InProgress);
        assert_eq!(
            render_move(&record),
            "\nPlayer O inside mutex_lock\n . O .\n . . .\n . . .\n"
        );
    }
}
