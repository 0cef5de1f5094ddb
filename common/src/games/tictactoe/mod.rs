mod actor;
mod board;
mod coordinator;
mod game_state;
mod move_sink;
mod types;
mod win_detector;

pub use actor::{Actor, ActorExit, ActorSummary};
pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves};
pub use coordinator::{DEFAULT_PAUSE, GameOutcome, GameSettings, run_game};
pub use game_state::{MoveRecord, SharedGameState, TicTacToeGameState};
pub use move_sink::{MoveSink, NullSink, RecordingSink};
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate};
