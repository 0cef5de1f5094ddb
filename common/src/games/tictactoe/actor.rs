use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::game_state::SharedGameState;
use super::move_sink::MoveSink;
use super::types::{GameStatus, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorExit {
    /// The other player had already finished the game when the lock was taken.
    GameAlreadyOver,
    /// This player's own move ended the game.
    Finished(GameStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorSummary {
    pub mark: Mark,
    pub moves_made: usize,
    pub exit: ActorExit,
}

enum Turn {
    Continue,
    Exit(ActorExit),
}

/// One player thread: lock, check, move, evaluate, unlock, pause, repeat.
pub struct Actor {
    mark: Mark,
    state: SharedGameState,
    sink: Arc<dyn MoveSink>,
    rng: SessionRng,
    pause: Duration,
    moves_made: usize,
}

impl Actor {
    pub fn new(
        mark: Mark,
        state: SharedGameState,
        sink: Arc<dyn MoveSink>,
        rng: SessionRng,
        pause: Duration,
    ) -> Self {
        debug_assert_ne!(mark, Mark::Empty, "actor needs a real mark");
        Self {
            mark,
            state,
            sink,
            rng,
            pause,
            moves_made: 0,
        }
    }

    pub fn run(mut self) -> Result<ActorSummary, String> {
        log!("Player {} started (seed {})", self.mark, self.rng.seed());

        let exit = loop {
            match self.take_turn()? {
                Turn::Exit(exit) => break exit,
                Turn::Continue => {
                    if !self.pause.is_zero() {
                        thread::sleep(self.pause);
                    }
                }
            }
        };

        log!(
            "Player {} exited after {} moves: {:?}",
            self.mark,
            self.moves_made,
            exit
        );

        Ok(ActorSummary {
            mark: self.mark,
            moves_made: self.moves_made,
            exit,
        })
    }

    /// The whole body runs under the lock; the guard drops on return.
    fn take_turn(&mut self) -> Result<Turn, String> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| format!("Player {} found the game state lock poisoned", self.mark))?;

        if state.is_terminal() {
            return Ok(Turn::Exit(ActorExit::GameAlreadyOver));
        }

        let empty_cells = state.board.empty_cells();
        let idx = self
            .rng
            .random_index(empty_cells.len())
            .ok_or_else(|| format!("Player {} found no empty cell on a live board", self.mark))?;
        let position = empty_cells[idx];

        let record = state.commit_move(self.mark, position);
        self.moves_made += 1;
        self.sink.on_move(&record);

        if record.status.is_terminal() {
            Ok(Turn::Exit(ActorExit::Finished(record.status)))
        } else {
            Ok(Turn::Continue)
        }
    }
}
