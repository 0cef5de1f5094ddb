use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::actor::{Actor, ActorSummary};
use super::board::Board;
use super::game_state::{SharedGameState, TicTacToeGameState};
use super::move_sink::MoveSink;
use super::types::{GameStatus, Mark, Position, WinningLine};

pub const DEFAULT_PAUSE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub seed: u64,
    pub pause: Duration,
}

impl GameSettings {
    pub fn new(seed: u64, pause: Duration) -> Self {
        Self { seed, pause }
    }
}

#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub board: Board,
    pub winning_line: Option<WinningLine>,
    pub history: Vec<(Mark, Position)>,
    pub total_moves: usize,
    pub actors: Vec<ActorSummary>,
    pub seed: u64,
}

impl GameOutcome {
    pub fn from_final_state(state: &TicTacToeGameState, actors: Vec<ActorSummary>, seed: u64) -> Self {
        Self {
            status: state.status,
            board: state.board.clone(),
            winning_line: state.winning_line,
            history: state.history.clone(),
            total_moves: state.move_count(),
            actors,
            seed,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn result_line(&self) -> String {
        match (self.status, self.winner()) {
            (_, Some(mark)) => format!("Winner: {}", mark),
            (GameStatus::Draw, None) => "Result: Draw".to_string(),
            _ => "Result: Unfinished".to_string(),
        }
    }

    pub fn moves_by(&self, mark: Mark) -> usize {
        self.actors
            .iter()
            .filter(|a| a.mark == mark)
            .map(|a| a.moves_made)
            .sum()
    }
}

/// Spawns player X and player O on their own threads over one shared state,
/// joins both and reads the result.
pub fn run_game(settings: &GameSettings, sink: Arc<dyn MoveSink>) -> Result<GameOutcome, String> {
    let state = TicTacToeGameState::shared();
    log!("Starting game with seed {}", settings.seed);

    let handles = [Mark::X, Mark::O]
        .into_iter()
        .map(|mark| spawn_actor(mark, &state, &sink, settings))
        .collect::<Result<Vec<_>, String>>()?;

    let mut actors = Vec::with_capacity(handles.len());
    for (mark, handle) in handles {
        let summary = handle
            .join()
            .map_err(|_| format!("Player {} thread panicked", mark))??;
        actors.push(summary);
    }

    let state = state
        .lock()
        .map_err(|_| "Game state lock poisoned after players exited".to_string())?;

    if !state.is_terminal() {
        return Err("Both players exited before the game finished".to_string());
    }

    let outcome = GameOutcome::from_final_state(&state, actors, settings.seed);
    log!("Game finished after {} moves: {}", outcome.total_moves, outcome.result_line());
    Ok(outcome)
}

fn spawn_actor(
    mark: Mark,
    state: &SharedGameState,
    sink: &Arc<dyn MoveSink>,
    settings: &GameSettings,
) -> Result<(Mark, thread::JoinHandle<Result<ActorSummary, String>>), String> {
    let actor = Actor::new(
        mark,
        state.clone(),
        sink.clone(),
        SessionRng::for_player(settings.seed, mark),
        settings.pause,
    );

    thread::Builder::new()
        .name(format!("player-{}", mark))
        .spawn(move || actor.run())
        .map(|handle| (mark, handle))
        .map_err(|e| format!("Failed to spawn player {} thread: {}", mark, e))
}
