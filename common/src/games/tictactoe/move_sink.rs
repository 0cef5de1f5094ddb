use std::sync::Mutex;

use super::game_state::MoveRecord;

/// Receives every committed move while the game state lock is still held,
/// so calls arrive in commit order.
pub trait MoveSink: Send + Sync {
    fn on_move(&self, record: &MoveRecord);
}

pub struct NullSink;

impl MoveSink for NullSink {
    fn on_move(&self, _record: &MoveRecord) {}
}

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<MoveRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<MoveRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl MoveSink for RecordingSink {
    fn on_move(&self, record: &MoveRecord) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(record.clone());
    }
}
