use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::{PredictionRequest, PredictionResult};

pub const HISTORY_CAPACITY: usize = 5;

/// A past prediction together with the inputs the user submitted. The
/// result may echo different values when a remote scorer rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub request: PredictionRequest,
    pub result: PredictionResult,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    /// Wall-clock time shown next to the entry, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.recorded_at.format("%H:%M").to_string()
    }
}

/// Rolling, most-recent-first list of past predictions.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn record(&mut self, request: PredictionRequest, result: PredictionResult) -> Option<HistoryEntry> {
        self.push(request, result, Local::now())
    }

    /// Insert at the front, returning the evicted oldest entry if the cap was exceeded.
    pub fn push(
        &mut self,
        request: PredictionRequest,
        result: PredictionResult,
        recorded_at: DateTime<Local>,
    ) -> Option<HistoryEntry> {
        self.entries.push_front(HistoryEntry {
            request,
            result,
            recorded_at,
        });
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
