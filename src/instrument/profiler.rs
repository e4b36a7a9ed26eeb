use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Profiler;

/// One profiled statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileItem {
    pub sql: String,
    pub initial_time: DateTime<Utc>,
    pub final_time: DateTime<Utc>,
}

impl ProfileItem {
    #[must_use]
    pub fn total_elapsed_seconds(&self) -> f64 {
        let elapsed = self.final_time - self.initial_time;
        elapsed
            .num_microseconds()
            .map_or(elapsed.num_milliseconds() as f64 / 1_000.0, |us| {
                us as f64 / 1_000_000.0
            })
    }
}

#[derive(Debug, Default)]
struct ProfilerState {
    /// Started statements awaiting their stop, oldest first
    pending: Vec<(String, DateTime<Utc>)>,
    items: Vec<ProfileItem>,
    total_elapsed: f64,
}

/// In-memory [`Profiler`] keeping every completed statement.
///
/// One profiler may be shared by several connections; overlapping statements
/// are matched to their stop by SQL text.
#[derive(Debug, Default)]
pub struct QueryProfiler {
    state: Mutex<ProfilerState>,
}

impl QueryProfiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ProfilerState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The most recently completed statement.
    #[must_use]
    pub fn last_profile(&self) -> Option<ProfileItem> {
        self.state().items.last().cloned()
    }

    #[must_use]
    pub fn profiles(&self) -> Vec<ProfileItem> {
        self.state().items.clone()
    }

    #[must_use]
    pub fn number_total_statements(&self) -> usize {
        self.state().items.len()
    }

    #[must_use]
    pub fn total_elapsed_seconds(&self) -> f64 {
        self.state().total_elapsed
    }

    /// Statements started but not yet stopped.
    #[must_use]
    pub fn pending_statements(&self) -> usize {
        self.state().pending.len()
    }

    /// Drop all recorded statements and any pending starts.
    pub fn reset(&self) {
        *self.state() = ProfilerState::default();
    }
}

impl Profiler for QueryProfiler {
    fn start_profile(&self, sql: &str) {
        self.state().pending.push((sql.to_owned(), Utc::now()));
    }

    fn stop_profile(&self, sql: &str) {
        let mut state = self.state();
        // most recent start wins when the same text is in flight twice
        let Some(position) = state.pending.iter().rposition(|(pending, _)| pending == sql) else {
            tracing::warn!(
                pending = state.pending.len(),
                "stop_profile without a matching start: {sql}"
            );
            return;
        };
        let (sql, initial_time) = state.pending.remove(position);
        let item = ProfileItem {
            sql,
            initial_time,
            final_time: Utc::now(),
        };
        state.total_elapsed += item.total_elapsed_seconds();
        state.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_completed_statements() {
        let profiler = QueryProfiler::new();
        profiler.start_profile("SELECT 1");
        profiler.stop_profile("SELECT 1");
        profiler.start_profile("SELECT 2");
        profiler.stop_profile("SELECT 2");

        assert_eq!(profiler.number_total_statements(), 2);
        assert_eq!(profiler.last_profile().unwrap().sql, "SELECT 2");
        let item = profiler.profiles().remove(0);
        assert!(item.final_time >= item.initial_time);
        assert!(profiler.total_elapsed_seconds() >= 0.0);
    }

    #[test]
    fn ignores_unmatched_stop() {
        let profiler = QueryProfiler::new();
        profiler.stop_profile("SELECT 1");
        assert_eq!(profiler.number_total_statements(), 0);

        profiler.start_profile("SELECT 1");
        profiler.stop_profile("SELECT 2");
        assert_eq!(profiler.number_total_statements(), 0);
        assert!(profiler.last_profile().is_none());
        assert_eq!(profiler.pending_statements(), 1);
    }

    #[test]
    fn overlapping_statements_are_all_recorded() {
        let profiler = QueryProfiler::new();
        profiler.start_profile("SELECT a");
        profiler.start_profile("SELECT b");
        profiler.stop_profile("SELECT b");
        profiler.stop_profile("SELECT a");

        let recorded: Vec<String> = profiler.profiles().into_iter().map(|p| p.sql).collect();
        assert_eq!(recorded, vec!["SELECT b", "SELECT a"]);
        assert_eq!(profiler.pending_statements(), 0);
    }

    #[test]
    fn reset_clears_history() {
        let profiler = QueryProfiler::new();
        profiler.start_profile("BEGIN");
        profiler.stop_profile("BEGIN");
        profiler.start_profile("COMMIT");
        profiler.reset();
        assert_eq!(profiler.number_total_statements(), 0);
        assert_eq!(profiler.pending_statements(), 0);
        assert_eq!(profiler.total_elapsed_seconds(), 0.0);
    }
}
