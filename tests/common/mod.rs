#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sql_conduit::prelude::*;

/// Everything the recording adapter saw, shared with the test body.
#[derive(Debug, Default)]
pub struct Journal {
    pub statements: Vec<String>,
}

pub type SharedJournal = Arc<Mutex<Journal>>;

/// Adapter that records statements instead of talking to a server.
///
/// Statements registered with `respond_with` return a cursor over the given
/// rows; statements registered with `fail_on` return an execution error.
pub struct RecordingAdapter {
    journal: SharedJournal,
    responses: HashMap<String, ResultSet>,
    failures: Vec<String>,
    id: String,
}

impl RecordingAdapter {
    pub fn new(journal: SharedJournal) -> Self {
        Self {
            journal,
            responses: HashMap::new(),
            failures: Vec::new(),
            id: "mock-1".to_string(),
        }
    }

    pub fn respond_with(mut self, sql: &str, columns: &[&str], rows: Vec<Vec<RowValues>>) -> Self {
        let mut rs = ResultSet::new(columns.iter().map(|c| (*c).to_string()).collect());
        for row in rows {
            rs.add_row_values(row);
        }
        self.responses.insert(sql.to_string(), rs);
        self
    }

    pub fn fail_on(mut self, sql: &str) -> Self {
        self.failures.push(sql.to_string());
        self
    }
}

impl Adapter for RecordingAdapter {
    fn query(&mut self, sql: &str) -> Result<QueryResult, SqlConduitError> {
        self.journal
            .lock()
            .unwrap()
            .statements
            .push(sql.to_string());
        if self.failures.iter().any(|f| f == sql) {
            return Err(SqlConduitError::ExecutionError(format!("refused: {sql}")));
        }
        Ok(self
            .responses
            .get(sql)
            .cloned()
            .map(|rs| Box::new(rs) as Box<dyn Cursor>))
    }

    // MySQL-style escaping so quoting is visible in assertions
    fn escape_string(&self, value: &str) -> String {
        value.replace('\\', "\\\\").replace('\'', "\\'")
    }

    fn connection_id(&self) -> String {
        self.id.clone()
    }
}

/// Fresh connection over a recording adapter, plus its journal.
pub fn recording_connection(descriptor: Descriptor) -> (Connection, SharedJournal) {
    let journal = SharedJournal::default();
    let adapter = RecordingAdapter::new(Arc::clone(&journal));
    (Connection::new(Box::new(adapter), descriptor), journal)
}

pub fn statements(journal: &SharedJournal) -> Vec<String> {
    journal.lock().unwrap().statements.clone()
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub lines: Mutex<Vec<(String, LogLevel)>>,
}

impl QueryLogger for RecordingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        self.lines.lock().unwrap().push((message.to_string(), level));
    }
}

#[derive(Debug, Default)]
pub struct RecordingProfiler {
    pub events: Mutex<Vec<String>>,
}

impl Profiler for RecordingProfiler {
    fn start_profile(&self, sql: &str) {
        self.events.lock().unwrap().push(format!("start {sql}"));
    }

    fn stop_profile(&self, sql: &str) {
        self.events.lock().unwrap().push(format!("stop {sql}"));
    }
}
