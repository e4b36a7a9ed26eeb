mod common;

use std::sync::Arc;

use common::{
    RecordingAdapter, RecordingLogger, RecordingProfiler, SharedJournal, recording_connection,
    statements,
};
use serde_json::json;
use sql_conduit::prelude::*;

fn descriptor(pairs: &[(&str, &str)]) -> Descriptor {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn metadata_reads_descriptor_keys() {
    let (conn, _) = recording_connection(descriptor(&[
        ("host", "db.example.com"),
        ("username", "scott"),
        ("name", "inventory"),
        ("schema", "public"),
    ]));
    assert_eq!(conn.host_name(), "db.example.com");
    assert_eq!(conn.username(), "scott");
    assert_eq!(conn.database_name(), "inventory");
    assert_eq!(conn.default_schema(), "public");
}

#[test]
fn default_schema_falls_back_to_name_then_empty() {
    let (with_schema, _) = recording_connection(descriptor(&[("schema", "s"), ("name", "n")]));
    assert_eq!(with_schema.default_schema(), "s");

    let (name_only, _) = recording_connection(descriptor(&[("name", "n")]));
    assert_eq!(name_only.default_schema(), "n");

    let (neither, _) = recording_connection(descriptor(&[("host", "h")]));
    assert_eq!(neither.default_schema(), "");
}

#[test]
fn missing_metadata_is_empty_string() {
    let (conn, _) = recording_connection(Descriptor::new());
    assert_eq!(conn.host_name(), "");
    assert_eq!(conn.username(), "");
    assert_eq!(conn.database_name(), "");
    assert_eq!(conn.default_schema(), "");
}

#[test]
fn non_string_descriptor_values_render_as_text() {
    let d: Descriptor = [("name", json!(42)), ("host", json!(null))]
        .into_iter()
        .collect();
    let (conn, _) = recording_connection(d);
    assert_eq!(conn.database_name(), "42");
    assert_eq!(conn.host_name(), "");
}

fn robots_adapter(journal: &SharedJournal) -> RecordingAdapter {
    RecordingAdapter::new(journal.clone()).respond_with(
        "SELECT id, name FROM robots",
        &["id", "name"],
        vec![
            vec![RowValues::Int(1), RowValues::Text("Robotina".into())],
            vec![RowValues::Int(2), RowValues::Text("Astro Boy".into())],
            vec![RowValues::Int(3), RowValues::Text("Terminator".into())],
        ],
    )
}

#[test]
fn fetch_one_returns_first_row() -> Result<(), Box<dyn std::error::Error>> {
    let journal = SharedJournal::default();
    let mut conn = Connection::new(Box::new(robots_adapter(&journal)), Descriptor::new());
    let row = conn.fetch_one("SELECT id, name FROM robots", FetchMode::Both)?;
    assert_eq!(row.get("id"), Some(&RowValues::Int(1)));
    assert_eq!(
        row.get_by_index(1),
        Some(&RowValues::Text("Robotina".into()))
    );
    Ok(())
}

#[test]
fn fetch_one_without_cursor_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let (mut conn, journal) = recording_connection(Descriptor::new());
    let row = conn.fetch_one("UPDATE robots SET year = 1", FetchMode::Both)?;
    assert!(row.is_empty());
    assert_eq!(statements(&journal), vec!["UPDATE robots SET year = 1"]);
    Ok(())
}

#[test]
fn fetch_all_collects_in_order_with_fetch_mode() -> Result<(), Box<dyn std::error::Error>> {
    let journal = SharedJournal::default();
    let mut conn = Connection::new(Box::new(robots_adapter(&journal)), Descriptor::new());
    let rows = conn.fetch_all("SELECT id, name FROM robots", FetchMode::Num)?;
    let ids: Vec<i64> = rows
        .iter()
        .filter_map(|r| r.get_by_index(0).and_then(RowValues::as_int).copied())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(rows.iter().all(|r| r.get("id").is_none()));
    Ok(())
}

#[test]
fn fetch_all_without_cursor_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let (mut conn, _) = recording_connection(Descriptor::new());
    let rows = conn.fetch_all("DELETE FROM robots", FetchMode::Assoc)?;
    assert!(rows.is_empty());
    Ok(())
}

#[test]
fn fetch_propagates_query_errors() {
    let journal = SharedJournal::default();
    let adapter = RecordingAdapter::new(journal.clone()).fail_on("SELECT broken");
    let mut conn = Connection::new(Box::new(adapter), Descriptor::new());
    assert!(conn.fetch_all("SELECT broken", FetchMode::Both).is_err());
    assert!(conn.fetch_one("SELECT broken", FetchMode::Both).is_err());
}

#[test]
fn logger_prefixes_connection_id_at_debug() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Arc::new(RecordingLogger::default());
    let (conn, _) = recording_connection(Descriptor::new());
    let mut conn = conn.with_logger(logger.clone());
    conn.query("SELECT 1")?;
    conn.delete("robots", "id = 1")?;

    let lines = logger.lines.lock().expect("logger lock").clone();
    assert_eq!(
        lines,
        vec![
            ("[mock-1] SELECT 1".to_string(), LogLevel::Debug),
            ("[mock-1] DELETE FROM robots WHERE id = 1".to_string(), LogLevel::Debug),
        ]
    );
    Ok(())
}

#[test]
fn profiler_brackets_every_statement_even_on_failure() -> Result<(), Box<dyn std::error::Error>> {
    let profiler = Arc::new(RecordingProfiler::default());
    let journal = SharedJournal::default();
    let adapter = RecordingAdapter::new(journal.clone()).fail_on("SELECT broken");
    let mut conn =
        Connection::new(Box::new(adapter), Descriptor::new()).with_profiler(profiler.clone());

    conn.begin()?;
    assert!(conn.query("SELECT broken").is_err());
    conn.rollback()?;

    let events = profiler.events.lock().expect("profiler lock").clone();
    assert_eq!(
        events,
        vec![
            "start BEGIN",
            "stop BEGIN",
            "start SELECT broken",
            "stop SELECT broken",
            "start ROLLBACK",
            "stop ROLLBACK",
        ]
    );
    Ok(())
}

#[test]
fn shared_profiler_keeps_interleaved_statements() -> Result<(), Box<dyn std::error::Error>> {
    let profiler = Arc::new(QueryProfiler::new());
    let (a, _) = recording_connection(Descriptor::new());
    let (b, _) = recording_connection(Descriptor::new());
    let a = a.with_profiler(profiler.clone());
    let mut b = b.with_profiler(profiler.clone());

    a.before_query("SELECT a");
    b.query("SELECT b")?;
    a.after_query("SELECT a");

    let recorded: Vec<String> = profiler.profiles().into_iter().map(|p| p.sql).collect();
    assert_eq!(recorded, vec!["SELECT b", "SELECT a"]);
    assert_eq!(profiler.pending_statements(), 0);
    Ok(())
}

#[test]
fn hooks_without_collaborators_are_noops() {
    let (conn, _) = recording_connection(Descriptor::new());
    conn.before_query("SELECT 1");
    conn.after_query("SELECT 1");
    conn.log("nothing attached", LogLevel::Info);
    assert!(conn.logger().is_none());
    assert!(conn.profiler().is_none());
}

#[test]
fn setters_attach_and_detach_collaborators() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Arc::new(RecordingLogger::default());
    let (mut conn, _) = recording_connection(Descriptor::new());

    conn.set_logger(Some(logger.clone()));
    assert!(conn.logger().is_some());
    conn.log("custom line", LogLevel::Warning);
    conn.set_logger(None);
    conn.log("dropped", LogLevel::Warning);
    conn.query("SELECT 1")?;

    let lines = logger.lines.lock().expect("logger lock").clone();
    assert_eq!(lines, vec![("custom line".to_string(), LogLevel::Warning)]);

    let profiler = Arc::new(QueryProfiler::new());
    conn.set_profiler(Some(profiler.clone()));
    conn.query("SELECT 2")?;
    conn.set_profiler(None);
    conn.query("SELECT 3")?;
    assert_eq!(profiler.number_total_statements(), 1);
    assert_eq!(
        profiler.last_profile().map(|p| p.sql).as_deref(),
        Some("SELECT 2")
    );
    Ok(())
}

#[test]
fn escape_string_delegates_to_adapter() {
    let (conn, _) = recording_connection(Descriptor::new());
    assert_eq!(conn.escape_string("it's"), "it\\'s");
    assert_eq!(conn.connection_id(), "mock-1");
}
