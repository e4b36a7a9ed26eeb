use crate::error::SqlConduitError;
use crate::types::SqlValue;

use super::Quoting;

/// Build `INSERT INTO <table> [(<fields>)] VALUES (<values>)`.
///
/// # Errors
/// Returns `SqlConduitError::EmptyValues` if `values` is empty.
pub fn build_insert(
    table: &str,
    values: &[SqlValue],
    fields: Option<&[&str]>,
    quoting: &Quoting<'_>,
) -> Result<String, SqlConduitError> {
    if values.is_empty() {
        return Err(SqlConduitError::EmptyValues {
            table: table.to_owned(),
        });
    }

    let joined_values = values
        .iter()
        .map(|v| quoting.format_value(v))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(match fields {
        Some(fields) => format!(
            "INSERT INTO {table} ({}) VALUES ({joined_values})",
            fields.join(", ")
        ),
        None => format!("INSERT INTO {table} VALUES ({joined_values})"),
    })
}

/// Build `UPDATE <table> SET f1 = v1, ... [WHERE <condition>]`.
///
/// Fields and values are paired by position.
///
/// # Errors
/// Returns `SqlConduitError::FieldValueCountMismatch` if the two slices differ
/// in length.
pub fn build_update(
    table: &str,
    fields: &[&str],
    values: &[SqlValue],
    where_condition: Option<&str>,
    quoting: &Quoting<'_>,
) -> Result<String, SqlConduitError> {
    if fields.len() != values.len() {
        return Err(SqlConduitError::FieldValueCountMismatch {
            fields: fields.len(),
            values: values.len(),
        });
    }

    let assignments = fields
        .iter()
        .zip(values)
        .map(|(field, value)| format!("{field} = {}", quoting.format_value(value)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("UPDATE {table} SET {assignments}");
    if let Some(condition) = where_condition {
        sql.push_str(" WHERE ");
        sql.push_str(condition);
    }
    Ok(sql)
}

/// Build `DELETE FROM <table> [WHERE <condition>]`.
///
/// An empty condition deletes every row of the table.
#[must_use]
pub fn build_delete(table: &str, where_condition: &str) -> String {
    if where_condition.is_empty() {
        format!("DELETE FROM {table}")
    } else {
        format!("DELETE FROM {table} WHERE {where_condition}")
    }
}
