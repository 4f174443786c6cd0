//! SQL literal helpers.

/// Makes text safe inside a single-quoted SQL literal by doubling every `'`.
///
/// Nothing else is escaped; the target database treats backslashes literally.
pub fn escape_sql(s: &str) -> String {
    s.replace('\'', "''")
}

/// Quotes `s` as a SQL string literal.
pub fn quote(s: &str) -> String {
    format!("'{}'", escape_sql(s))
}
