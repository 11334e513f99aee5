use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet.
///
/// `birthdays` holds the records; `log` is the internal audit trail written
/// by [`crate::db::log::ttlog`].
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS birthdays (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            birth_date    TEXT NOT NULL,
            last_reminder TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_birthdays_name_date ON birthdays(name, birth_date);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
