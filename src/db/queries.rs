//! Raw, fallible queries on the `birthdays` table.
//!
//! Records are addressed by their (name, birth_date) pair, the way the user
//! identifies them; duplicate pairs are therefore indistinguishable.

use crate::errors::{AppError, AppResult};
use crate::models::birthday::Birthday;
use crate::utils::date::{DB_DATE_FMT, month_day, to_db_str};
use chrono::NaiveDate;
use rusqlite::{Connection, Params, Result, Row, params};

fn parse_db_date(raw: &str, col: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DB_DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Birthday> {
    let birth_raw: String = row.get("birth_date")?;
    let reminder_raw: Option<String> = row.get("last_reminder")?;

    let last_reminder = match reminder_raw.as_deref() {
        Some(s) if !s.is_empty() => Some(parse_db_date(s, 3)?),
        _ => None,
    };

    Ok(Birthday {
        id: row.get("id")?,
        name: row.get("name")?,
        birth_date: parse_db_date(&birth_raw, 2)?,
        last_reminder,
    })
}

fn collect<P: Params>(conn: &Connection, sql: &str, args: P) -> AppResult<Vec<Birthday>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(b) => out.push(b),
            // bad rows are skipped, not fatal
            Err(
                e @ (rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::InvalidColumnType(..)),
            ) => tracing::warn!(error = %e, "skipping unreadable birthday row"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(out)
}

pub fn exists(conn: &Connection, name: &str, date: &NaiveDate) -> AppResult<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM birthdays WHERE name = ?1 AND birth_date = ?2",
        params![name, to_db_str(date)],
        |row| row.get(0),
    )?;
    Ok(n > 0)
}

/// Insert a record unless the same (name, date) pair is already stored.
/// Returns `true` when a row was actually inserted.
pub fn insert_birthday(conn: &Connection, name: &str, date: &NaiveDate) -> AppResult<bool> {
    if exists(conn, name, date)? {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO birthdays (name, birth_date, last_reminder) VALUES (?1, ?2, NULL)",
        params![name, to_db_str(date)],
    )?;
    Ok(true)
}

/// All records ordered by month/day, ties by insertion order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Birthday>> {
    collect(
        conn,
        "SELECT id, name, birth_date, last_reminder
         FROM birthdays
         ORDER BY strftime('%m-%d', birth_date) ASC, id ASC",
        [],
    )
}

/// Records whose month/day equals `day`'s and whose reminder stamp is not `day`.
pub fn load_due_on(conn: &Connection, day: &NaiveDate) -> AppResult<Vec<Birthday>> {
    let md = month_day(day);
    let day_str = to_db_str(day);
    collect(
        conn,
        "SELECT id, name, birth_date, last_reminder
         FROM birthdays
         WHERE strftime('%m-%d', birth_date) = ?1
           AND (last_reminder IS NULL OR last_reminder != ?2)
         ORDER BY id ASC",
        params![md, day_str],
    )
}

pub fn set_last_reminder(
    conn: &Connection,
    name: &str,
    date: &NaiveDate,
    day: &NaiveDate,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE birthdays SET last_reminder = ?1 WHERE name = ?2 AND birth_date = ?3",
        params![to_db_str(day), name, to_db_str(date)],
    )?;
    Ok(n)
}

pub fn update_birth_date(
    conn: &Connection,
    name: &str,
    old_date: &NaiveDate,
    new_date: &NaiveDate,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE birthdays SET birth_date = ?1 WHERE name = ?2 AND birth_date = ?3",
        params![to_db_str(new_date), name, to_db_str(old_date)],
    )?;
    Ok(n)
}

pub fn delete_birthday(conn: &Connection, name: &str, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM birthdays WHERE name = ?1 AND birth_date = ?2",
        params![name, to_db_str(date)],
    )?;
    Ok(n)
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM birthdays", [], |row| row.get(0))?;
    Ok(n)
}
