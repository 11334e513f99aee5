//! Never-failing storage facade.
//!
//! Every operation logs its failure and degrades to `false`, an empty list
//! or zero so that neither the CLI nor the reminder thread can be brought
//! down by a storage error. Each thread opens its own `BirthdayStore`.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::birthday::{Birthday, SearchFilter};
use crate::utils::date::{self, to_db_str};
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct BirthdayStore {
    pool: DbPool,
}

impl BirthdayStore {
    /// Open (and create if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)
            .map_err(|e| AppError::DbUnavailable(format!("{}: {}", path, e)))?;
        init_db(&pool.conn)?;
        tracing::debug!(path, "database opened");
        Ok(Self { pool })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Add a birthday. An identical (name, date) pair already present counts
    /// as success and is not inserted twice.
    pub fn add(&self, name: &str, birth_date: &NaiveDate) -> bool {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("refusing to add a birthday with an empty name");
            return false;
        }

        match queries::insert_birthday(self.conn(), name, birth_date) {
            Ok(true) => {
                tracing::info!(name, date = %birth_date, "birthday added");
                ttlog_quiet(self.conn(), "add", name, &format!("Added {} ({})", name, birth_date));
                true
            }
            Ok(false) => {
                tracing::info!(name, date = %birth_date, "birthday already stored");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name, "failed to add birthday");
                false
            }
        }
    }

    pub fn contains(&self, name: &str, birth_date: &NaiveDate) -> bool {
        queries::exists(self.conn(), name.trim(), birth_date).unwrap_or_else(|e| {
            tracing::error!(error = %e, name, "failed to look up birthday");
            false
        })
    }

    /// Records due today: matching month/day and not yet reminded today.
    pub fn due_today(&self) -> Vec<Birthday> {
        self.due_on(&date::today())
    }

    pub fn due_on(&self, day: &NaiveDate) -> Vec<Birthday> {
        match queries::load_due_on(self.conn(), day) {
            Ok(list) => {
                tracing::debug!(day = %day, count = list.len(), "due birthdays loaded");
                list
            }
            Err(e) => {
                tracing::error!(error = %e, day = %day, "failed to load due birthdays");
                Vec::new()
            }
        }
    }

    /// Stamp the (name, date) record as reminded today.
    pub fn mark_reminded(&self, name: &str, birth_date: &NaiveDate) -> bool {
        self.mark_reminded_on(name, birth_date, &date::today())
    }

    pub fn mark_reminded_on(&self, name: &str, birth_date: &NaiveDate, day: &NaiveDate) -> bool {
        match queries::set_last_reminder(self.conn(), name, birth_date, day) {
            Ok(0) => {
                tracing::warn!(name, date = %birth_date, "no birthday to mark as reminded");
                false
            }
            Ok(_) => {
                tracing::info!(name, date = %birth_date, day = %day, "reminder stamped");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name, "failed to stamp reminder");
                false
            }
        }
    }

    /// Change the birth date of every record matching (name, old_date).
    pub fn update(&self, name: &str, old_date: &NaiveDate, new_date: &NaiveDate) -> bool {
        match queries::update_birth_date(self.conn(), name, old_date, new_date) {
            Ok(0) => {
                tracing::warn!(name, date = %old_date, "no birthday to update");
                false
            }
            Ok(n) => {
                tracing::info!(name, from = %old_date, to = %new_date, rows = n, "birthday updated");
                ttlog_quiet(
                    self.conn(),
                    "edit",
                    name,
                    &format!("{} -> {}", to_db_str(old_date), to_db_str(new_date)),
                );
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name, "failed to update birthday");
                false
            }
        }
    }

    /// Remove every record matching (name, date).
    pub fn delete(&self, name: &str, birth_date: &NaiveDate) -> bool {
        match queries::delete_birthday(self.conn(), name, birth_date) {
            Ok(0) => {
                tracing::warn!(name, date = %birth_date, "no birthday to delete");
                false
            }
            Ok(n) => {
                tracing::info!(name, date = %birth_date, rows = n, "birthday deleted");
                ttlog_quiet(self.conn(), "del", name, &format!("Deleted {} ({})", name, birth_date));
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name, "failed to delete birthday");
                false
            }
        }
    }

    /// All records ordered by month/day.
    pub fn list_all(&self) -> Vec<Birthday> {
        queries::load_all(self.conn()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to list birthdays");
            Vec::new()
        })
    }

    pub fn search(&self, filter: &SearchFilter) -> Vec<Birthday> {
        let all = self.list_all();
        if filter.is_empty() {
            return all;
        }
        all.into_iter().filter(|b| filter.matches(b)).collect()
    }

    pub fn count(&self) -> i64 {
        queries::count(self.conn()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to count birthdays");
            0
        })
    }
}
