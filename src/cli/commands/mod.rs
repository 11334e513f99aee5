pub mod ack;
pub mod add;
pub mod backup;
pub mod config;
pub mod count;
pub mod del;
pub mod due;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod update;
pub mod watch;

use crate::config::Config;
use crate::db::store::BirthdayStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a date argument or fail with `InvalidDate`.
pub(crate) fn parse_date_arg(raw: &str) -> AppResult<NaiveDate> {
    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

/// Validate and trim a name argument.
pub(crate) fn parse_name_arg(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::InvalidName("name must not be empty".into()));
    }
    Ok(name.to_string())
}

pub(crate) fn open_store(cfg: &Config) -> AppResult<BirthdayStore> {
    BirthdayStore::open(&cfg.database)
}
