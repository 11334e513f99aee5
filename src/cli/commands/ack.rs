use crate::cli::commands::{open_store, parse_date_arg, parse_name_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ack { name, date } = cmd {
        let name = parse_name_arg(name)?;
        let d = parse_date_arg(date)?;

        let store = open_store(cfg)?;

        if !store.mark_reminded(&name, &d) {
            return Err(AppError::NotFound(name, d.to_string()));
        }

        ttlog_quiet(store.conn(), "ack", &name, "Reminder acknowledged");
        success(format!("{} ({}) marked as reminded for today.", name, d));
    }

    Ok(())
}
