use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

/// Read-only view of the reminders still pending for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Due { date: day } = cmd {
        let day = match day {
            Some(raw) => parse_date_arg(raw)?,
            None => date::today(),
        };

        let store = open_store(cfg)?;
        let due = store.due_on(&day);

        if due.is_empty() {
            info(format!("No pending birthday reminders for {}.", day));
            return Ok(());
        }

        print!("{}", ListLogic::table(&due, &day).render());
    }

    Ok(())
}
