use crate::cli::commands::{open_store, parse_date_arg, parse_name_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Add a birthday; an identical (name, date) pair is reported, not duplicated.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, date } = cmd {
        let name = parse_name_arg(name)?;
        let d = parse_date_arg(date)?;

        let store = open_store(cfg)?;

        if store.contains(&name, &d) {
            info(format!("{} ({}) is already stored.", name, d));
            return Ok(());
        }

        if !store.add(&name, &d) {
            return Err(AppError::OperationFailed(format!(
                "could not save {} ({}), see the log file",
                name, d
            )));
        }

        success(format!("Added {} ({}).", name, d));
    }

    Ok(())
}
