use crate::cli::commands::{open_store, parse_date_arg, parse_name_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        name,
        old_date,
        new_date,
    } = cmd
    {
        let name = parse_name_arg(name)?;
        let old = parse_date_arg(old_date)?;
        let new = parse_date_arg(new_date)?;

        let store = open_store(cfg)?;

        if !store.update(&name, &old, &new) {
            return Err(AppError::NotFound(name, old.to_string()));
        }

        success(format!("{}: birth date changed from {} to {}.", name, old, new));
    }

    Ok(())
}
