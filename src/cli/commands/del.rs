use crate::cli::commands::{open_store, parse_date_arg, parse_name_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { name, date, yes } = cmd {
        let name = parse_name_arg(name)?;
        let d = parse_date_arg(date)?;

        let store = open_store(cfg)?;

        if !store.contains(&name, &d) {
            return Err(AppError::NotFound(name, d.to_string()));
        }

        let prompt = format!("Delete the birthday of {} ({})? This action is irreversible.", name, d);
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if !store.delete(&name, &d) {
            return Err(AppError::OperationFailed(format!(
                "could not delete {} ({})",
                name, d
            )));
        }

        success(format!("Deleted {} ({}).", name, d));
    }

    Ok(())
}
