use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::birthday::SearchFilter;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { name, from, to } = cmd {
        let filter = SearchFilter {
            name: name.clone(),
            from: from.as_deref().map(parse_date_arg).transpose()?,
            to: to.as_deref().map(parse_date_arg).transpose()?,
        };

        let store = open_store(cfg)?;
        let birthdays = store.search(&filter);

        if birthdays.is_empty() {
            info("No birthdays stored.");
            return Ok(());
        }

        println!("{}\n", bold(&format!("🎂 Birthdays ({})", birthdays.len())));
        print!("{}", ListLogic::table(&birthdays, &date::today()).render());
    }

    Ok(())
}
