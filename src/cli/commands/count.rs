use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    println!("{}", store.count());
    Ok(())
}
