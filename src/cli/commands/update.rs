use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::{CURRENT_VERSION, check_for_updates, download_update};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        check,
        download,
        source,
        dir,
    } = cmd
    {
        let source = source
            .clone()
            .unwrap_or_else(|| cfg.update_manifest_url.clone());

        info(format!("Current version: {}", CURRENT_VERSION));

        let Some(manifest) = check_for_updates(&source, CURRENT_VERSION) else {
            success("bdreminder is up to date.");
            return Ok(());
        };

        info(format!("New version available: {}", manifest.version));
        if !manifest.description.is_empty() {
            println!("{}", manifest.description);
        }

        if *check || !*download {
            return Ok(());
        }

        let base_dir = match dir {
            Some(d) => PathBuf::from(d),
            None => std::env::current_dir()?,
        };

        if !download_update(&manifest, &base_dir) {
            return Err(AppError::Update(
                "download failed, see the log file for details".into(),
            ));
        }

        success(format!(
            "Downloaded {} file(s) into {}. Restart bdreminder to use version {}.",
            manifest.files.len(),
            base_dir.display(),
            manifest.version
        ));
    }

    Ok(())
}
