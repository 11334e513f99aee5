use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminder::{
    Notifier, ReminderLoop, Shutdown, TerminalNotifier, dispatch_reminders, poll_once,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use std::time::Duration;

/// Run the reminder loop in the foreground.
///
/// With `--once` a single check runs on the current thread; otherwise the
/// loop thread polls until Ctrl+C, after which pending reminders are still
/// shown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, once } = cmd {
        let mut notifier = TerminalNotifier;

        if *once {
            let store = open_store(cfg)?;
            let (tx, rx) = crossbeam_channel::unbounded();
            let sent = poll_once(&store, &tx, &date::today())?;
            drop(tx);

            for reminder in rx.iter() {
                notifier.notify(&reminder);
            }
            if sent == 0 {
                info("No birthdays to remind today.");
            }
            return Ok(());
        }

        let secs = interval.unwrap_or(cfg.check_interval_secs).max(1);
        info(format!(
            "Watching for birthdays every {}s (Ctrl+C to stop)…",
            secs
        ));

        let shutdown = Shutdown::new();
        shutdown.install_ctrlc_handler()?;

        let (handle, rx) =
            ReminderLoop::new(cfg.database.clone(), Duration::from_secs(secs), shutdown.clone())
                .spawn()?;

        dispatch_reminders(&rx, &mut notifier, &shutdown);

        shutdown.signal();
        handle
            .join()
            .map_err(|_| AppError::Other("reminder thread panicked".into()))?;

        // a poll may have finished between the drain and the join
        for reminder in rx.try_iter() {
            notifier.notify(&reminder);
        }
    }

    Ok(())
}
