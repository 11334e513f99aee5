//! Background reminder loop.
//!
//! The loop thread owns its own [`BirthdayStore`]; due records are sent to
//! the main thread over a channel and stamped right after, so a record is
//! announced at most once per calendar day.

use crate::db::log::ttlog_quiet;
use crate::db::store::BirthdayStore;
use crate::errors::{AppError, AppResult};
use crate::models::reminder::Reminder;
use crate::ui::messages;
use crate::utils::date;
use chrono::NaiveDate;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Granularity used while sleeping between polls.
const SLEEP_SLICE: Duration = Duration::from_millis(200);

/// Shared shutdown flag.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_signaled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag on Ctrl+C. Only one handler can be installed per process.
    pub fn install_ctrlc_handler(&self) -> AppResult<()> {
        let flag = self.clone();
        ctrlc::set_handler(move || {
            tracing::info!("received Ctrl+C, shutting down...");
            flag.signal();
        })
        .map_err(|e| AppError::Other(format!("cannot install Ctrl+C handler: {e}")))
    }

    /// Sleep for `total`, waking early when the flag is raised.
    /// Returns `true` if shutdown was requested.
    pub fn sleep(&self, total: Duration) -> bool {
        let deadline = Instant::now() + total;
        loop {
            if self.is_signaled() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep(SLEEP_SLICE.min(deadline - now));
        }
    }
}

/// Something able to present a reminder to the user.
pub trait Notifier {
    fn notify(&mut self, reminder: &Reminder);
}

/// Prints the reminder to the terminal and rings the bell.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, reminder: &Reminder) {
        print!("\x07");
        let _ = std::io::stdout().flush();
        messages::celebrate(reminder.message());
        tracing::info!(
            name = %reminder.birthday.name,
            age = reminder.age,
            "birthday notification shown"
        );
    }
}

/// One poll: send every record due on `day`, then stamp it.
/// Returns the number of reminders sent.
pub fn poll_once(store: &BirthdayStore, tx: &Sender<Reminder>, day: &NaiveDate) -> AppResult<usize> {
    let due: Vec<_> = store
        .due_on(day)
        .into_iter()
        .filter(|b| b.is_due_on(day))
        .collect();
    tracing::debug!(day = %day, count = due.len(), "reminder poll");

    let mut sent = 0;
    for b in due {
        let name = b.name.clone();
        let birth_date = b.birth_date;

        tx.send(Reminder::new(b, *day))
            .map_err(|_| AppError::OperationFailed("reminder receiver closed".into()))?;
        sent += 1;

        if store.mark_reminded_on(&name, &birth_date, day) {
            ttlog_quiet(
                store.conn(),
                "remind",
                &name,
                &format!("Reminder sent for {}", date::to_db_str(&birth_date)),
            );
        } else {
            tracing::warn!(name = %name, "reminder sent but stamp not stored");
        }
    }
    Ok(sent)
}

pub struct ReminderLoop {
    db_path: String,
    interval: Duration,
    shutdown: Shutdown,
}

impl ReminderLoop {
    pub fn new(db_path: impl Into<String>, interval: Duration, shutdown: Shutdown) -> Self {
        Self {
            db_path: db_path.into(),
            interval,
            shutdown,
        }
    }

    /// Start the background thread. It polls immediately, then once per
    /// interval, until shutdown is signaled or the receiver is dropped.
    pub fn spawn(self) -> AppResult<(JoinHandle<()>, Receiver<Reminder>)> {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("reminder-loop".into())
            .spawn(move || self.run(tx))?;

        Ok((handle, rx))
    }

    fn run(self, tx: Sender<Reminder>) {
        let store = match BirthdayStore::open(&self.db_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "reminder loop cannot open database");
                return;
            }
        };

        tracing::info!(interval_secs = self.interval.as_secs(), "reminder loop started");

        while !self.shutdown.is_signaled() {
            if let Err(e) = poll_once(&store, &tx, &date::today()) {
                tracing::warn!(error = %e, "reminder loop stopping");
                break;
            }
            if self.shutdown.sleep(self.interval) {
                break;
            }
        }

        tracing::info!("reminder loop stopped");
    }
}

/// Main-thread side: hand every incoming reminder to `notifier` until the
/// loop thread hangs up or shutdown is signaled.
pub fn dispatch_reminders<N: Notifier>(rx: &Receiver<Reminder>, notifier: &mut N, shutdown: &Shutdown) {
    loop {
        match rx.recv_timeout(SLEEP_SLICE) {
            Ok(reminder) => notifier.notify(&reminder),
            Err(RecvTimeoutError::Timeout) => {
                if shutdown.is_signaled() {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Drain anything sent just before shutdown.
    while let Ok(reminder) = rx.try_recv() {
        notifier.notify(&reminder);
    }
}
