use bdreminder::core::reminder::{
    Notifier, ReminderLoop, Shutdown, dispatch_reminders, poll_once,
};
use bdreminder::db::store::BirthdayStore;
use bdreminder::models::reminder::Reminder;
use std::time::{Duration, Instant};

mod common;
use common::{memory_store, setup_test_db, today, ymd};

#[derive(Default)]
struct Collecting(Vec<Reminder>);

impl Notifier for Collecting {
    fn notify(&mut self, reminder: &Reminder) {
        self.0.push(reminder.clone());
    }
}

#[test]
fn test_poll_sends_and_stamps_once_per_day() {
    let store = memory_store();
    let day = ymd(2026, 5, 17);
    store.add("Alice", &ymd(1990, 5, 17));
    store.add("Bob", &ymd(1990, 6, 1));

    let (tx, rx) = crossbeam_channel::unbounded();

    assert_eq!(poll_once(&store, &tx, &day).unwrap(), 1);
    let r = rx.try_recv().unwrap();
    assert_eq!(r.birthday.name, "Alice");
    assert_eq!(r.age, 36);
    assert_eq!(r.day, day);

    // second poll on the same day is silent
    assert_eq!(poll_once(&store, &tx, &day).unwrap(), 0);
    assert!(rx.try_recv().is_err());

    // the next year it fires again
    assert_eq!(poll_once(&store, &tx, &ymd(2027, 5, 17)).unwrap(), 1);
}

#[test]
fn test_poll_fails_when_receiver_is_gone() {
    let store = memory_store();
    let day = ymd(2026, 5, 17);
    store.add("Alice", &ymd(1990, 5, 17));

    let (tx, rx) = crossbeam_channel::unbounded::<Reminder>();
    drop(rx);

    assert!(poll_once(&store, &tx, &day).is_err());
    // not stamped: it will be announced once someone listens
    assert_eq!(store.due_on(&day).len(), 1);
}

#[test]
fn test_reminder_message_mentions_name_and_age() {
    let store = memory_store();
    store.add("Alice", &ymd(2000, 5, 17));
    let b = store.list_all().remove(0);

    let r = Reminder::new(b, ymd(2026, 5, 17));
    assert_eq!(r.age, 26);
    assert!(r.message().contains("Alice"));
    assert!(r.message().contains("26"));
}

#[test]
fn test_shutdown_sleep_wakes_early() {
    let shutdown = Shutdown::new();
    let s2 = shutdown.clone();

    let waker = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        s2.signal();
    });

    let start = Instant::now();
    assert!(shutdown.sleep(Duration::from_secs(30)));
    assert!(start.elapsed() < Duration::from_secs(5));
    waker.join().unwrap();
}

#[test]
fn test_shutdown_sleep_runs_full_interval_when_not_signaled() {
    let shutdown = Shutdown::new();
    assert!(!shutdown.sleep(Duration::from_millis(50)));
}

#[test]
fn test_loop_thread_notifies_main_thread_and_stops() {
    let db_path = setup_test_db("reminder_loop_thread");
    let store = BirthdayStore::open(&db_path).unwrap();
    let today = today();
    store.add("Today", &today);
    store.add("Tomorrow", &today.succ_opt().unwrap());

    let shutdown = Shutdown::new();
    let (handle, rx) = ReminderLoop::new(&db_path, Duration::from_secs(60), shutdown.clone())
        .spawn()
        .unwrap();

    let first = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(first.birthday.name, "Today");

    shutdown.signal();
    let mut notifier = Collecting::default();
    dispatch_reminders(&rx, &mut notifier, &shutdown);
    handle.join().unwrap();

    assert!(notifier.0.is_empty());
    // stamped by the loop thread through its own connection
    assert!(store.due_today().is_empty());
}

#[test]
fn test_dispatch_stops_when_sender_hangs_up() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    poll_once(&store, &tx, &ymd(2026, 5, 17)).unwrap();
    drop(tx);

    let mut notifier = Collecting::default();
    dispatch_reminders(&rx, &mut notifier, &Shutdown::new());

    assert_eq!(notifier.0.len(), 1);
    assert_eq!(notifier.0[0].birthday.name, "Alice");
}

#[test]
fn test_poll_writes_remind_entry_to_internal_log() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    let (tx, _rx) = crossbeam_channel::unbounded();

    poll_once(&store, &tx, &ymd(2026, 5, 17)).unwrap();
    poll_once(&store, &tx, &ymd(2026, 5, 17)).unwrap();

    let entries = bdreminder::db::log::load_log(store.conn()).unwrap();
    let reminds: Vec<_> = entries.iter().filter(|e| e.operation == "remind").collect();
    assert_eq!(reminds.len(), 1);
    assert_eq!(reminds[0].target, "Alice");
}

#[test]
fn test_dispatch_drains_pending_reminders_after_shutdown() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    store.add("Bob", &ymd(1985, 5, 17));

    // sender stays alive: only the shutdown flag can end the dispatch
    let (tx, rx) = crossbeam_channel::unbounded();
    poll_once(&store, &tx, &ymd(2026, 5, 17)).unwrap();

    let shutdown = Shutdown::new();
    shutdown.signal();

    let mut notifier = Collecting::default();
    dispatch_reminders(&rx, &mut notifier, &shutdown);

    let names: Vec<_> = notifier.0.iter().map(|r| r.birthday.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    drop(tx);
}

#[test]
fn test_ctrlc_handler_installs_once_per_process() {
    let shutdown = Shutdown::new();

    assert!(shutdown.install_ctrlc_handler().is_ok());
    assert!(!shutdown.is_signaled());
    assert!(shutdown.install_ctrlc_handler().is_err());
}
