use bdreminder::models::birthday::SearchFilter;

mod common;
use common::{memory_store, ymd};

fn names(list: &[bdreminder::models::birthday::Birthday]) -> Vec<String> {
    list.iter().map(|b| b.name.clone()).collect()
}

#[test]
fn test_add_same_pair_twice_keeps_one_record() {
    let store = memory_store();

    assert!(store.add("Alice", &ymd(1990, 5, 17)));
    assert!(store.add("Alice", &ymd(1990, 5, 17)));

    assert_eq!(store.count(), 1);
    assert_eq!(store.list_all().len(), 1);
}

#[test]
fn test_add_same_name_other_date_is_a_new_record() {
    let store = memory_store();

    assert!(store.add("Alice", &ymd(1990, 5, 17)));
    assert!(store.add("Alice", &ymd(1991, 5, 17)));

    assert_eq!(store.count(), 2);
}

#[test]
fn test_add_rejects_empty_name() {
    let store = memory_store();

    assert!(!store.add("   ", &ymd(1990, 5, 17)));
    assert_eq!(store.count(), 0);
}

#[test]
fn test_add_trims_name() {
    let store = memory_store();

    assert!(store.add("  Bob  ", &ymd(1985, 1, 2)));
    assert!(store.contains("Bob", &ymd(1985, 1, 2)));
}

#[test]
fn test_due_matches_month_day_ignoring_year() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    store.add("Bob", &ymd(2001, 5, 17));
    store.add("Carol", &ymd(1990, 5, 18));

    let due = store.due_on(&ymd(2026, 5, 17));

    assert_eq!(names(&due), vec!["Alice", "Bob"]);
    assert!(due.iter().all(|b| b.last_reminder.is_none()));
}

#[test]
fn test_mark_reminded_suppresses_same_day() {
    let store = memory_store();
    let day = ymd(2026, 5, 17);
    store.add("Alice", &ymd(1990, 5, 17));

    assert!(store.mark_reminded_on("Alice", &ymd(1990, 5, 17), &day));

    assert!(store.due_on(&day).is_empty());
    let all = store.list_all();
    assert_eq!(all[0].last_reminder, Some(day));
}

#[test]
fn test_reminded_yesterday_is_due_again_today() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));

    // stamped on the same calendar day one year earlier
    store.mark_reminded_on("Alice", &ymd(1990, 5, 17), &ymd(2025, 5, 17));
    assert_eq!(names(&store.due_on(&ymd(2026, 5, 17))), vec!["Alice"]);

    // stamped the day before
    store.mark_reminded_on("Alice", &ymd(1990, 5, 17), &ymd(2026, 5, 16));
    assert_eq!(names(&store.due_on(&ymd(2026, 5, 17))), vec!["Alice"]);
}

#[test]
fn test_mark_reminded_today_uses_local_date() {
    let store = memory_store();
    let today = common::today();
    store.add("Today", &today);

    assert_eq!(store.due_today().len(), 1);
    assert!(store.mark_reminded("Today", &today));
    assert!(store.due_today().is_empty());
}

#[test]
fn test_mark_reminded_unknown_pair_fails() {
    let store = memory_store();
    assert!(!store.mark_reminded_on("Nobody", &ymd(1990, 1, 1), &ymd(2026, 1, 1)));
}

#[test]
fn test_delete_removes_from_list() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    store.add("Bob", &ymd(1985, 2, 1));

    assert!(store.delete("Alice", &ymd(1990, 5, 17)));

    assert_eq!(names(&store.list_all()), vec!["Bob"]);
    assert!(!store.delete("Alice", &ymd(1990, 5, 17)));
}

#[test]
fn test_list_all_is_ordered_by_month_day() {
    let store = memory_store();
    store.add("December", &ymd(1970, 12, 1));
    store.add("March", &ymd(2010, 3, 9));
    store.add("January", &ymd(1999, 1, 30));

    assert_eq!(
        names(&store.list_all()),
        vec!["January", "March", "December"]
    );
}

#[test]
fn test_update_moves_record_in_listing() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 1, 10));
    store.add("Bob", &ymd(1990, 6, 1));

    assert_eq!(names(&store.list_all()), vec!["Alice", "Bob"]);

    assert!(store.update("Alice", &ymd(1990, 1, 10), &ymd(1990, 9, 10)));

    assert_eq!(names(&store.list_all()), vec!["Bob", "Alice"]);
    assert!(store.contains("Alice", &ymd(1990, 9, 10)));
    assert!(!store.contains("Alice", &ymd(1990, 1, 10)));
}

#[test]
fn test_update_unknown_pair_fails() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 1, 10));

    assert!(!store.update("Alice", &ymd(1990, 1, 11), &ymd(1990, 2, 2)));
    assert!(store.contains("Alice", &ymd(1990, 1, 10)));
}

#[test]
fn test_leap_day_only_due_on_feb_29() {
    let store = memory_store();
    store.add("Leap", &ymd(2000, 2, 29));

    assert!(store.due_on(&ymd(2027, 2, 28)).is_empty());
    assert!(store.due_on(&ymd(2027, 3, 1)).is_empty());
    assert_eq!(store.due_on(&ymd(2028, 2, 29)).len(), 1);
}

#[test]
fn test_search_by_name_and_range() {
    let store = memory_store();
    store.add("Alice Smith", &ymd(1990, 5, 17));
    store.add("Bob Smith", &ymd(1980, 3, 2));
    store.add("Carol Jones", &ymd(2000, 7, 7));

    let by_name = store.search(&SearchFilter {
        name: Some("smith".into()),
        ..Default::default()
    });
    assert_eq!(names(&by_name), vec!["Bob Smith", "Alice Smith"]);

    let by_range = store.search(&SearchFilter {
        from: Some(ymd(1985, 1, 1)),
        to: Some(ymd(2000, 7, 7)),
        ..Default::default()
    });
    assert_eq!(names(&by_range), vec!["Alice Smith", "Carol Jones"]);

    assert_eq!(store.search(&SearchFilter::default()).len(), 3);
}

#[test]
fn test_changes_are_written_to_internal_log() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    store.update("Alice", &ymd(1990, 5, 17), &ymd(1990, 5, 18));
    store.delete("Alice", &ymd(1990, 5, 18));

    let entries = bdreminder::db::log::load_log(store.conn()).expect("log");
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, vec!["add", "edit", "del"]);
}

#[test]
fn test_open_invalid_path_is_an_error() {
    let res = bdreminder::db::store::BirthdayStore::open("/nonexistent-dir/deeper/db.sqlite");
    assert!(res.is_err());
}

#[test]
fn test_is_due_on_agrees_with_store_query() {
    let store = memory_store();
    let day = ymd(2026, 5, 17);
    store.add("Fresh", &ymd(1990, 5, 17));
    store.add("Stamped", &ymd(1991, 5, 17));
    store.add("Yesterday", &ymd(1992, 5, 17));
    store.add("Other", &ymd(1990, 5, 18));
    store.add("Leap", &ymd(2000, 2, 29));
    store.mark_reminded_on("Stamped", &ymd(1991, 5, 17), &day);
    store.mark_reminded_on("Yesterday", &ymd(1992, 5, 17), &ymd(2026, 5, 16));

    for check_day in [day, ymd(2027, 2, 28), ymd(2028, 2, 29)] {
        let from_query = names(&store.due_on(&check_day));
        let from_model: Vec<String> = store
            .list_all()
            .into_iter()
            .filter(|b| b.is_due_on(&check_day))
            .map(|b| b.name)
            .collect();
        assert_eq!(from_query, from_model, "disagreement on {check_day}");
    }

    assert_eq!(names(&store.due_on(&day)), vec!["Fresh", "Yesterday"]);
    assert_eq!(names(&store.due_on(&ymd(2028, 2, 29))), vec!["Leap"]);
}

#[test]
fn test_unreadable_row_is_skipped() {
    let store = memory_store();
    store.add("Alice", &ymd(1990, 5, 17));
    store.add("Bob", &ymd(1985, 1, 2));
    store
        .conn()
        .execute(
            "INSERT INTO birthdays (name, birth_date) VALUES ('Broken', '1990-05-17 10:00:00')",
            [],
        )
        .expect("raw insert");

    assert_eq!(names(&store.list_all()), vec!["Bob", "Alice"]);
    assert_eq!(names(&store.due_on(&ymd(2026, 5, 17))), vec!["Alice"]);
}
