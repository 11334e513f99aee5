use crate::models::birthday::Birthday;
use crate::utils::colors::{RESET, color_for_days_until};
use crate::utils::formatting::{describe_days_until, describe_reminder};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Build the month/day ordered table shown by `list` and `due`.
    pub fn table(birthdays: &[Birthday], today: &NaiveDate) -> Table {
        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Name"),
            Column::new("Birth date"),
            Column::new("Age"),
            Column::new("Next"),
            Column::new("Reminded"),
        ]);

        for b in birthdays {
            let days = b.days_until_next(today);
            let row = vec![
                b.id.to_string(),
                b.name.clone(),
                b.birth_date.format("%Y-%m-%d").to_string(),
                b.next_age(today).to_string(),
                describe_days_until(days),
                describe_reminder(b.last_reminder.as_ref()),
            ];

            let color = color_for_days_until(days);
            if color == RESET {
                table.add_row(row);
            } else {
                table.add_row_colored(row, color);
            }
        }

        table
    }
}
