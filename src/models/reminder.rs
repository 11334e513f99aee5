use crate::models::birthday::Birthday;
use chrono::NaiveDate;

/// A due birthday handed from the reminder thread to the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub birthday: Birthday,
    pub day: NaiveDate,
    pub age: i32,
}

impl Reminder {
    pub fn new(birthday: Birthday, day: NaiveDate) -> Self {
        let age = birthday.age_on(&day);
        Self { birthday, day, age }
    }

    pub fn message(&self) -> String {
        format!(
            "Today is {}'s birthday! Turning {} today.",
            self.birthday.name, self.age
        )
    }
}
