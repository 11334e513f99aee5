use crate::utils::date;
use chrono::NaiveDate;

/// One row of the `birthdays` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub last_reminder: Option<NaiveDate>,
}

impl Birthday {
    /// A record is due on `day` when its month/day matches and it has not
    /// already been stamped for that exact day.
    pub fn is_due_on(&self, day: &NaiveDate) -> bool {
        date::same_month_day(&self.birth_date, day) && self.last_reminder.as_ref() != Some(day)
    }

    pub fn age_on(&self, day: &NaiveDate) -> i32 {
        date::age_on(&self.birth_date, day)
    }

    pub fn days_until_next(&self, day: &NaiveDate) -> i64 {
        date::days_until_next(&self.birth_date, day)
    }

    /// Age reached at the next occurrence (today included).
    pub fn next_age(&self, day: &NaiveDate) -> i32 {
        let next = *day + chrono::Duration::days(self.days_until_next(day));
        date::age_on(&self.birth_date, &next)
    }
}

/// Optional criteria for `BirthdayStore::search`.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Inclusive lower bound on the full birth date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the full birth date
    pub to: Option<NaiveDate>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, b: &Birthday) -> bool {
        if let Some(needle) = &self.name
            && !b.name.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }
        if let Some(from) = &self.from
            && b.birth_date < *from
        {
            return false;
        }
        if let Some(to) = &self.to
            && b.birth_date > *to
        {
            return false;
        }
        true
    }
}
