pub mod birthday;
pub mod reminder;
