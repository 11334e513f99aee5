pub mod backup;
pub mod list;
pub mod log;
pub mod reminder;
pub mod update;
