//! To-do list: a single free-form text buffer

pub mod list;

pub use list::{NotifyMode, TaskList, TaskNotice};
