pub mod details;
pub mod form;
pub mod history;
pub mod list;
pub mod summary;
