pub mod api;
pub mod columns;
pub mod ui;
pub mod view_policy;
