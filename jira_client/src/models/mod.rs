pub mod activity;
pub mod core;
pub mod issue;
pub mod project;
pub mod sprint;
pub mod user;
pub mod worklog;
