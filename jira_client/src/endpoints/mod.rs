//! Resource calls, one file per area of the REST API. Each one assembles a
//! URL, performs a single request and decodes the answer.
mod activity;
mod issues;
mod sprints;
mod users;
mod worklogs;

pub use issues::SearchParams;
pub use users::UserSearch;
pub use worklogs::AdjustEstimate;
