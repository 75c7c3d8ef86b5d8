//! Page bookkeeping for the list endpoints, which all report
//! `startAt`, `maxResults` and `total`.
use serde::{Deserialize, Serialize};

use crate::{JiraError, Result};

/// The pages of a result set, derived from one response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u32,
    pub start_at: u32,
    pub max_results: u32,
    /// Zero based index of the page starting at `start_at`
    pub page: u32,
    pub page_count: u32,
    /// `0..page_count`
    pub pages: Vec<u32>,
}

impl Pagination {
    /// Computes the page window for `total` items served `max_results` at a time.
    ///
    /// # Errors
    /// [`JiraError::InvalidArgument`] if `max_results` is zero.
    pub fn compute(total: u32, start_at: u32, max_results: u32) -> Result<Pagination> {
        if max_results == 0 {
            return Err(JiraError::InvalidArgument(format!(
                "maxResults must be positive to paginate {total} items"
            )));
        }
        let page_count = total.div_ceil(max_results);

        Ok(Pagination {
            total,
            start_at,
            max_results,
            page: start_at.div_ceil(max_results),
            page_count,
            pages: (0..page_count).collect(),
        })
    }

    /// Offset of the page following this one, if any
    #[must_use]
    pub fn next_start_at(&self) -> Option<u32> {
        let next = self.start_at.checked_add(self.max_results)?;
        (next < self.total).then_some(next)
    }
}
