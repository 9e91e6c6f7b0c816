//! Argument checks shared by the API operations.

use crate::{InvalidArgumentSnafu, RequestError};
use snafu::ensure;

/// Page selection for listing endpoints.
///
/// `limit` must be within `1..=100` and `offset` must not be negative. The
/// values are checked when the listing is requested, before anything is
/// sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of records to return
    pub limit: i64,
    /// Number of records to skip
    pub offset: i64,
}

impl Pagination {
    /// Smallest accepted page size
    pub const MIN_LIMIT: i64 = 1;
    /// Largest accepted page size
    pub const MAX_LIMIT: i64 = 100;

    /// Select `limit` records starting after the first `offset`.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    pub(crate) fn validate(&self) -> Result<(), RequestError> {
        ensure!(
            (Self::MIN_LIMIT..=Self::MAX_LIMIT).contains(&self.limit),
            InvalidArgumentSnafu {
                name: "limit",
                reason: format!(
                    "needs to be between [ {} ... {} ], got {}",
                    Self::MIN_LIMIT,
                    Self::MAX_LIMIT,
                    self.limit
                ),
            }
        );
        ensure!(
            self.offset >= 0,
            InvalidArgumentSnafu {
                name: "offset",
                reason: format!("needs to be greater or equal to 0, got {}", self.offset),
            }
        );
        Ok(())
    }
}

impl Default for Pagination {
    /// The server's own defaults: the first 20 records.
    fn default() -> Self {
        Self::new(20, 0)
    }
}

/// Reject an empty identifier or name.
pub(crate) fn require(name: &'static str, value: &str) -> Result<(), RequestError> {
    ensure!(
        !value.is_empty(),
        InvalidArgumentSnafu {
            name,
            reason: "must not be empty",
        }
    );
    Ok(())
}

/// Reject an empty list that needs at least one element.
pub(crate) fn require_items<T>(name: &'static str, items: &[T]) -> Result<(), RequestError> {
    ensure!(
        !items.is_empty(),
        InvalidArgumentSnafu {
            name,
            reason: "needs at least one element",
        }
    );
    Ok(())
}
