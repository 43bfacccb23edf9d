//! List/query contract for the genre collection
//!
//! Sorting, ordering, and pagination compose in a fixed sequence: the full
//! result set is sorted first, then `offset` rows are skipped, then `max`
//! caps what remains. All parameters are validated here, before any
//! repository access.

use genre_common::{Error, Result};
use serde::Deserialize;

/// Raw query parameters for the list operation, as received on the wire
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Field to sort by: "id" or "name" (default: id, i.e. insertion order)
    pub sort: Option<String>,

    /// Sort direction: "asc" or "desc" (default: asc)
    pub order: Option<String>,

    /// Maximum number of results; 0 or unspecified means no cap
    pub max: Option<i64>,

    /// Leading results to skip after sorting (default: 0)
    pub offset: Option<i64>,
}

/// Sortable fields of the genre collection
///
/// Doubles as a SQL column allow-list: ORDER BY clauses are built from this
/// enum only, never from raw request strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Insertion order (ids are assigned monotonically)
    #[default]
    Id,
    Name,
}

impl SortField {
    fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            other => Err(Error::InvalidInput(format!("Invalid sort field: {}", other))),
        }
    }

    /// Column name for the ORDER BY clause
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::InvalidInput(format!("Invalid order: {}", other))),
        }
    }

    /// Direction keyword for the ORDER BY clause
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated list parameters, ready for the repository
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParams {
    pub sort: SortField,
    pub order: SortOrder,
    /// Result cap; None means unbounded
    pub max: Option<i64>,
    pub offset: i64,
}

impl ListParams {
    /// Effective LIMIT value (SQLite treats -1 as "no limit")
    pub fn limit(&self) -> i64 {
        self.max.unwrap_or(-1)
    }
}

impl ListQuery {
    /// Validate raw parameters into [`ListParams`]
    ///
    /// Fails closed: any unrecognized sort field or order, or a negative
    /// max/offset, is an InvalidInput error and no query is issued.
    pub fn validate(&self) -> Result<ListParams> {
        let sort = match self.sort.as_deref() {
            Some(value) => SortField::parse(value)?,
            None => SortField::default(),
        };

        let order = match self.order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::default(),
        };

        let max = match self.max {
            Some(n) if n < 0 => {
                return Err(Error::InvalidInput(format!("Invalid max: {}", n)));
            }
            // 0 means "no explicit cap"
            Some(0) | None => None,
            Some(n) => Some(n),
        };

        let offset = match self.offset {
            Some(n) if n < 0 => {
                return Err(Error::InvalidInput(format!("Invalid offset: {}", n)));
            }
            Some(n) => n,
            None => 0,
        };

        Ok(ListParams {
            sort,
            order,
            max,
            offset,
        })
    }
}
