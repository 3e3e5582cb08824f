use std::collections::HashMap;

use sea_orm::Order;

use crate::{model::api::MetaDto, server::error::query::QueryError};

pub const PAGE: &str = "page";
pub const LIMIT: &str = "limit";
pub const SORT_BY: &str = "sortBy";
pub const SORT_ORDER: &str = "sortOrder";
pub const PAGINATION_KEYS: [&str; 4] = [PAGE, LIMIT, SORT_BY, SORT_ORDER];

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// One-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    /// Rows to skip before the page starts: `(page - 1) * limit`
    pub skip: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            skip: page.saturating_sub(1).saturating_mul(limit),
        }
    }

    pub fn parse(params: &HashMap<String, String>) -> Result<Self, QueryError> {
        let page = positive(params, PAGE)?.unwrap_or(DEFAULT_PAGE);
        let limit = positive(params, LIMIT)?.unwrap_or(DEFAULT_LIMIT);

        Ok(Self::new(page, limit))
    }

    /// Metadata for a list response whose filtered result set holds `total` rows.
    pub fn meta(&self, total: u64) -> MetaDto {
        MetaDto {
            total,
            page: self.page,
            limit: self.limit,
        }
    }
}

fn positive(params: &HashMap<String, String>, key: &str) -> Result<Option<u64>, QueryError> {
    let Some(raw) = params.get(key) else {
        return Ok(None);
    };

    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| QueryError::InvalidNumber {
            param: key.to_string(),
            value: raw.clone(),
        })?;

    if value < 1 {
        return Err(QueryError::BelowMinimum(key.to_string()));
    }

    Ok(Some(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(QueryError::InvalidChoice {
                param: SORT_ORDER.to_string(),
                value: value.to_string(),
                allowed: "asc, desc".to_string(),
            }),
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}
