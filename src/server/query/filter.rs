//! Declarative per-entity filter specification and the condition builder.

use std::collections::HashMap;

use sea_orm::{sea_query::SelectStatement, ColumnTrait, Condition};

use crate::server::error::query::QueryError;

pub const SEARCH_TERM: &str = "searchTerm";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";

/// How a filter value is checked and bound.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer,
    /// Closed set of accepted literals, matched exactly.
    Enum(&'static [&'static str]),
}

/// Exact-match filter exposed under a query parameter name.
#[derive(Debug)]
pub struct Field<C: 'static> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> Field<C> {
    pub const fn new(name: &'static str, column: C, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

/// Filter resolved through a related table: `column IN (subquery(value))`.
#[derive(Debug)]
pub struct Relational<C: 'static> {
    pub name: &'static str,
    pub column: C,
    pub subquery: fn(i64) -> SelectStatement,
}

/// Everything a list endpoint allows in its query string.
#[derive(Debug)]
pub struct QuerySpec<C: 'static> {
    /// Columns matched by substring when `searchTerm` is given, OR-combined
    pub searchable: &'static [C],
    pub filterable: &'static [Field<C>],
    pub relational: &'static [Relational<C>],
    /// Column bounded by `minPrice` / `maxPrice`
    pub price: Option<C>,
    /// Accepted `sortBy` names and the columns they map to
    pub sortable: &'static [(&'static str, C)],
    pub default_sort: C,
}

impl<C: ColumnTrait + Copy> QuerySpec<C> {
    /// Builds the conjunction of every predicate requested in `params`.
    ///
    /// Empty values are skipped, so a request without filters yields a condition that
    /// matches every row.
    pub fn condition(&self, params: &HashMap<String, String>) -> Result<Condition, QueryError> {
        let mut condition = Condition::all();

        if let Some(term) = non_empty(params, SEARCH_TERM) {
            if !self.searchable.is_empty() {
                let search = self
                    .searchable
                    .iter()
                    .fold(Condition::any(), |any, column| any.add(column.contains(term)));
                condition = condition.add(search);
            }
        }

        for field in self.filterable {
            if let Some(value) = non_empty(params, field.name) {
                condition = condition.add(field.predicate(value)?);
            }
        }

        for relation in self.relational {
            if let Some(value) = non_empty(params, relation.name) {
                let id = integer(relation.name, value)?;
                condition = condition.add(relation.column.in_subquery((relation.subquery)(id)));
            }
        }

        if let Some(column) = self.price {
            let min = non_empty(params, MIN_PRICE)
                .map(|value| integer(MIN_PRICE, value))
                .transpose()?;
            let max = non_empty(params, MAX_PRICE)
                .map(|value| integer(MAX_PRICE, value))
                .transpose()?;

            match (min, max) {
                (Some(min), Some(max)) => condition = condition.add(column.between(min, max)),
                (Some(min), None) => condition = condition.add(column.gte(min)),
                (None, Some(max)) => condition = condition.add(column.lte(max)),
                (None, None) => {}
            }
        }

        Ok(condition)
    }
}

impl<C: ColumnTrait + Copy> Field<C> {
    fn predicate(&self, value: &str) -> Result<Condition, QueryError> {
        let expr = match self.kind {
            FieldKind::Text => self.column.eq(value),
            FieldKind::Integer => self.column.eq(integer(self.name, value)?),
            FieldKind::Enum(allowed) => {
                if !allowed.contains(&value) {
                    return Err(QueryError::InvalidChoice {
                        param: self.name.to_string(),
                        value: value.to_string(),
                        allowed: allowed.join(", "),
                    });
                }
                self.column.eq(value)
            }
        };

        Ok(Condition::all().add(expr))
    }
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn integer(param: &str, value: &str) -> Result<i64, QueryError> {
    value.parse::<i64>().map_err(|_| QueryError::InvalidNumber {
        param: param.to_string(),
        value: value.to_string(),
    })
}
