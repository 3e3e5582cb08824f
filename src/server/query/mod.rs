//! List query parsing shared by every collection endpoint.
//!
//! Query strings are validated against a per-entity `QuerySpec` and turned into a SeaORM
//! `Condition`, an ordering and a page window. Unknown keys and malformed values are
//! rejected with `QueryError` instead of being ignored.

pub mod filter;
pub mod pagination;

use std::collections::HashMap;

use sea_orm::{ColumnTrait, Condition, Order};

use crate::server::{
    error::query::QueryError,
    query::{
        filter::{QuerySpec, MAX_PRICE, MIN_PRICE, SEARCH_TERM},
        pagination::{Pagination, SortOrder, PAGINATION_KEYS, SORT_BY, SORT_ORDER},
    },
};

/// Fully parsed list request.
#[derive(Debug, Clone)]
pub struct ListQuery<C> {
    pub condition: Condition,
    pub pagination: Pagination,
    pub sort_column: C,
    pub sort_order: Order,
}

impl<C: ColumnTrait + Copy> ListQuery<C> {
    /// Parses raw query parameters for an entity described by `fields`.
    ///
    /// # Returns
    /// - `Ok(ListQuery)` - Condition, window and ordering ready for the repository
    /// - `Err(QueryError)` - Unknown parameter, malformed number or enum, page/limit below 1,
    ///   bad sort order, or a `sortBy` that is not a sortable field
    pub fn parse(params: &HashMap<String, String>, fields: &QuerySpec<C>) -> Result<Self, QueryError> {
        let mut unknown: Vec<&String> = params
            .keys()
            .filter(|key| !accepts(fields, key))
            .collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(QueryError::UnknownParameter((*key).clone()));
        }

        let pagination = Pagination::parse(params)?;
        let (sort_column, sort_order) = sort(params, fields)?;
        let condition = fields.condition(params)?;

        Ok(Self {
            condition,
            pagination,
            sort_column,
            sort_order,
        })
    }
}

fn accepts<C: ColumnTrait + Copy>(fields: &QuerySpec<C>, key: &str) -> bool {
    PAGINATION_KEYS.contains(&key)
        || (key == SEARCH_TERM && !fields.searchable.is_empty())
        || ((key == MIN_PRICE || key == MAX_PRICE) && fields.price.is_some())
        || fields.filterable.iter().any(|field| field.name == key)
        || fields.relational.iter().any(|relation| relation.name == key)
}

/// Resolves the ordering. Without `sortBy` the newest rows come first.
fn sort<C: ColumnTrait + Copy>(
    params: &HashMap<String, String>,
    fields: &QuerySpec<C>,
) -> Result<(C, Order), QueryError> {
    let order = match params.get(SORT_ORDER) {
        Some(value) => SortOrder::parse(value)?,
        None => SortOrder::Asc,
    };

    match params.get(SORT_BY).map(|value| value.trim()) {
        None | Some("") => Ok((fields.default_sort, Order::Desc)),
        Some(name) => fields
            .sortable
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, column)| (*column, order.into()))
            .ok_or_else(|| QueryError::UnsortableField(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::query::filter::{Field, FieldKind};
    use entity::user::Column;

    static USER_FIELDS: QuerySpec<Column> = QuerySpec {
        searchable: &[Column::FullName, Column::Address],
        filterable: &[
            Field::new("email", Column::Email, FieldKind::Text),
            Field::new("role", Column::Role, FieldKind::Enum(&["admin", "user"])),
        ],
        relational: &[],
        price: None,
        sortable: &[("fullName", Column::FullName), ("createdAt", Column::CreatedAt)],
        default_sort: Column::CreatedAt,
    };

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_newest_first() {
        let query = ListQuery::parse(&params(&[]), &USER_FIELDS).unwrap();

        assert!(matches!(query.sort_column, Column::CreatedAt));
        assert_eq!(query.sort_order, Order::Desc);
        assert_eq!(query.pagination, Pagination::new(1, 10));
    }

    #[test]
    fn sorts_by_declared_field_ascending_by_default() {
        let query = ListQuery::parse(&params(&[("sortBy", "fullName")]), &USER_FIELDS).unwrap();

        assert!(matches!(query.sort_column, Column::FullName));
        assert_eq!(query.sort_order, Order::Asc);
    }

    #[test]
    fn rejects_unknown_parameter() {
        let result = ListQuery::parse(&params(&[("password", "x")]), &USER_FIELDS);

        assert_eq!(
            result.unwrap_err(),
            QueryError::UnknownParameter("password".to_string())
        );
    }

    #[test]
    fn rejects_unsortable_field() {
        let result = ListQuery::parse(&params(&[("sortBy", "password")]), &USER_FIELDS);

        assert_eq!(
            result.unwrap_err(),
            QueryError::UnsortableField("password".to_string())
        );
    }

    #[test]
    fn rejects_price_bounds_on_entity_without_price() {
        let result = ListQuery::parse(&params(&[("minPrice", "10")]), &USER_FIELDS);

        assert!(matches!(result, Err(QueryError::UnknownParameter(_))));
    }
}
