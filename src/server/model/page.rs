use crate::{
    model::api::{ApiResponse, MetaDto},
    server::query::pagination::Pagination,
};

/// One page of a filtered listing.
///
/// `total` counts every row matching the filters, not just the rows in `items`.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn meta(&self) -> MetaDto {
        self.pagination.meta(self.total)
    }

    /// Wraps the page in the success envelope, converting each item with `into_dto`.
    pub fn into_response<D>(
        self,
        message: impl Into<String>,
        into_dto: impl FnMut(T) -> D,
    ) -> ApiResponse<Vec<D>> {
        let meta = self.meta();
        ApiResponse::ok(message, self.items.into_iter().map(into_dto).collect()).with_meta(meta)
    }
}
