//! Paging and delete result types shared by the repository ports.

/// Window into an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u32,
}

impl ListQuery {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of results plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total_count: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }

    /// Slices an already ordered, complete list.
    pub fn slice(all: Vec<T>, query: ListQuery) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Self { total_count, items }
    }
}

/// Result of a delete by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome<Id> {
    pub success: bool,
    pub deleted_id: Option<Id>,
}

impl<Id> DeleteOutcome<Id> {
    pub fn deleted(id: Id) -> Self {
        Self {
            success: true,
            deleted_id: Some(id),
        }
    }

    pub fn nothing_deleted() -> Self {
        Self {
            success: false,
            deleted_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_past_the_end_keeps_total() {
        let page = Page::slice((1..=15).collect::<Vec<_>>(), ListQuery::new(10, 10));
        assert_eq!(page.total_count, 15);
        assert_eq!(page.items, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn slice_of_empty_list_is_empty_page() {
        let page = Page::<i32>::slice(Vec::new(), ListQuery::new(10, 0));
        assert_eq!(page, Page::empty());
    }
}
