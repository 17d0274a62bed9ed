use serde::{Deserialize, Serialize};

/// One page of a listing. `has_next_page` is a guess: upstream never reports
/// a total, so a full page is taken to mean more may follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub has_next_page: bool,
}

impl<T> ListingPage<T> {
    pub fn from_items(items: Vec<T>, page_size: usize) -> Self {
        let has_next_page = items.len() == page_size;
        Self {
            items,
            has_next_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
