use serde::{Deserialize, Serialize};

/// Page cursor over the visitor entry list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: u64,
}

impl Pager {
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self {
            current_page: 1,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.per_page.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Next page number, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages()).then(|| self.current_page + 1)
    }

    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Up to `visible` page numbers around the current page.
    ///
    /// The window starts two pages before the current one and shifts left
    /// near the last page so it stays full when enough pages exist.
    #[must_use]
    pub fn visible_pages(&self, visible: u32) -> Vec<u32> {
        let total = self.total_pages();
        let visible = visible.max(1);
        if total == 0 {
            return Vec::new();
        }

        let mut start = self.current_page.saturating_sub(2).max(1).min(total);
        let end = total.min(start.saturating_add(visible - 1));
        if end - start < visible - 1 {
            start = end.saturating_sub(visible - 1).max(1);
        }
        (start..=end).collect()
    }
}
