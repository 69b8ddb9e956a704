/// One page of an in-memory result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginated<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    per_page: usize,
}

impl<'a, T> Paginated<'a, T> {
    /// Slice `page` (1-based) out of `all`. Pages past the end are empty.
    pub fn new(all: &'a [T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let start = (page - 1).saturating_mul(per_page).min(all.len());
        let end = (start + per_page).min(all.len());

        Self {
            items: &all[start..end],
            page,
            total_pages: total_pages(all.len(), per_page),
            total_items: all.len(),
            per_page,
        }
    }

    /// Page buttons, `1..=total_pages`
    pub fn pages(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last visible item, `None` when the page is empty
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1).saturating_mul(self.per_page) + 1;
        Some((first, first + self.items.len() - 1))
    }
}

pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}
