// File: crates/stats-core/src/page.rs
// Summary: Fixed-size paging window over an external ordered list.

/// Bounds-clamped pager. `per_page` is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// The visible slice `[page * per_page, page * per_page + per_page)`,
    /// clamped to the list bounds.
    pub fn slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        let start = (self.page * self.per_page).min(list.len());
        let end = (start + self.per_page).min(list.len());
        &list[start..end]
    }

    /// Move by `delta` pages with clamping, returning the new page index.
    ///
    /// The upper bound compares against the FRACTIONAL page count
    /// (`list_len / per_page`, no ceiling), matching the observed behavior
    /// of the interface this ports; the clamped landing index is floored to
    /// an integer. Looks off-by-one near the end but is intentional.
    pub fn move_by(&mut self, delta: i64, list_len: usize) -> usize {
        let next = self.page as i64 + delta;
        let pages = list_len as f64 / self.per_page as f64;
        self.page = if next <= 0 {
            0
        } else if next as f64 > pages {
            (pages - 1.0).max(0.0).floor() as usize
        } else {
            next as usize
        };
        self.page
    }
}
