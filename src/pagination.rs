use std::num::NonZeroUsize;
use std::ops::Range;

use log::warn;

/// Splits a post listing into pages of `post_per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_posts: usize,
    per_page: NonZeroUsize
}

impl Pagination {
    pub fn new(total_posts: usize, per_page: NonZeroUsize) -> Self {
        Self {
            total_posts,
            per_page
        }
    }

    /// Always at least one page, so an empty blog still has an index.
    pub fn page_count(&self) -> usize {
        self.total_posts.div_ceil(self.per_page.get()).max(1)
    }

    /// Index range of the posts on a 1-based `page`.
    pub fn page_range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count() {
            return None;
        }
        let start = (page - 1) * self.per_page.get();
        let end = (start + self.per_page.get()).min(self.total_posts);
        Some(start..end)
    }
}

/// Clamps a raw page size from an untyped source to a positive value.
pub fn clamp_per_page(raw: i64) -> NonZeroUsize {
    usize::try_from(raw)
        .ok()
        .and_then(NonZeroUsize::new)
        .unwrap_or_else(|| {
            warn!("post_per_page {} is not positive, using 1", raw);
            NonZeroUsize::MIN
        })
}
