// farmgate/src/model/page.rs

use serde::Serialize;

/// Fixed page size shared by every paginated listing.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an already-ordered result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// 1-based page number this page corresponds to.
  pub page: usize,
  pub page_size: usize,
  pub total_items: usize,
  pub total_pages: usize,
}

impl<T> Page<T> {
  /// Cuts one page out of the full, pre-sorted result set. A page number
  /// past the end yields an empty page rather than an error, matching what
  /// a table view expects. Page 0 is treated as page 1.
  pub fn slice(all: Vec<T>, page: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = all.len();
    let total_pages = total_items.div_ceil(DEFAULT_PAGE_SIZE);
    let items = all
      .into_iter()
      .skip((page - 1) * DEFAULT_PAGE_SIZE)
      .take(DEFAULT_PAGE_SIZE)
      .collect();
    Page {
      items,
      page,
      page_size: DEFAULT_PAGE_SIZE,
      total_items,
      total_pages,
    }
  }
}
