use serde::{Deserialize, Serialize};

/// 每页条数（固定 10）
pub const PAGE_SIZE: usize = 10;

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 实际返回的页码（1 起，已钳位）
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// 对集合分页
///
/// 页码钳位到 `[1, max(1, ceil(count/size))]`，返回切片
/// `[(page-1)·size, min(page·size, count))`；切片自身不会越界
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = (total_items + PAGE_SIZE - 1) / PAGE_SIZE;
    let total_pages = total_pages.max(1);

    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_items);

    let items = if start >= total_items {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}
