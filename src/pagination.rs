use regex::Regex;

use crate::photos::PhotoPage;
use crate::videos::VideoPage;

/// Pagination fields shared by photo and video result pages.
pub trait Paged {
    fn per_page(&self) -> u32;
    fn total_results(&self) -> u64;
    fn prev_page_url(&self) -> Option<&str>;
    fn next_page_url(&self) -> Option<&str>;
}

impl Paged for PhotoPage {
    fn per_page(&self) -> u32 {
        self.per_page
    }
    fn total_results(&self) -> u64 {
        self.total_results
    }
    fn prev_page_url(&self) -> Option<&str> {
        self.prev_page.as_deref()
    }
    fn next_page_url(&self) -> Option<&str> {
        self.next_page.as_deref()
    }
}

impl Paged for VideoPage {
    fn per_page(&self) -> u32 {
        self.per_page
    }
    fn total_results(&self) -> u64 {
        self.total_results
    }
    fn prev_page_url(&self) -> Option<&str> {
        self.prev_page.as_deref()
    }
    fn next_page_url(&self) -> Option<&str> {
        self.next_page.as_deref()
    }
}

/// Previous/next page numbers for the footer navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl PageLinks {
    /// Page numbers strictly between the previous and next links, rendered
    /// as direct jumps in the footer strip. Empty when either side is
    /// missing.
    pub fn intermediate_pages(&self) -> Vec<u32> {
        match (self.prev_page, self.next_page) {
            (Some(prev), Some(next)) if next > prev + 1 => (prev + 1..next).collect(),
            _ => Vec::new(),
        }
    }
}

fn page_number_from_url(url: &str) -> Option<u32> {
    let re = Regex::new(r"[?&]page=(\d+)").ok()?;
    re.captures(url)?.get(1)?.as_str().parse().ok()
}

fn total_pages(total_results: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_results.div_ceil(u64::from(per_page))
}

/// Derives the navigation links for a result page.
///
/// The upstream prev/next URLs carry the page numbers; when a previous page
/// exists and there is room, the next link skips five pages ahead instead
/// of stepping by one. A next link is never allowed to reach or pass the
/// total page count.
pub fn next_and_prev_pages<P: Paged>(page: &P) -> PageLinks {
    let prev_page = page.prev_page_url().and_then(page_number_from_url);
    let mut next_page = page.next_page_url().and_then(page_number_from_url);

    let total_pages = total_pages(page.total_results(), page.per_page());

    if let Some(prev) = prev_page {
        if u64::from(prev) + 5 < total_pages {
            next_page = Some(prev + 5);
        }
    }

    if let Some(next) = next_page {
        if u64::from(next) >= total_pages {
            next_page = None;
        }
    }

    PageLinks {
        prev_page,
        next_page,
    }
}
