// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Client-side pagination over the in-memory post list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Posts-per-page choices offered by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    /// Six posts.
    #[default]
    Six,
    /// Ten posts.
    Ten,
    /// Twenty-four posts.
    TwentyFour,
}

/// Rejected page-size value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported page size {0} (expected 6, 10 or 24)")]
pub struct PageSizeError(pub u32);

impl PageSize {
    /// All choices, in the order the selector lists them.
    pub const ALL: [PageSize; 3] = [PageSize::Six, PageSize::Ten, PageSize::TwentyFour];

    /// Number of posts per page.
    pub fn get(self) -> usize {
        match self {
            PageSize::Six => 6,
            PageSize::Ten => 10,
            PageSize::TwentyFour => 24,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(PageSize::Six),
            10 => Ok(PageSize::Ten),
            24 => Ok(PageSize::TwentyFour),
            other => Err(PageSizeError(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Six => 6,
            PageSize::Ten => 10,
            PageSize::TwentyFour => 24,
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| PageSizeError(0))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    size: PageSize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Pager {
    /// First page at the given size.
    pub fn new(size: PageSize) -> Self {
        Self { page: 1, size }
    }

    /// Current page, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Index range of the current page, clamped to `total`.
    pub fn window(&self, total: usize) -> Range<usize> {
        let size = self.size.get();
        let start = (self.page - 1).saturating_mul(size).min(total);
        let end = self.page.saturating_mul(size).min(total);
        start..end
    }

    /// Items visible on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    /// "Previous" is enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is enabled; disabled exactly when `page * size >= total`.
    pub fn has_next(&self, total: usize) -> bool {
        self.page.saturating_mul(self.size.get()) < total
    }

    /// Advance one page if possible. Returns whether the page changed.
    pub fn next(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page if possible. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Change the page size and return to the first page.
    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn thirteen_posts_in_pages_of_six() {
        let posts: Vec<usize> = (0..13).collect();
        let mut pager = Pager::new(PageSize::Six);

        assert_eq!(pager.slice(&posts), &[0, 1, 2, 3, 4, 5]);
        assert!(!pager.has_prev());
        assert!(pager.has_next(13));

        assert!(pager.next(13));
        assert_eq!(pager.slice(&posts), &[6, 7, 8, 9, 10, 11]);
        assert!(pager.has_next(13));

        assert!(pager.next(13));
        assert_eq!(pager.slice(&posts), &[12]);
        assert!(!pager.has_next(13));
        assert!(!pager.next(13));
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn next_is_disabled_exactly_at_the_boundary() {
        let mut pager = Pager::new(PageSize::Six);
        assert!(pager.has_next(7));
        assert!(!pager.has_next(6));
        pager.page = 2;
        assert!(!pager.has_next(12));
        assert!(pager.has_next(13));
    }

    #[test]
    fn empty_list_has_no_pages_to_move_to() {
        let mut pager = Pager::default();
        let empty: [u8; 0] = [];
        assert!(pager.slice(&empty).is_empty());
        assert!(!pager.next(0));
        assert!(!pager.prev());
    }

    #[test]
    fn changing_size_resets_to_first_page() {
        let mut pager = Pager::new(PageSize::Six);
        assert!(pager.next(30));
        assert!(pager.next(30));
        pager.set_size(PageSize::Ten);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.window(30), 0..10);
    }

    #[test]
    fn page_size_accepts_only_offered_values() {
        assert_eq!("24".parse::<PageSize>().unwrap(), PageSize::TwentyFour);
        assert_eq!(PageSize::try_from(7), Err(PageSizeError(7)));
        assert!("six".parse::<PageSize>().is_err());
        let json: PageSize = serde_json::from_str("10").unwrap();
        assert_eq!(json, PageSize::Ten);
        assert!(serde_json::from_str::<PageSize>("12").is_err());
    }
}
